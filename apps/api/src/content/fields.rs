//! Field-level edits: personal info fields and typed entry fields.
//!
//! The view layer sends a field name plus the raw text the user typed. List
//! fields arrive as a single string and are decoded here.

use serde::{Deserialize, Serialize};

use crate::models::{GradeType, PersonalInfo, SectionEntries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    LinkedIn,
    Portfolio,
    Summary,
}

/// One edit to one field of an entry. The variant is the field name; the
/// payload is the raw value.
///
/// `Achievements` is one item per line. `Skills` and `Technologies` are
/// comma separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EntryFieldEdit {
    // experience
    Company(String),
    Title(String),
    Location(String),
    IsCurrent(bool),
    Achievements(String),
    // experience and projects
    StartDate(String),
    EndDate(Option<String>),
    // education
    Institution(String),
    Degree(String),
    FieldOfStudy(String),
    GraduationDate(String),
    Gpa(Option<String>),
    GradeType(Option<GradeType>),
    // skills
    Category(String),
    Skills(String),
    // projects
    Name(String),
    Description(String),
    Technologies(String),
    Url(Option<String>),
}

/// Splits multi-line input into one item per line, keeping blank lines the
/// user is still typing between. Empty input yields no items.
pub fn split_lines(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Splits comma separated input, trimming each item and dropping empties.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank optional values are stored as absent.
fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

pub(crate) fn apply_personal_field(info: &mut PersonalInfo, field: PersonalField, value: &str) {
    let value = value.to_string();
    match field {
        PersonalField::FullName => info.full_name = value,
        PersonalField::Email => info.email = value,
        PersonalField::Phone => info.phone = value,
        PersonalField::Location => info.location = value,
        PersonalField::LinkedIn => info.linked_in = non_blank(&Some(value)),
        PersonalField::Portfolio => info.portfolio = non_blank(&Some(value)),
        PersonalField::Summary => info.summary = value,
    }
}

/// Applies `edit` to the entry `entry_id`. Returns false when the entry is
/// missing or the field does not exist on this kind of entry.
pub(crate) fn apply_entry_edit(
    entries: &mut SectionEntries,
    entry_id: &str,
    edit: &EntryFieldEdit,
) -> bool {
    use EntryFieldEdit as F;

    match entries {
        SectionEntries::Experience(list) => {
            let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) else {
                return false;
            };
            match edit {
                F::Company(v) => entry.company = v.clone(),
                F::Title(v) => entry.title = v.clone(),
                F::Location(v) => entry.location = v.clone(),
                F::StartDate(v) => entry.start_date = v.clone(),
                F::EndDate(v) => entry.end_date = non_blank(v),
                F::IsCurrent(current) => {
                    entry.is_current = *current;
                    if *current {
                        entry.end_date = None;
                    }
                }
                F::Achievements(raw) => entry.achievements = split_lines(raw),
                _ => return false,
            }
        }
        SectionEntries::Education(list) => {
            let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) else {
                return false;
            };
            match edit {
                F::Institution(v) => entry.institution = v.clone(),
                F::Degree(v) => entry.degree = v.clone(),
                F::FieldOfStudy(v) => entry.field_of_study = v.clone(),
                F::GraduationDate(v) => entry.graduation_date = v.clone(),
                F::Gpa(v) => entry.gpa = non_blank(v),
                F::GradeType(v) => entry.grade_type = *v,
                _ => return false,
            }
        }
        SectionEntries::Skills(list) => {
            let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) else {
                return false;
            };
            match edit {
                F::Category(v) => entry.category = v.clone(),
                F::Skills(raw) => entry.skills = split_csv(raw),
                _ => return false,
            }
        }
        SectionEntries::Projects(list) => {
            let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) else {
                return false;
            };
            match edit {
                F::Name(v) => entry.name = v.clone(),
                F::Description(v) => entry.description = v.clone(),
                F::Technologies(raw) => entry.technologies = split_csv(raw),
                F::Url(v) => entry.url = non_blank(v),
                F::StartDate(v) => entry.start_date = v.clone(),
                F::EndDate(v) => entry.end_date = non_blank(v),
                _ => return false,
            }
        }
        // Custom entries are edited field by field through custom_fields.
        SectionEntries::Custom(_) => return false,
    }
    true
}
