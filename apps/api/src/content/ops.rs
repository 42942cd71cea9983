//! Document-level edit operations.
//!
//! Every operation borrows the current document and returns the next one;
//! the input is never touched. A target that cannot be resolved (unknown
//! section, entry or field id, or a field that does not fit the entry kind)
//! yields an unchanged copy, so callers detect "nothing happened" by
//! comparing the two values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::custom_fields::{
    apply_field_update, new_custom_field, starter_fields, CustomFieldUpdate,
};
use crate::content::fields::{apply_entry_edit, apply_personal_field, EntryFieldEdit, PersonalField};
use crate::content::ids::{fresh_entry_id, fresh_section_id};
use crate::models::{
    CustomEntry, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, Section,
    SectionEntries, SkillEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Runs `edit` on a copy of the named section. The copy is kept only when
/// `edit` reports a change.
fn edit_section(
    doc: &ResumeDocument,
    section_id: &str,
    edit: impl FnOnce(&mut Section) -> bool,
) -> ResumeDocument {
    let mut next = doc.clone();
    let changed = match next.section_mut(section_id) {
        Some(section) => edit(section),
        None => {
            debug!("section {section_id} not found; edit ignored");
            false
        }
    };
    if changed {
        next
    } else {
        doc.clone()
    }
}

pub fn update_personal_info(
    doc: &ResumeDocument,
    field: PersonalField,
    value: &str,
) -> ResumeDocument {
    let mut next = doc.clone();
    apply_personal_field(&mut next.personal_info, field, value);
    next
}

pub fn update_entry_field(
    doc: &ResumeDocument,
    section_id: &str,
    entry_id: &str,
    edit: &EntryFieldEdit,
) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        apply_entry_edit(&mut section.entries, entry_id, edit)
    })
}

/// Appends a default entry of the section's kind with a fresh id.
pub fn add_entry(doc: &ResumeDocument, section_id: &str) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        let id = fresh_entry_id(section);
        match &mut section.entries {
            SectionEntries::Experience(list) => list.push(ExperienceEntry {
                id,
                company: "New Company".to_string(),
                title: "Job Title".to_string(),
                location: String::new(),
                start_date: String::new(),
                end_date: None,
                is_current: false,
                achievements: Vec::new(),
            }),
            SectionEntries::Education(list) => list.push(EducationEntry {
                id,
                institution: "University".to_string(),
                degree: "Degree".to_string(),
                field_of_study: "Field".to_string(),
                graduation_date: String::new(),
                gpa: None,
                grade_type: None,
            }),
            SectionEntries::Skills(list) => list.push(SkillEntry {
                id,
                category: "technical".to_string(),
                skills: Vec::new(),
            }),
            SectionEntries::Projects(list) => list.push(ProjectEntry {
                id,
                name: "Project Name".to_string(),
                description: String::new(),
                technologies: Vec::new(),
                url: None,
                start_date: String::new(),
                end_date: None,
            }),
            SectionEntries::Custom(list) => list.push(CustomEntry {
                id,
                fields: starter_fields(),
            }),
        }
        true
    })
}

pub fn remove_entry(doc: &ResumeDocument, section_id: &str, entry_id: &str) -> ResumeDocument {
    edit_section(doc, section_id, |section| section.entries.remove(entry_id))
}

pub fn toggle_section_visibility(doc: &ResumeDocument, section_id: &str) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        section.is_visible = !section.is_visible;
        true
    })
}

/// Swaps the order slot at `index` with its neighbour. Out-of-range moves
/// are no-ops.
pub fn move_section(doc: &ResumeDocument, index: usize, direction: Direction) -> ResumeDocument {
    let len = doc.section_order.len();
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    match target {
        Some(target) if index < len && target < len => {
            let mut next = doc.clone();
            next.section_order.swap(index, target);
            next
        }
        _ => doc.clone(),
    }
}

/// Appends an empty, visible custom section titled `title` to both the
/// sections and the display order. Blank titles are rejected.
pub fn add_section(doc: &ResumeDocument, title: &str) -> ResumeDocument {
    let title = title.trim();
    if title.is_empty() {
        return doc.clone();
    }
    let id = fresh_section_id(doc);
    let mut next = doc.clone();
    next.sections.push(Section {
        id: id.clone(),
        title: title.to_string(),
        is_custom: true,
        is_visible: true,
        entries: SectionEntries::Custom(Vec::new()),
    });
    next.section_order.push(id);
    next
}

/// Removes the section and its order slot together. Applies only when the id
/// is present in both lists.
pub fn remove_section(doc: &ResumeDocument, section_id: &str) -> ResumeDocument {
    let section_pos = doc.sections.iter().position(|s| s.id == section_id);
    let order_pos = doc.section_order.iter().position(|id| id == section_id);
    let (Some(section_pos), Some(order_pos)) = (section_pos, order_pos) else {
        debug!("section {section_id} not in both lists; remove ignored");
        return doc.clone();
    };
    let mut next = doc.clone();
    next.sections.remove(section_pos);
    next.section_order.remove(order_pos);
    next
}

pub fn add_custom_field(doc: &ResumeDocument, section_id: &str, entry_id: &str) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        match section.entries.custom_entry_mut(entry_id) {
            Some(entry) => {
                let field = new_custom_field(entry);
                entry.fields.push(field);
                true
            }
            None => false,
        }
    })
}

pub fn update_custom_field(
    doc: &ResumeDocument,
    section_id: &str,
    entry_id: &str,
    field_id: &str,
    update: &CustomFieldUpdate,
) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        let field = section
            .entries
            .custom_entry_mut(entry_id)
            .and_then(|entry| entry.fields.iter_mut().find(|f| f.id == field_id));
        match field {
            Some(field) => {
                apply_field_update(field, update);
                true
            }
            None => false,
        }
    })
}

pub fn remove_custom_field(
    doc: &ResumeDocument,
    section_id: &str,
    entry_id: &str,
    field_id: &str,
) -> ResumeDocument {
    edit_section(doc, section_id, |section| {
        match section.entries.custom_entry_mut(entry_id) {
            Some(entry) => {
                let before = entry.fields.len();
                entry.fields.retain(|f| f.id != field_id);
                entry.fields.len() != before
            }
            None => false,
        }
    })
}

/// Sets accent and heading color together, as the heading color picker does.
pub fn set_theme_color(doc: &ResumeDocument, color: &str) -> ResumeDocument {
    let color = color.trim();
    if color.is_empty() {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.color_accent = color.to_string();
    next.heading_color = Some(color.to_string());
    next
}

pub fn rename_document(doc: &ResumeDocument, name: &str) -> ResumeDocument {
    let name = name.trim();
    if name.is_empty() {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.name = name.to_string();
    next
}
