use serde::{Deserialize, Serialize};

use crate::content::custom_fields::CustomFieldUpdate;
use crate::content::fields::{EntryFieldEdit, PersonalField};
use crate::content::ops::{self, Direction};
use crate::models::{EntryId, FieldId, ResumeDocument, SectionId};

/// A discrete edit sent by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    UpdatePersonalInfo {
        field: PersonalField,
        value: String,
    },
    UpdateEntryField {
        section_id: SectionId,
        entry_id: EntryId,
        edit: EntryFieldEdit,
    },
    AddEntry {
        section_id: SectionId,
    },
    RemoveEntry {
        section_id: SectionId,
        entry_id: EntryId,
    },
    ToggleSectionVisibility {
        section_id: SectionId,
    },
    MoveSection {
        index: usize,
        direction: Direction,
    },
    AddSection {
        title: String,
    },
    RemoveSection {
        section_id: SectionId,
    },
    AddCustomField {
        section_id: SectionId,
        entry_id: EntryId,
    },
    UpdateCustomField {
        section_id: SectionId,
        entry_id: EntryId,
        field_id: FieldId,
        update: CustomFieldUpdate,
    },
    RemoveCustomField {
        section_id: SectionId,
        entry_id: EntryId,
        field_id: FieldId,
    },
    SetThemeColor {
        color: String,
    },
    RenameDocument {
        name: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpdatePersonalInfo { .. } => "update_personal_info",
            Command::UpdateEntryField { .. } => "update_entry_field",
            Command::AddEntry { .. } => "add_entry",
            Command::RemoveEntry { .. } => "remove_entry",
            Command::ToggleSectionVisibility { .. } => "toggle_section_visibility",
            Command::MoveSection { .. } => "move_section",
            Command::AddSection { .. } => "add_section",
            Command::RemoveSection { .. } => "remove_section",
            Command::AddCustomField { .. } => "add_custom_field",
            Command::UpdateCustomField { .. } => "update_custom_field",
            Command::RemoveCustomField { .. } => "remove_custom_field",
            Command::SetThemeColor { .. } => "set_theme_color",
            Command::RenameDocument { .. } => "rename_document",
        }
    }

    /// Produces the next document. `doc` is left as it was.
    pub fn apply(&self, doc: &ResumeDocument) -> ResumeDocument {
        match self {
            Command::UpdatePersonalInfo { field, value } => {
                ops::update_personal_info(doc, *field, value)
            }
            Command::UpdateEntryField {
                section_id,
                entry_id,
                edit,
            } => ops::update_entry_field(doc, section_id, entry_id, edit),
            Command::AddEntry { section_id } => ops::add_entry(doc, section_id),
            Command::RemoveEntry {
                section_id,
                entry_id,
            } => ops::remove_entry(doc, section_id, entry_id),
            Command::ToggleSectionVisibility { section_id } => {
                ops::toggle_section_visibility(doc, section_id)
            }
            Command::MoveSection { index, direction } => {
                ops::move_section(doc, *index, *direction)
            }
            Command::AddSection { title } => ops::add_section(doc, title),
            Command::RemoveSection { section_id } => ops::remove_section(doc, section_id),
            Command::AddCustomField {
                section_id,
                entry_id,
            } => ops::add_custom_field(doc, section_id, entry_id),
            Command::UpdateCustomField {
                section_id,
                entry_id,
                field_id,
                update,
            } => ops::update_custom_field(doc, section_id, entry_id, field_id, update),
            Command::RemoveCustomField {
                section_id,
                entry_id,
                field_id,
            } => ops::remove_custom_field(doc, section_id, entry_id, field_id),
            Command::SetThemeColor { color } => ops::set_theme_color(doc, color),
            Command::RenameDocument { name } => ops::rename_document(doc, name),
        }
    }
}
