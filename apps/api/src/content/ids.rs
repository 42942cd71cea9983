//! Identifier generation scoped to a container.
//!
//! Ids are random UUIDs. Uniqueness is only required inside the owning
//! container (sections in a document, entries in a section, fields in an
//! entry), so a candidate is re-drawn if it already exists there.

use uuid::Uuid;

use crate::models::{CustomEntry, ResumeDocument, Section};

/// Draws UUIDs until one is not taken.
pub fn fresh_id(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = format!("{prefix}{}", Uuid::new_v4());
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}

/// A section id not used by any section or order slot of `doc`.
pub fn fresh_section_id(doc: &ResumeDocument) -> String {
    fresh_id("custom-", |candidate| {
        doc.sections.iter().any(|s| s.id == candidate)
            || doc.section_order.iter().any(|id| id == candidate)
    })
}

/// An entry id not used inside `section`.
pub fn fresh_entry_id(section: &Section) -> String {
    fresh_id("", |candidate| section.entries.contains(candidate))
}

/// A field id not used inside `entry` nor in `reserved`.
pub fn fresh_field_id(entry: Option<&CustomEntry>, reserved: &[String]) -> String {
    fresh_id("", |candidate| {
        entry.is_some_and(|e| e.field(candidate).is_some())
            || reserved.iter().any(|r| r == candidate)
    })
}
