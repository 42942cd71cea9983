use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::entry::{
    CustomEntry, EducationEntry, ExperienceEntry, ProjectEntry, SkillEntry,
};

/// Section identifier, unique within a document.
pub type SectionId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Custom => "custom",
        }
    }
}

/// The entries of a section, tagged by section kind.
///
/// Serialized as sibling `type` and `entries` keys of the owning section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entries", rename_all = "lowercase")]
pub enum SectionEntries {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillEntry>),
    Projects(Vec<ProjectEntry>),
    Custom(Vec<CustomEntry>),
}

impl SectionEntries {
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Experience => SectionEntries::Experience(Vec::new()),
            SectionKind::Education => SectionEntries::Education(Vec::new()),
            SectionKind::Skills => SectionEntries::Skills(Vec::new()),
            SectionKind::Projects => SectionEntries::Projects(Vec::new()),
            SectionKind::Custom => SectionEntries::Custom(Vec::new()),
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            SectionEntries::Experience(_) => SectionKind::Experience,
            SectionEntries::Education(_) => SectionKind::Education,
            SectionEntries::Skills(_) => SectionKind::Skills,
            SectionEntries::Projects(_) => SectionKind::Projects,
            SectionEntries::Custom(_) => SectionKind::Custom,
        }
    }

    /// Entry ids in storage order.
    pub fn entry_ids(&self) -> Vec<&str> {
        match self {
            SectionEntries::Experience(v) => v.iter().map(|e| e.id.as_str()).collect(),
            SectionEntries::Education(v) => v.iter().map(|e| e.id.as_str()).collect(),
            SectionEntries::Skills(v) => v.iter().map(|e| e.id.as_str()).collect(),
            SectionEntries::Projects(v) => v.iter().map(|e| e.id.as_str()).collect(),
            SectionEntries::Custom(v) => v.iter().map(|e| e.id.as_str()).collect(),
        }
    }

    pub fn contains(&self, entry_id: &str) -> bool {
        self.entry_ids().contains(&entry_id)
    }

    pub fn len(&self) -> usize {
        match self {
            SectionEntries::Experience(v) => v.len(),
            SectionEntries::Education(v) => v.len(),
            SectionEntries::Skills(v) => v.len(),
            SectionEntries::Projects(v) => v.len(),
            SectionEntries::Custom(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops the entry with `entry_id`, keeping the others in order.
    /// Returns false when no entry matched.
    pub fn remove(&mut self, entry_id: &str) -> bool {
        fn retain<T>(entries: &mut Vec<T>, id_of: impl Fn(&T) -> &str, entry_id: &str) -> bool {
            let before = entries.len();
            entries.retain(|e| id_of(e) != entry_id);
            entries.len() != before
        }
        match self {
            SectionEntries::Experience(v) => retain(v, |e| e.id.as_str(), entry_id),
            SectionEntries::Education(v) => retain(v, |e| e.id.as_str(), entry_id),
            SectionEntries::Skills(v) => retain(v, |e| e.id.as_str(), entry_id),
            SectionEntries::Projects(v) => retain(v, |e| e.id.as_str(), entry_id),
            SectionEntries::Custom(v) => retain(v, |e| e.id.as_str(), entry_id),
        }
    }

    pub fn custom_entry_mut(&mut self, entry_id: &str) -> Option<&mut CustomEntry> {
        match self {
            SectionEntries::Custom(v) => v.iter_mut().find(|e| e.id == entry_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    /// Created by the user rather than shipped with the default document.
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    #[serde(flatten)]
    pub entries: SectionEntries,
}

fn visible_by_default() -> bool {
    true
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.entries.kind()
    }
}

/// Root aggregate edited by the content model and projected by the renderer.
///
/// # Invariants
/// - `section_order` is a permutation of the ids in `sections`.
/// - Entry ids are unique within a section, custom field ids within an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub id: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
    pub personal_info: PersonalInfo,
    pub sections: Vec<Section>,
    pub section_order: Vec<SectionId>,
    pub template_id: String,
    pub color_accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_color: Option<String>,
}

impl ResumeDocument {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    /// Sections in display order. Ids without a matching section are skipped.
    pub fn ordered_sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.section_order.iter().filter_map(|id| self.section(id))
    }

    /// True when `section_order` and `sections` hold exactly the same ids,
    /// each once.
    pub fn is_order_consistent(&self) -> bool {
        if self.section_order.len() != self.sections.len() {
            return false;
        }
        let ordered: HashSet<&str> = self.section_order.iter().map(String::as_str).collect();
        let stored: HashSet<&str> = self.sections.iter().map(|s| s.id.as_str()).collect();
        ordered.len() == self.section_order.len()
            && stored.len() == self.sections.len()
            && ordered == stored
    }

    /// Rebuilds `section_order` into a permutation of the section ids:
    /// unknown and repeated ids are dropped, sections missing from the order
    /// are appended in storage order. Sections sharing an id keep only the
    /// first occurrence. Returns true if anything changed.
    pub fn repair_section_order(&mut self) -> bool {
        if self.is_order_consistent() {
            return false;
        }
        let mut changed = false;

        let mut seen_sections = HashSet::new();
        let before = self.sections.len();
        self.sections.retain(|s| seen_sections.insert(s.id.clone()));
        changed |= self.sections.len() != before;

        let mut seen = HashSet::new();
        let mut order: Vec<SectionId> = Vec::with_capacity(self.sections.len());
        for id in &self.section_order {
            if seen_sections.contains(id) && seen.insert(id.clone()) {
                order.push(id.clone());
            }
        }
        for section in &self.sections {
            if seen.insert(section.id.clone()) {
                order.push(section.id.clone());
            }
        }

        changed |= order != self.section_order;
        self.section_order = order;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::defaults::default_document;
    use serde_json::json;

    #[test]
    fn test_default_document_is_consistent() {
        let doc = default_document();
        assert!(doc.is_order_consistent());
        assert_eq!(
            doc.section_order,
            vec!["exp-section", "edu-section", "skills-section", "proj-section"]
        );
    }

    #[test]
    fn test_section_wire_shape_has_type_beside_entries() {
        let doc = default_document();
        let value = serde_json::to_value(&doc).unwrap();
        let first = &value["sections"][0];
        assert_eq!(first["type"], json!("experience"));
        assert_eq!(first["isCustom"], json!(false));
        assert_eq!(first["isVisible"], json!(true));
        assert!(first["entries"].is_array());
        assert!(value["sectionOrder"].is_array());
        assert_eq!(value["colorAccent"], json!("#2563eb"));
        assert!(value["personalInfo"]["linkedIn"].is_string());
    }

    #[test]
    fn test_document_survives_json_persistence() {
        let doc = default_document();
        let raw = serde_json::to_string(&doc).unwrap();
        let restored: ResumeDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, doc);
        assert_eq!(restored.updated_at, doc.updated_at);
    }

    #[test]
    fn test_updated_at_restored_from_string() {
        let mut value = serde_json::to_value(default_document()).unwrap();
        value["updatedAt"] = json!("2026-01-15T09:30:00.000Z");
        let doc: ResumeDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc.updated_at.to_rfc3339(), "2026-01-15T09:30:00+00:00");
    }

    #[test]
    fn test_section_missing_visibility_defaults_visible() {
        let raw = json!({
            "id": "custom-1",
            "type": "custom",
            "title": "Awards",
            "isCustom": true,
            "entries": []
        });
        let section: Section = serde_json::from_value(raw).unwrap();
        assert!(section.is_visible);
        assert_eq!(section.kind(), SectionKind::Custom);
    }

    #[test]
    fn test_order_inconsistency_detected() {
        let mut doc = default_document();
        doc.section_order.push("ghost".to_string());
        assert!(!doc.is_order_consistent());

        let mut doc = default_document();
        doc.section_order.pop();
        assert!(!doc.is_order_consistent());

        let mut doc = default_document();
        doc.section_order[1] = doc.section_order[0].clone();
        assert!(!doc.is_order_consistent());
    }

    #[test]
    fn test_repair_section_order() {
        let mut doc = default_document();
        doc.section_order = vec![
            "skills-section".to_string(),
            "ghost".to_string(),
            "skills-section".to_string(),
            "exp-section".to_string(),
        ];
        assert!(doc.repair_section_order());
        assert_eq!(
            doc.section_order,
            vec!["skills-section", "exp-section", "edu-section", "proj-section"]
        );
        assert!(doc.is_order_consistent());
        assert!(!doc.repair_section_order());
    }

    #[test]
    fn test_ordered_sections_follow_order_not_storage() {
        let mut doc = default_document();
        doc.section_order.reverse();
        let ids: Vec<&str> = doc.ordered_sections().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["proj-section", "skills-section", "edu-section", "exp-section"]
        );
    }

    #[test]
    fn test_remove_entry_keeps_relative_order() {
        let mut entries = SectionEntries::Skills(
            ["a", "b", "c", "d"]
                .iter()
                .map(|id| SkillEntry {
                    id: id.to_string(),
                    category: "technical".to_string(),
                    skills: vec![],
                })
                .collect(),
        );
        assert!(entries.remove("b"));
        assert_eq!(entries.entry_ids(), vec!["a", "c", "d"]);
        assert!(!entries.remove("missing"));
        assert_eq!(entries.len(), 3);
    }
}
