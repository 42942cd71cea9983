use serde::{Deserialize, Serialize};

/// Entry identifier, unique within its owning section.
pub type EntryId = String;

/// Custom field identifier, unique within its owning entry.
pub type FieldId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    /// Ignored by the renderer while `is_current` is set.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeType {
    #[serde(rename = "CGPA")]
    Cgpa,
    Percentage,
    #[serde(rename = "GPA")]
    Gpa,
}

impl GradeType {
    pub fn label(&self) -> &'static str {
        match self {
            GradeType::Cgpa => "CGPA",
            GradeType::Percentage => "Percentage",
            GradeType::Gpa => "GPA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    #[serde(default)]
    pub graduation_date: String,
    /// Grade value as typed by the user; its meaning depends on `grade_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_type: Option<GradeType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: EntryId,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldKind {
    Text,
    Date,
    Url,
    Bullets,
}

/// Value of a custom field. The variant doubles as the field kind, so a
/// `bullets` field always carries a list and every other kind a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CustomFieldContent {
    Text(String),
    Date(String),
    Url(String),
    Bullets(Vec<String>),
}

impl CustomFieldContent {
    pub fn kind(&self) -> CustomFieldKind {
        match self {
            CustomFieldContent::Text(_) => CustomFieldKind::Text,
            CustomFieldContent::Date(_) => CustomFieldKind::Date,
            CustomFieldContent::Url(_) => CustomFieldKind::Url,
            CustomFieldContent::Bullets(_) => CustomFieldKind::Bullets,
        }
    }

    /// The blank value a field takes when switched to `kind`.
    pub fn empty(kind: CustomFieldKind) -> Self {
        match kind {
            CustomFieldKind::Text => CustomFieldContent::Text(String::new()),
            CustomFieldKind::Date => CustomFieldContent::Date(String::new()),
            CustomFieldKind::Url => CustomFieldContent::Url(String::new()),
            CustomFieldKind::Bullets => CustomFieldContent::Bullets(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: FieldId,
    pub label: String,
    #[serde(flatten)]
    pub content: CustomFieldContent,
}

impl CustomField {
    pub fn kind(&self) -> CustomFieldKind {
        self.content.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
    pub id: EntryId,
    #[serde(default)]
    pub fields: Vec<CustomField>,
}

impl CustomEntry {
    pub fn field(&self, field_id: &str) -> Option<&CustomField> {
        self.fields.iter().find(|f| f.id == field_id)
    }
}
