pub mod defaults;
pub mod entry;
pub mod resume;

pub use entry::{
    CustomEntry, CustomField, CustomFieldContent, CustomFieldKind, EducationEntry, EntryId,
    ExperienceEntry, FieldId, GradeType, ProjectEntry, SkillEntry,
};
pub use resume::{PersonalInfo, ResumeDocument, Section, SectionEntries, SectionId, SectionKind};
