//! The starting document shown on first launch and after a reset.

use chrono::Utc;
use uuid::Uuid;

use crate::models::entry::{EducationEntry, ExperienceEntry, GradeType, SkillEntry};
use crate::models::resume::{PersonalInfo, ResumeDocument, Section, SectionEntries};

pub const DEFAULT_TEMPLATE_ID: &str = "classic";
pub const DEFAULT_ACCENT_COLOR: &str = "#2563eb";

/// Heading colors offered by the editor's color picker, as (hex, name).
pub const HEADING_COLOR_PALETTE: &[(&str, &str)] = &[
    ("#2563eb", "Blue"),
    ("#16a34a", "Green"),
    ("#dc2626", "Red"),
    ("#9333ea", "Purple"),
    ("#ea580c", "Orange"),
    ("#0891b2", "Cyan"),
    ("#4b5563", "Gray"),
    ("#000000", "Black"),
];

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_sections() -> Vec<Section> {
    vec![
        Section {
            id: "exp-section".to_string(),
            title: "Professional Experience".to_string(),
            is_custom: false,
            is_visible: true,
            entries: SectionEntries::Experience(vec![ExperienceEntry {
                id: new_id(),
                company: "Tech Solutions Inc.".to_string(),
                title: "Senior Software Engineer".to_string(),
                location: "San Francisco, CA".to_string(),
                start_date: "2020-01".to_string(),
                end_date: None,
                is_current: true,
                achievements: vec![
                    "Led migration of legacy monolith to microservices architecture, improving scalability by 40%.".to_string(),
                    "Mentored 5 junior developers and conducted code reviews to ensure code quality.".to_string(),
                    "Implemented CI/CD pipelines reducing deployment time by 60%.".to_string(),
                ],
            }]),
        },
        Section {
            id: "edu-section".to_string(),
            title: "Education".to_string(),
            is_custom: false,
            is_visible: true,
            entries: SectionEntries::Education(vec![EducationEntry {
                id: new_id(),
                institution: "University of California, Berkeley".to_string(),
                degree: "Bachelor of Science".to_string(),
                field_of_study: "Computer Science".to_string(),
                graduation_date: "2019-05".to_string(),
                gpa: Some("3.8".to_string()),
                grade_type: Some(GradeType::Cgpa),
            }]),
        },
        Section {
            id: "skills-section".to_string(),
            title: "Skills".to_string(),
            is_custom: false,
            is_visible: true,
            entries: SectionEntries::Skills(vec![SkillEntry {
                id: new_id(),
                category: "technical".to_string(),
                skills: ["React", "TypeScript", "Python", "Node.js", "AWS", "Docker"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }]),
        },
        Section {
            id: "proj-section".to_string(),
            title: "Projects".to_string(),
            is_custom: false,
            is_visible: true,
            entries: SectionEntries::Projects(Vec::new()),
        },
    ]
}

/// Builds the default document with fresh entry ids and the current time.
pub fn default_document() -> ResumeDocument {
    let sections = default_sections();
    let section_order = sections.iter().map(|s| s.id.clone()).collect();

    ResumeDocument {
        id: new_id(),
        name: "My Resume".to_string(),
        updated_at: Utc::now(),
        personal_info: PersonalInfo {
            full_name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            linked_in: Some("linkedin.com/in/alexjohnson".to_string()),
            portfolio: Some("alexj.dev".to_string()),
            summary: "Results-oriented Senior Software Engineer with 5+ years of experience in full-stack development. Proven track record of delivering scalable solutions and optimizing system performance. Skilled in modern JavaScript frameworks and cloud infrastructure.".to_string(),
        },
        sections,
        section_order,
        template_id: DEFAULT_TEMPLATE_ID.to_string(),
        color_accent: DEFAULT_ACCENT_COLOR.to_string(),
        heading_color: None,
    }
}
