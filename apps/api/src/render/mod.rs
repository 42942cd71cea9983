// Renderer: a pure projection from a ResumeDocument plus style options to a VisualDocument.
// Never mutates the document; the same inputs always give the same output.

pub mod fonts;
pub mod highlight;
pub mod sections;
pub mod style;
pub mod visual;

pub use style::StyleConfig;
pub use visual::VisualDocument;

use crate::models::{PersonalInfo, ResumeDocument};
use crate::render::highlight::highlight;
use crate::render::sections::{external_href, render_entries};
use crate::render::style::ResolvedStyle;
use crate::render::visual::{ContactItem, Inline, VisualHeader, VisualSection};

fn contact_items(info: &PersonalInfo, style: &ResolvedStyle) -> Vec<ContactItem> {
    let link = |text: &str, href: String| Inline::Link {
        text: text.to_string(),
        href,
        color: style.accent_color.clone(),
    };

    let mut items = Vec::new();
    if !info.email.is_empty() {
        items.push(ContactItem {
            label: "Email".to_string(),
            content: link(&info.email, format!("mailto:{}", info.email)),
        });
    }
    if !info.phone.is_empty() {
        items.push(ContactItem {
            label: "Phone".to_string(),
            content: Inline::text(&info.phone),
        });
    }
    if !info.location.is_empty() {
        items.push(ContactItem {
            label: "Location".to_string(),
            content: Inline::text(&info.location),
        });
    }
    for (label, value) in [("LinkedIn", &info.linked_in), ("Portfolio", &info.portfolio)] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            items.push(ContactItem {
                label: label.to_string(),
                content: link(value, external_href(value)),
            });
        }
    }
    items
}

/// Projects `doc` into a visual document.
///
/// Sections follow `section_order`. Hidden sections, and order ids that do
/// not resolve to a section, produce nothing.
pub fn render(doc: &ResumeDocument, config: &StyleConfig) -> VisualDocument {
    let style = config.resolve(doc);
    let info = &doc.personal_info;

    let sections = doc
        .ordered_sections()
        .filter(|section| section.is_visible)
        .map(|section| VisualSection {
            section_id: section.id.clone(),
            kind: section.kind(),
            title: section.title.clone(),
            title_color: style.heading_color.clone(),
            entries: render_entries(&section.entries, &style),
        })
        .collect();

    VisualDocument {
        header: VisualHeader {
            full_name: info.full_name.clone(),
            rule_color: style.heading_color.clone(),
        },
        contact: contact_items(info, &style),
        summary: (!info.summary.is_empty()).then(|| highlight(&info.summary)),
        sections,
        style,
    }
}

/// File name for the exported page: the full name with whitespace runs
/// replaced by underscores, followed by `_Resume.pdf`.
pub fn export_file_name(doc: &ResumeDocument) -> String {
    let name = doc
        .personal_info
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if name.is_empty() {
        "Resume_Resume.pdf".to_string()
    } else {
        format!("{name}_Resume.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fields::EntryFieldEdit;
    use crate::content::ops;
    use crate::models::defaults::default_document;
    use crate::models::SectionEntries;
    use crate::render::visual::{plain_text, Block};

    #[test]
    fn test_render_is_idempotent() {
        let doc = default_document();
        let config = StyleConfig {
            accent_color: Some("#9333ea".to_string()),
            font_family: Some("lato".to_string()),
            scale: Some(0.8),
            ..Default::default()
        };
        assert_eq!(render(&doc, &config), render(&doc, &config));
    }

    #[test]
    fn test_render_does_not_mutate_document() {
        let doc = default_document();
        let snapshot = doc.clone();
        let _ = render(&doc, &StyleConfig::default());
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_sections_follow_order() {
        let doc = default_document();
        let doc = ops::move_section(&doc, 3, ops::Direction::Up);
        let visual = render(&doc, &StyleConfig::default());
        let ids: Vec<&str> = visual.sections.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["exp-section", "edu-section", "proj-section", "skills-section"]
        );
    }

    #[test]
    fn test_hidden_section_contributes_nothing() {
        let doc = default_document();
        let hidden = ops::toggle_section_visibility(&doc, "exp-section");
        let visual = render(&hidden, &StyleConfig::default());
        assert_eq!(visual.sections.len(), doc.sections.len() - 1);
        assert!(visual.sections.iter().all(|s| s.section_id != "exp-section"));
        let serialized = serde_json::to_string(&visual).unwrap();
        assert!(!serialized.contains("Tech Solutions Inc."));
        assert!(!serialized.contains("Professional Experience"));
    }

    #[test]
    fn test_heading_color_applies_to_titles_and_rule() {
        let doc = default_document();
        let visual = render(
            &doc,
            &StyleConfig {
                accent_color: Some("#16a34a".to_string()),
                heading_color: Some("#000000".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(visual.header.rule_color, "#000000");
        assert!(visual.sections.iter().all(|s| s.title_color == "#000000"));
        assert_eq!(visual.style.accent_color, "#16a34a");
    }

    #[test]
    fn test_current_position_ignores_stored_end_date() {
        let mut doc = default_document();
        if let Some(section) = doc.section_mut("exp-section") {
            if let SectionEntries::Experience(list) = &mut section.entries {
                list[0].is_current = true;
                list[0].end_date = Some("2022-08".to_string());
            }
        }
        let visual = render(&doc, &StyleConfig::default());
        match &visual.sections[0].entries[0].blocks[0] {
            Block::Heading { aside, .. } => {
                assert_eq!(aside.as_deref(), Some("2020-01 – Present"));
            }
            other => panic!("unexpected {other:?}"),
        }
        let serialized = serde_json::to_string(&visual).unwrap();
        assert!(!serialized.contains("2022-08"));
    }

    #[test]
    fn test_summary_highlight_and_contact_links() {
        let doc = ops::update_personal_info(
            &default_document(),
            crate::content::fields::PersonalField::Summary,
            "Improved **throughput** by **40%**",
        );
        let visual = render(&doc, &StyleConfig::default());
        let summary = visual.summary.unwrap();
        let strong: Vec<&str> = summary
            .iter()
            .filter_map(|r| match r {
                Inline::Strong { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(strong, vec!["throughput", "40%"]);
        assert!(!plain_text(&summary).contains("**"));

        let labels: Vec<&str> = visual.contact.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Email", "Phone", "Location", "LinkedIn", "Portfolio"]
        );
        assert_eq!(
            visual.contact[3].content,
            Inline::Link {
                text: "linkedin.com/in/alexjohnson".to_string(),
                href: "https://linkedin.com/in/alexjohnson".to_string(),
                color: "#2563eb".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_summary_and_contacts_omitted() {
        let mut doc = default_document();
        doc.personal_info.summary.clear();
        doc.personal_info.phone.clear();
        doc.personal_info.linked_in = None;
        let visual = render(&doc, &StyleConfig::default());
        assert!(visual.summary.is_none());
        assert!(visual.contact.iter().all(|c| c.label != "Phone" && c.label != "LinkedIn"));
    }

    #[test]
    fn test_edit_is_reflected_on_next_render() {
        let doc = default_document();
        let entry_id = doc.section("skills-section").unwrap().entries.entry_ids()[0].to_string();
        let doc = ops::update_entry_field(
            &doc,
            "skills-section",
            &entry_id,
            &EntryFieldEdit::Skills("Go, Rust , Zig".to_string()),
        );
        let visual = render(&doc, &StyleConfig::default());
        let skills = visual
            .sections
            .iter()
            .find(|s| s.section_id == "skills-section")
            .unwrap();
        assert_eq!(
            skills.entries[0].blocks[0],
            Block::Labeled {
                label: "Technical".to_string(),
                content: vec![Inline::text("Go, Rust, Zig")],
            }
        );
    }

    #[test]
    fn test_export_file_name() {
        let mut doc = default_document();
        assert_eq!(export_file_name(&doc), "Alex_Johnson_Resume.pdf");
        doc.personal_info.full_name = "  Mary  Ann Lee ".to_string();
        assert_eq!(export_file_name(&doc), "Mary_Ann_Lee_Resume.pdf");
        doc.personal_info.full_name = " ".to_string();
        assert_eq!(export_file_name(&doc), "Resume_Resume.pdf");
    }
}
