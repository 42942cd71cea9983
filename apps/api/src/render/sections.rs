//! Per-kind projection of section entries into blocks.

use crate::models::{
    CustomEntry, CustomField, CustomFieldContent, CustomFieldKind, EducationEntry,
    ExperienceEntry, GradeType, ProjectEntry, SectionEntries, SkillEntry,
};
use crate::render::highlight::highlight;
use crate::render::style::ResolvedStyle;
use crate::render::visual::{Block, Inline, VisualEntry};

const PRESENT: &str = "Present";
const RANGE_SEPARATOR: &str = " – ";

/// Formats "start – end", omitting whichever side is blank.
pub fn date_range(start: &str, end: Option<&str>) -> String {
    let start = start.trim();
    let end = end.map(str::trim).filter(|e| !e.is_empty());
    match (start.is_empty(), end) {
        (false, Some(end)) => format!("{start}{RANGE_SEPARATOR}{end}"),
        (true, Some(end)) => end.to_string(),
        (_, None) => start.to_string(),
    }
}

fn aside(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Prefixes `https://` unless the value already names a scheme.
pub fn external_href(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn bullets(items: &[String], style: &ResolvedStyle) -> Block {
    Block::Bullets {
        marker_color: style.accent_color.clone(),
        items: items.iter().map(|item| highlight(item)).collect(),
    }
}

fn experience(entry: &ExperienceEntry, style: &ResolvedStyle) -> Vec<Block> {
    let end = if entry.is_current {
        Some(PRESENT)
    } else {
        entry.end_date.as_deref()
    };
    vec![
        Block::Heading {
            content: vec![Inline::text(&entry.title)],
            aside: aside(&date_range(&entry.start_date, end)),
        },
        Block::Subheading {
            text: entry.company.clone(),
            aside: aside(&entry.location),
        },
        bullets(&entry.achievements, style),
    ]
}

fn education(entry: &EducationEntry) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            content: vec![Inline::text(&entry.institution)],
            aside: aside(&entry.graduation_date),
        },
        Block::Paragraph {
            content: vec![Inline::text(format!(
                "{} in {}",
                entry.degree, entry.field_of_study
            ))],
            muted: false,
        },
    ];
    if let Some(gpa) = entry.gpa.as_deref().filter(|g| !g.trim().is_empty()) {
        let grade_type = entry.grade_type.unwrap_or(GradeType::Cgpa);
        let suffix = if grade_type == GradeType::Percentage { "%" } else { "" };
        blocks.push(Block::Labeled {
            label: grade_type.label().to_string(),
            content: vec![Inline::text(format!("{gpa}{suffix}"))],
        });
    }
    blocks
}

/// Capitalizes each word of a category label ("technical" -> "Technical").
fn category_label(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn skills(entry: &SkillEntry) -> Vec<Block> {
    vec![Block::Labeled {
        label: category_label(&entry.category),
        content: vec![Inline::text(entry.skills.join(", "))],
    }]
}

fn project(entry: &ProjectEntry, style: &ResolvedStyle) -> Vec<Block> {
    let mut title = vec![Inline::text(&entry.name)];
    if let Some(url) = entry.url.as_deref().filter(|u| !u.trim().is_empty()) {
        title.push(Inline::Link {
            text: url.to_string(),
            href: external_href(url),
            color: style.accent_color.clone(),
        });
    }
    vec![
        Block::Heading {
            content: title,
            aside: aside(&date_range(&entry.start_date, entry.end_date.as_deref())),
        },
        Block::Paragraph {
            content: highlight(&entry.description),
            muted: false,
        },
        Block::Labeled {
            label: "Technologies".to_string(),
            content: vec![Inline::text(entry.technologies.join(", "))],
        },
    ]
}

fn custom_field(field: &CustomField, style: &ResolvedStyle) -> Block {
    match &field.content {
        CustomFieldContent::Bullets(items) => bullets(items, style),
        CustomFieldContent::Url(url) => Block::Paragraph {
            content: vec![Inline::Link {
                text: url.clone(),
                href: url.clone(),
                color: style.accent_color.clone(),
            }],
            muted: false,
        },
        CustomFieldContent::Text(text) => Block::Paragraph {
            content: highlight(text),
            muted: false,
        },
        CustomFieldContent::Date(date) => Block::Paragraph {
            content: highlight(date),
            muted: true,
        },
    }
}

fn string_value(field: &CustomField) -> &str {
    match &field.content {
        CustomFieldContent::Text(v) | CustomFieldContent::Date(v) | CustomFieldContent::Url(v) => v,
        CustomFieldContent::Bullets(_) => "",
    }
}

/// The first text field is the title and the first date field the date;
/// every other field follows in storage order.
fn custom(entry: &CustomEntry, style: &ResolvedStyle) -> Vec<Block> {
    let title_idx = entry.fields.iter().position(|f| f.kind() == CustomFieldKind::Text);
    let date_idx = entry.fields.iter().position(|f| f.kind() == CustomFieldKind::Date);

    let mut blocks = Vec::new();
    if title_idx.is_some() || date_idx.is_some() {
        blocks.push(Block::Heading {
            content: title_idx
                .map(|i| vec![Inline::text(string_value(&entry.fields[i]))])
                .unwrap_or_default(),
            aside: date_idx.map(|i| string_value(&entry.fields[i]).to_string()),
        });
    }
    blocks.extend(
        entry
            .fields
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != title_idx && Some(*i) != date_idx)
            .map(|(_, field)| custom_field(field, style)),
    );
    blocks
}

/// Projects every entry of a section in storage order.
pub fn render_entries(entries: &SectionEntries, style: &ResolvedStyle) -> Vec<VisualEntry> {
    fn each<T>(
        list: &[T],
        id_of: impl Fn(&T) -> &str,
        blocks_of: impl Fn(&T) -> Vec<Block>,
    ) -> Vec<VisualEntry> {
        list.iter()
            .map(|entry| VisualEntry {
                entry_id: id_of(entry).to_string(),
                blocks: blocks_of(entry),
            })
            .collect()
    }

    match entries {
        SectionEntries::Experience(list) => {
            each(list, |e| e.id.as_str(), |e| experience(e, style))
        }
        SectionEntries::Education(list) => each(list, |e| e.id.as_str(), education),
        SectionEntries::Skills(list) => each(list, |e| e.id.as_str(), skills),
        SectionEntries::Projects(list) => each(list, |e| e.id.as_str(), |e| project(e, style)),
        SectionEntries::Custom(list) => each(list, |e| e.id.as_str(), |e| custom(e, style)),
    }
}
