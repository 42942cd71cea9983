//! The renderer's output: a presentation-neutral description of the page.
//!
//! Consumed by the on-screen preview and by the page export, which lay it
//! out on a single A4-like page.

use serde::Serialize;

use crate::models::{EntryId, SectionId, SectionKind};
use crate::render::style::ResolvedStyle;

/// A run of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    /// Emphasized (bold) text.
    Strong { text: String },
    Link {
        text: String,
        href: String,
        color: String,
    },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }
}

pub type RichText = Vec<Inline>;

/// Concatenates the visible characters of `content`.
#[cfg(test)]
pub fn plain_text(content: &[Inline]) -> String {
    content
        .iter()
        .map(|run| match run {
            Inline::Text { text } | Inline::Strong { text } | Inline::Link { text, .. } => {
                text.as_str()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Bold title line with optional right-aligned text, usually a date range.
    Heading {
        content: RichText,
        aside: Option<String>,
    },
    /// Secondary line: semibold left text, italic right text.
    Subheading { text: String, aside: Option<String> },
    /// Body text. `muted` renders in a lighter italic style.
    Paragraph { content: RichText, muted: bool },
    /// "Label: content" line.
    Labeled { label: String, content: RichText },
    Bullets {
        marker_color: String,
        items: Vec<RichText>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualEntry {
    pub entry_id: EntryId,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualSection {
    pub section_id: SectionId,
    pub kind: SectionKind,
    pub title: String,
    pub title_color: String,
    pub entries: Vec<VisualEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub label: String,
    pub content: Inline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualHeader {
    pub full_name: String,
    pub rule_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDocument {
    pub style: ResolvedStyle,
    pub header: VisualHeader,
    pub contact: Vec<ContactItem>,
    pub summary: Option<RichText>,
    pub sections: Vec<VisualSection>,
}
