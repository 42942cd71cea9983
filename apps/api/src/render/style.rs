use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::render::fonts::FontFamily;

/// Caller-supplied style options. Every option is optional; unset options
/// come from the document or from defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Bullet and link emphasis.
    pub accent_color: Option<String>,
    /// Section titles and the top rule.
    pub heading_color: Option<String>,
    pub font_family: Option<String>,
    /// Uniform zoom. Must be positive and finite to take effect.
    pub scale: Option<f32>,
}

/// Style options after fallbacks have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub accent_color: String,
    pub heading_color: String,
    pub font_family: FontFamily,
    pub font_stack: &'static str,
    pub scale: f32,
}

pub const DEFAULT_SCALE: f32 = 1.0;

pub fn is_valid_scale(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl StyleConfig {
    pub fn resolve(&self, doc: &ResumeDocument) -> ResolvedStyle {
        let accent_color = non_blank(self.accent_color.as_ref())
            .unwrap_or(doc.color_accent.as_str())
            .to_string();
        let heading_color = non_blank(self.heading_color.as_ref())
            .or_else(|| non_blank(doc.heading_color.as_ref()))
            .unwrap_or(accent_color.as_str())
            .to_string();
        let font_family = self
            .font_family
            .as_deref()
            .map(FontFamily::from_name)
            .unwrap_or_default();
        let scale = self
            .scale
            .filter(|s| is_valid_scale(*s))
            .unwrap_or(DEFAULT_SCALE);

        ResolvedStyle {
            accent_color,
            heading_color,
            font_family,
            font_stack: font_family.css_stack(),
            scale,
        }
    }
}
