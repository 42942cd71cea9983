//! Font families offered to the preview.
//!
//! Each family maps to a CSS font stack for the presentation layer. Unknown
//! names resolve to the default family rather than failing.

use serde::{Deserialize, Serialize};

/// The supported resume font families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Clean humanist sans-serif.
    #[default]
    Inter,
    /// Classic old-style serif.
    EbGaramond,
    /// Geometric humanist sans-serif.
    Lato,
    /// Condensed display sans-serif.
    Oswald,
    /// Traditional TeX font, the most ATS-neutral choice.
    ComputerModern,
}

pub const ALL_FAMILIES: [FontFamily; 5] = [
    FontFamily::Inter,
    FontFamily::EbGaramond,
    FontFamily::Lato,
    FontFamily::Oswald,
    FontFamily::ComputerModern,
];

impl FontFamily {
    /// Display name, also accepted by [`FontFamily::from_name`].
    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::EbGaramond => "EB Garamond",
            FontFamily::Lato => "Lato",
            FontFamily::Oswald => "Oswald",
            FontFamily::ComputerModern => "Computer Modern",
        }
    }

    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::EbGaramond => "'EB Garamond', Garamond, 'Times New Roman', serif",
            FontFamily::Lato => "'Lato', 'Segoe UI', Arial, sans-serif",
            FontFamily::Oswald => "'Oswald', 'Arial Narrow', sans-serif",
            FontFamily::ComputerModern => "'CMU Serif', 'Latin Modern Roman', serif",
        }
    }

    /// Resolves a family by name, ignoring case, spaces, dashes and
    /// underscores. Falls back to the default family.
    pub fn from_name(name: &str) -> Self {
        let wanted = normalize(name);
        ALL_FAMILIES
            .into_iter()
            .find(|family| normalize(family.display_name()) == wanted)
            .unwrap_or_default()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_common_spellings() {
        assert_eq!(FontFamily::from_name("EB Garamond"), FontFamily::EbGaramond);
        assert_eq!(FontFamily::from_name("eb_garamond"), FontFamily::EbGaramond);
        assert_eq!(FontFamily::from_name("computer-modern"), FontFamily::ComputerModern);
        assert_eq!(FontFamily::from_name("LATO"), FontFamily::Lato);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(FontFamily::from_name("Comic Sans"), FontFamily::Inter);
        assert_eq!(FontFamily::from_name(""), FontFamily::default());
    }

    #[test]
    fn test_every_family_has_a_stack() {
        for family in ALL_FAMILIES {
            assert!(family.css_stack().ends_with("serif"));
        }
    }
}
