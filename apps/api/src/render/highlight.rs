//! `**highlight**` markers in free text.
//!
//! A marker pair wraps a non-empty run that contains no asterisk. Anything
//! else, including unpaired markers, stays literal. There is no nesting and
//! no escaping.

use crate::render::visual::{Inline, RichText};

const MARKER: &str = "**";

/// Splits `text` into plain and strong runs.
pub fn highlight(text: &str) -> RichText {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(start) = rest.find(MARKER) {
        let after_open = &rest[start + MARKER.len()..];
        let inner_len = after_open.find('*').unwrap_or(after_open.len());
        let closes = inner_len > 0 && after_open[inner_len..].starts_with(MARKER);

        if closes {
            plain.push_str(&rest[..start]);
            if !plain.is_empty() {
                runs.push(Inline::text(std::mem::take(&mut plain)));
            }
            runs.push(Inline::Strong {
                text: after_open[..inner_len].to_string(),
            });
            rest = &after_open[inner_len + MARKER.len()..];
        } else {
            // Not a pair here; keep one asterisk and try again after it.
            plain.push_str(&rest[..start + 1]);
            rest = &rest[start + 1..];
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        runs.push(Inline::text(plain));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::visual::plain_text;

    fn strong(runs: &[Inline]) -> Vec<&str> {
        runs.iter()
            .filter_map(|r| match r {
                Inline::Strong { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_two_highlights() {
        let runs = highlight("Improved **throughput** by **40%**");
        assert_eq!(strong(&runs), vec!["throughput", "40%"]);
        assert_eq!(plain_text(&runs), "Improved throughput by 40%");
        assert_eq!(
            runs,
            vec![
                Inline::text("Improved "),
                Inline::Strong {
                    text: "throughput".to_string()
                },
                Inline::text(" by "),
                Inline::Strong {
                    text: "40%".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(highlight("no markers"), vec![Inline::text("no markers")]);
        assert!(highlight("").is_empty());
    }

    #[test]
    fn test_unpaired_marker_is_literal() {
        let runs = highlight("Grew **revenue by 10%");
        assert!(strong(&runs).is_empty());
        assert_eq!(plain_text(&runs), "Grew **revenue by 10%");
    }

    #[test]
    fn test_empty_pair_is_literal() {
        let runs = highlight("a **** b");
        assert!(strong(&runs).is_empty());
        assert_eq!(plain_text(&runs), "a **** b");
    }

    #[test]
    fn test_inner_asterisk_breaks_pair() {
        let runs = highlight("**a*b**");
        assert!(strong(&runs).is_empty());
        assert_eq!(plain_text(&runs), "**a*b**");
    }

    #[test]
    fn test_extra_leading_asterisk_stays_literal() {
        let runs = highlight("x ***bold** y");
        assert_eq!(strong(&runs), vec!["bold"]);
        assert_eq!(plain_text(&runs), "x *bold y");
    }

    #[test]
    fn test_non_ascii_text() {
        let runs = highlight("Réduit **coûts** de 20 €");
        assert_eq!(strong(&runs), vec!["coûts"]);
        assert_eq!(plain_text(&runs), "Réduit coûts de 20 €");
    }
}
