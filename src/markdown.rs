//! Line-level markdown classification.
//!
//! The changelog bodies this crate handles are shallow: level-3 headings,
//! bullet lines, and everything else. The splitter and the collapser share
//! this one definition of structure so they cannot drift apart.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\s+(.+)").expect("valid heading pattern"));

/// A single classified line of a changelog body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A `### <title>` heading; carries the title text.
    Heading(&'a str),
    /// A `* ` bullet; carries the trimmed line, marker included.
    Bullet(&'a str),
    /// Whitespace only.
    Blank,
    /// Anything else (prose, links, markers left by other tools).
    Text,
}

impl<'a> Line<'a> {
    /// Classify a raw line. Leading and trailing whitespace is ignored for
    /// classification; bullet lines are reported trimmed.
    pub fn classify(raw: &'a str) -> Line<'a> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }
        if let Some(captures) = HEADING_PATTERN.captures(trimmed) {
            if let Some(title) = captures.get(1) {
                return Line::Heading(title.as_str().trim_end());
            }
        }
        if trimmed.starts_with("* ") {
            return Line::Bullet(trimmed);
        }
        Line::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_heading() {
        assert_eq!(
            Line::classify("### 🐛 Bug Fixes"),
            Line::Heading("🐛 Bug Fixes")
        );
        assert_eq!(Line::classify("  ### Indented "), Line::Heading("Indented"));
    }

    #[test]
    fn test_classify_bullet() {
        assert_eq!(Line::classify("* fix A"), Line::Bullet("* fix A"));
        assert_eq!(Line::classify("  * fix B  "), Line::Bullet("* fix B"));
    }

    #[test]
    fn test_classify_blank_and_text() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify("   \t"), Line::Blank);
        assert_eq!(Line::classify("plain prose"), Line::Text);
        assert_eq!(Line::classify("## What's Changed"), Line::Text);
        assert_eq!(Line::classify("*no space after marker"), Line::Text);
    }

    #[test]
    fn test_deeper_headings_are_text() {
        // Only level-3 headings carry section titles.
        assert_eq!(Line::classify("#### Sub-heading"), Line::Text);
    }
}
