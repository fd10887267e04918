//! Splitting a changelog body into labeled sections and collapsing long ones.

use std::collections::HashMap;

use crate::config::Category;
use crate::markdown::Line;

/// Bullet lines per canonical category label.
///
/// Holds one entry for every configured category that has a canonical label,
/// including categories with no matched bullets (empty vec). Presentation
/// order is recovered from the category table via [ordered_sections].
pub type SectionMap = HashMap<String, Vec<String>>;

/// Splits a markdown changelog body into per-category bullet lists.
///
/// Scans line by line keeping a current-label cursor. A recognized `###`
/// heading (exact title match against a category) selects that category's
/// canonical label; an unrecognized heading drops subsequent bullets until
/// the next recognized one. Bullets are stored trimmed, marker included.
/// Blank lines are ignored; any other non-bullet line resets the cursor so
/// trailing prose is never attributed to a later section.
///
/// Pure function of its inputs; malformed markdown degrades to skipped
/// lines, never to an error.
pub fn split_sections(markdown: &str, categories: &[Category]) -> SectionMap {
    let mut sections: SectionMap = categories
        .iter()
        .filter_map(Category::canonical_label)
        .map(|label| (label.to_string(), Vec::new()))
        .collect();

    let mut current_label: Option<&str> = None;

    for raw_line in markdown.lines() {
        match Line::classify(raw_line) {
            Line::Heading(title) => {
                current_label = categories
                    .iter()
                    .find(|category| category.title == title)
                    .and_then(Category::canonical_label);
            }
            Line::Bullet(bullet) => {
                if let Some(label) = current_label {
                    if let Some(bullets) = sections.get_mut(label) {
                        bullets.push(bullet.to_string());
                    }
                }
            }
            Line::Blank => {}
            Line::Text => {
                // Prose under a heading ends the section.
                current_label = None;
            }
        }
    }

    sections
}

/// Wraps any section with more than `threshold` bullets in a disclosure
/// block. A threshold of 0 disables collapsing and returns the input
/// unchanged.
///
/// The rewrite is a single pass over lines: after a recognized heading whose
/// bullet count exceeds the threshold, a `<details><summary>{N} changes
/// </summary>` marker and a blank line are inserted, and `</details>` is
/// emitted right after the N-th bullet. A heading that matches no category
/// closes an open block without starting a new one, and a block still open
/// at end of input is closed there.
pub fn collapse_sections(
    markdown: &str,
    sections: &SectionMap,
    categories: &[Category],
    threshold: usize,
) -> String {
    if threshold == 0 {
        return markdown.to_string();
    }

    let needs_collapse = categories.iter().any(|category| {
        category
            .canonical_label()
            .and_then(|label| sections.get(label))
            .map(|bullets| bullets.len() > threshold)
            .unwrap_or(false)
    });
    if !needs_collapse {
        return markdown.to_string();
    }

    let mut output: Vec<String> = Vec::new();
    // Bullets left to emit before the open disclosure block closes.
    let mut remaining: Option<usize> = None;

    // split keeps a trailing empty segment, so a body ending in a newline
    // still ends in one after the rebuild.
    for raw_line in markdown.split('\n') {
        match Line::classify(raw_line) {
            Line::Heading(title) => {
                if remaining.take().is_some() {
                    output.push("</details>".to_string());
                }
                output.push(raw_line.to_string());

                let count = categories
                    .iter()
                    .find(|category| category.title == title)
                    .and_then(Category::canonical_label)
                    .and_then(|label| sections.get(label))
                    .map(Vec::len);

                if let Some(count) = count {
                    if count > threshold {
                        output.push(format!("<details><summary>{} changes</summary>", count));
                        output.push(String::new());
                        remaining = Some(count);
                    }
                }
            }
            Line::Bullet(_) if remaining.is_some() => {
                output.push(raw_line.to_string());
                remaining = remaining.and_then(|left| left.checked_sub(1));
                if remaining == Some(0) {
                    output.push("</details>".to_string());
                    remaining = None;
                }
            }
            _ => output.push(raw_line.to_string()),
        }
    }

    // Close at EOF if the last section ran out of lines first.
    if remaining.is_some() {
        output.push("</details>".to_string());
    }

    output.join("\n")
}

/// Section entries in the iteration order of the category table, for stable
/// serialized output.
pub fn ordered_sections<'a>(
    sections: &'a SectionMap,
    categories: &'a [Category],
) -> Vec<(&'a str, &'a [String])> {
    categories
        .iter()
        .filter_map(Category::canonical_label)
        .filter_map(|label| {
            sections
                .get(label)
                .map(|bullets| (label, bullets.as_slice()))
        })
        .collect()
}
