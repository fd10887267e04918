//! Rendering the final notes body: collapse, then templated header/footer.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error};

use crate::config::Category;
use crate::context::Inputs;
use crate::error::{DraftReleaseError, Result};
use crate::sections::{collapse_sections, SectionMap};

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").expect("valid placeholder pattern"));

/// The rendered notes plus everything a caller may want to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNotes {
    /// The final body: collapsed sections with header/footer applied as far
    /// as rendering got.
    pub body: String,

    /// The rendered header, when one was configured and rendered cleanly.
    pub header: Option<String>,

    /// The rendered footer, when one was configured and rendered cleanly.
    pub footer: Option<String>,

    /// Set when a template failed to render. The body then contains the
    /// best-effort result of the steps completed before the failure.
    pub warning: Option<String>,
}

/// Expands `{{key}}` placeholders in a template.
///
/// Unknown keys render as empty strings. An opening `{{` without a matching
/// close is a template error.
pub fn expand_template(template: &str, variables: &HashMap<String, String>) -> Result<String> {
    // Validate before substituting so a variable value containing braces
    // cannot be mistaken for a template problem.
    let residual = PLACEHOLDER_PATTERN.replace_all(template, "");
    if residual.contains("{{") {
        return Err(DraftReleaseError::template(format!(
            "unclosed placeholder in template: {}",
            template
        )));
    }

    let expanded = PLACEHOLDER_PATTERN
        .replace_all(template, |captures: &regex::Captures| {
            variables
                .get(&captures[1])
                .cloned()
                .unwrap_or_default()
        })
        .into_owned();
    Ok(expanded)
}

/// Renders the final notes body.
///
/// Processing order is fixed: collapse sections, render and prepend the
/// header, render and append the footer. The template variable set is
/// `version`, `version-number`, `previous-version`,
/// `previous-version-number`, plus the caller's extra variables.
///
/// A template failure never fails the pipeline: the error is logged, the
/// body computed so far is returned, and the failure is surfaced through
/// [RenderedNotes::warning] so callers can choose to report it. A bad header
/// template must not block a release.
pub fn render_notes(
    raw_body: &str,
    sections: &SectionMap,
    categories: &[Category],
    inputs: &Inputs,
    next_release: &str,
    previous_release: &str,
) -> RenderedNotes {
    let mut variables = inputs.variable_map();
    variables.insert("version".to_string(), next_release.to_string());
    variables.insert(
        "version-number".to_string(),
        next_release.trim_start_matches(['v', 'V']).to_string(),
    );
    variables.insert(
        "previous-version".to_string(),
        previous_release.to_string(),
    );
    variables.insert(
        "previous-version-number".to_string(),
        previous_release.trim_start_matches(['v', 'V']).to_string(),
    );

    let mut notes = RenderedNotes {
        body: collapse_sections(raw_body, sections, categories, inputs.collapse_after),
        header: None,
        footer: None,
        warning: None,
    };

    if !inputs.header.is_empty() {
        match expand_template(&inputs.header, &variables) {
            Ok(header) => {
                notes.body = format!("{}\n\n{}", header, notes.body);
                notes.header = Some(header);
            }
            Err(e) => {
                error!("failed to render notes header: {}", e);
                notes.warning = Some(e.to_string());
                return notes;
            }
        }
    }

    if !inputs.footer.is_empty() {
        match expand_template(&inputs.footer, &variables) {
            Ok(footer) => {
                notes.body = format!("{}\n\n{}", notes.body, footer);
                notes.footer = Some(footer);
            }
            Err(e) => {
                error!("failed to render notes footer: {}", e);
                notes.warning = Some(e.to_string());
                return notes;
            }
        }
    }

    debug!(
        body_len = notes.body.len(),
        has_header = notes.header.is_some(),
        has_footer = notes.footer.is_some(),
        "notes rendered"
    );

    notes
}
