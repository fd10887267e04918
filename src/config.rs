use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DraftReleaseError, Result};

/// A changelog category: a section title and the issue labels that feed it.
///
/// The first label in `labels` is the canonical label, used as the section's
/// lookup key everywhere else in the crate. A category conventionally labeled
/// `"*"` acts as the catch-all bucket.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub title: String,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl Category {
    /// The label this category is keyed on, or `None` for a category with an
    /// empty label list (which never matches anything).
    pub fn canonical_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// Shape of the release configuration document:
///
/// ```yaml
/// changelog:
///   exclude:
///     labels:
///       - skip-changelog
///   categories:
///     - title: 🚀 Features
///       labels:
///         - enhancement
///     - title: 🐛 Bug Fixes
///       labels:
///         - bug
/// ```
#[derive(Debug, Deserialize)]
struct ReleaseYaml {
    changelog: ChangelogYaml,
}

#[derive(Debug, Deserialize)]
struct ChangelogYaml {
    categories: Vec<Category>,

    // Consumed by the host's notes generator, not by us. Parsed so that a
    // document carrying it is still accepted.
    #[serde(default)]
    #[allow(dead_code)]
    exclude: Option<ExcludeYaml>,
}

#[derive(Debug, Deserialize)]
struct ExcludeYaml {
    #[serde(default)]
    #[allow(dead_code)]
    labels: Vec<String>,
}

/// Loads the category table from a release configuration file.
///
/// Fails with a configuration error if the file cannot be read or the
/// document lacks the `changelog.categories` field. No validation beyond the
/// document shape is performed.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let content = fs::read_to_string(path).map_err(|e| {
        DraftReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_categories(&content)
}

/// Parses the category table from a YAML document string.
pub fn parse_categories(content: &str) -> Result<Vec<Category>> {
    let doc: ReleaseYaml = serde_yaml::from_str(content)
        .map_err(|e| DraftReleaseError::config(format!("malformed release config: {}", e)))?;
    Ok(doc.changelog.categories)
}

/// Returns the section title for a raw label name.
///
/// Scans categories in configured order and returns the first whose label
/// list contains `label`; when the same label appears in several categories
/// the first one wins. The empty label matches nothing.
pub fn title_for_label<'a>(categories: &'a [Category], label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    categories
        .iter()
        .find(|category| category.labels.iter().any(|l| l == label))
        .map(|category| category.title.as_str())
}
