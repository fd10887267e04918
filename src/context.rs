use std::collections::HashMap;

/// Caller-supplied inputs for drafting a release.
///
/// Mirrors the CLI flags but in a format suitable for the library, so the
/// pipeline can be driven programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inputs {
    /// Label whose section title marks a major release. Empty disables the
    /// major tier entirely.
    pub major_label: String,

    /// Label whose section title marks a minor release. Empty disables the
    /// minor tier entirely.
    pub minor_label: String,

    /// Header template prepended to the notes body. Empty means no header.
    pub header: String,

    /// Footer template appended to the notes body. Empty means no footer.
    pub footer: String,

    /// Extra template variables as raw `key=value` pairs.
    pub variables: Vec<String>,

    /// Collapse sections with more than this many bullets. 0 disables
    /// collapsing.
    pub collapse_after: usize,
}

impl Inputs {
    /// Parses the raw `key=value` variable list into a map.
    ///
    /// An entry without a `=` yields an empty value for that key, matching
    /// the permissive input handling of the rest of the pipeline.
    pub fn variable_map(&self) -> HashMap<String, String> {
        self.variables
            .iter()
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect()
    }
}
