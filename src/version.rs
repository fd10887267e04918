use std::fmt;

use semver::Version;

use crate::config::{title_for_label, Category};
use crate::context::Inputs;
use crate::error::{DraftReleaseError, Result};

/// The semantic-version tier by which a release advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bump::Major => write!(f, "major"),
            Bump::Minor => write!(f, "minor"),
            Bump::Patch => write!(f, "patch"),
        }
    }
}

/// Classifies a changelog body into a version bump.
///
/// Defaults to patch. The body is upgraded to minor when it contains
/// `### <minor_title>` and to major when it contains `### <major_title>`;
/// major always wins when both are present. An empty title disables its
/// tier entirely.
///
/// This is a permissive substring scan, not a markdown parse: the heading
/// text counts wherever it appears, bullets and code blocks included. Treat
/// it as "contains", not "has a heading equal to".
pub fn classify_notes(notes: &str, major_title: &str, minor_title: &str) -> Bump {
    let mut bump = Bump::Patch;

    if !minor_title.is_empty() && notes.contains(&format!("### {}", minor_title)) {
        bump = Bump::Minor;
    }
    if !major_title.is_empty() && notes.contains(&format!("### {}", major_title)) {
        bump = Bump::Major;
    }

    bump
}

/// Applies a bump to a base version string.
///
/// Accepts a bare `X.Y.Z` or a `v`/`V`-prefixed tag; the prefix is stripped
/// before arithmetic and never re-added here. Pre-release and build metadata
/// are cleared by any bump. Fails with a version error when the base does
/// not parse as a semantic version.
pub fn increment(base: &str, bump: Bump) -> Result<Version> {
    let clean = base.trim_start_matches(['v', 'V']);
    let current = Version::parse(clean).map_err(|e| {
        DraftReleaseError::version(format!("invalid base version '{}': {}", base, e))
    })?;

    let next = match bump {
        Bump::Major => Version::new(current.major + 1, 0, 0),
        Bump::Minor => Version::new(current.major, current.minor + 1, 0),
        Bump::Patch => Version::new(current.major, current.minor, current.patch + 1),
    };
    Ok(next)
}

/// Computes the next version for a changelog body.
///
/// Translates the caller's raw major/minor labels into section titles via
/// the category table, classifies the body, and bumps the latest release.
/// Returns the bare `X.Y.Z`; the `v` prefix convention is owned by the
/// caller.
pub fn version_increase(
    latest_release: &str,
    inputs: &Inputs,
    categories: &[Category],
    notes: &str,
) -> Result<String> {
    let major_title = title_for_label(categories, &inputs.major_label).unwrap_or("");
    let minor_title = title_for_label(categories, &inputs.minor_label).unwrap_or("");

    let bump = classify_notes(notes, major_title, minor_title);
    let next = increment(latest_release, bump)?;
    Ok(next.to_string())
}
