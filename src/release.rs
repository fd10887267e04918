//! Selecting the base release and drafting the next one.

use tracing::{debug, info};

use crate::config::Category;
use crate::context::Inputs;
use crate::error::Result;
use crate::host::{Release, ReleaseHost, ReleaseRequest};
use crate::notes::{render_notes, RenderedNotes};
use crate::sections::{split_sections, SectionMap};
use crate::version::version_increase;

/// Tag used when no applicable release exists yet.
pub const INITIAL_RELEASE: &str = "v0.0.0";

/// Picks the latest applicable release tag for a branch.
///
/// `releases` is expected newest first, as returned by the host. The newest
/// non-draft release targeting `branch` wins; with none on that branch, the
/// newest non-draft release on any branch is used; with no releases at all,
/// the `v0.0.0` sentinel is returned.
pub fn resolve_latest_release(releases: &[Release], branch: &str) -> String {
    let on_branch = releases
        .iter()
        .find(|release| !release.draft && release.target_commitish == branch);

    if let Some(release) = on_branch {
        return release.tag_name.clone();
    }

    releases
        .iter()
        .find(|release| !release.draft)
        .map(|release| release.tag_name.clone())
        .unwrap_or_else(|| INITIAL_RELEASE.to_string())
}

/// Finds an existing draft for the given tag, if any.
///
/// An existing draft is updated in place rather than duplicated.
pub fn find_release_draft<'a>(releases: &'a [Release], tag: &str) -> Option<&'a Release> {
    releases
        .iter()
        .find(|release| release.draft && release.tag_name == tag)
}

/// Everything the workflow produced, for output and display.
#[derive(Debug, Clone)]
pub struct ReleaseSummary {
    /// The tag of the drafted release, `v`-prefixed.
    pub next_release: String,

    /// The release the version was bumped from.
    pub previous_release: String,

    /// The rendered notes, including any template warning.
    pub notes: RenderedNotes,

    /// Bullets per canonical label, for observability output.
    pub sections: SectionMap,

    /// The draft as reported back by the host.
    pub release: Release,

    /// True when an existing draft was updated instead of created.
    pub updated_existing: bool,
}

/// Drafts the next release through the host.
///
/// Sequential, no retries: list releases, resolve the latest for the target
/// branch, have the host generate a changelog body, classify it into a
/// version bump, then render the final notes and create or update the draft.
pub fn run_release_workflow(
    host: &dyn ReleaseHost,
    inputs: &Inputs,
    categories: &[Category],
) -> Result<ReleaseSummary> {
    let releases = host.list_releases()?;
    let branch = host.target_branch()?;
    let latest_release = resolve_latest_release(&releases, &branch);
    info!(latest = %latest_release, %branch, "resolved latest release");

    // The first release has nothing to compare against.
    let previous_tag = if latest_release == INITIAL_RELEASE {
        ""
    } else {
        latest_release.as_str()
    };

    // The body is generated against a placeholder tag first; the version is
    // not known until the body has been classified.
    let raw_body = host.generate_notes(previous_tag, "next", &branch)?;

    let next_release = format!(
        "v{}",
        version_increase(&latest_release, inputs, categories, &raw_body)?
    );
    debug!(next = %next_release, "computed version increase");

    let final_body = host.generate_notes(previous_tag, &next_release, &branch)?;
    let sections = split_sections(&final_body, categories);
    let notes = render_notes(
        &final_body,
        &sections,
        categories,
        inputs,
        &next_release,
        &latest_release,
    );

    let request = ReleaseRequest {
        tag_name: next_release.clone(),
        name: next_release.clone(),
        target_commitish: branch,
        body: notes.body.clone(),
        draft: true,
    };

    let (release, updated_existing) = match find_release_draft(&releases, &next_release) {
        Some(draft) => (host.update_release(draft.id, &request)?, true),
        None => (host.create_release(&request)?, false),
    };
    info!(
        tag = %release.tag_name,
        updated = updated_existing,
        "release draft ready"
    );

    Ok(ReleaseSummary {
        next_release,
        previous_release: latest_release,
        notes,
        sections,
        release,
        updated_existing,
    })
}
