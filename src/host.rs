//! Release host abstraction layer.
//!
//! All network interaction lives behind the [ReleaseHost] trait: listing
//! existing releases, asking the host to generate a changelog body, and
//! creating or updating a release draft. The core pipeline itself never
//! calls out; auth, pagination, retries and timeouts are implementor
//! concerns.
//!
//! [mock::MockHost] is the in-memory implementation used by the workflow
//! tests.

pub mod mock;

pub use mock::MockHost;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An existing release as reported by the host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub target_commitish: String,
    pub draft: bool,
}

/// Parameters for creating or updating a release draft.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub target_commitish: String,
    pub body: String,
    pub draft: bool,
}

/// Operations the release workflow needs from its host.
///
/// Implementations must be `Send + Sync`. Methods map host failures to
/// [crate::error::DraftReleaseError::Host]; the core never retries them.
pub trait ReleaseHost: Send + Sync {
    /// All releases known to the host, newest first.
    fn list_releases(&self) -> Result<Vec<Release>>;

    /// The branch the next release targets.
    fn target_branch(&self) -> Result<String>;

    /// Ask the host to generate a changelog body between two tags.
    ///
    /// `previous_tag` may be empty for a first release; `next_tag` may be a
    /// placeholder when the final version is not yet known.
    fn generate_notes(&self, previous_tag: &str, next_tag: &str, branch: &str) -> Result<String>;

    /// Create a new release draft.
    fn create_release(&self, request: &ReleaseRequest) -> Result<Release>;

    /// Update an existing release identified by `id`.
    fn update_release(&self, id: u64, request: &ReleaseRequest) -> Result<Release>;
}
