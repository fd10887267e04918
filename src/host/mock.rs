use std::sync::Mutex;

use crate::error::Result;
use crate::host::{Release, ReleaseHost, ReleaseRequest};

/// Mock release host for testing without network access.
///
/// Create/update calls are recorded so tests can assert which path the
/// workflow took.
pub struct MockHost {
    releases: Vec<Release>,
    branch: String,
    notes_body: String,
    created: Mutex<Vec<ReleaseRequest>>,
    updated: Mutex<Vec<(u64, ReleaseRequest)>>,
}

impl MockHost {
    /// Create a mock host for `branch` that returns `notes_body` from the
    /// notes generator.
    pub fn new(branch: impl Into<String>, notes_body: impl Into<String>) -> Self {
        MockHost {
            releases: Vec::new(),
            branch: branch.into(),
            notes_body: notes_body.into(),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    /// Add an existing release. Callers are responsible for adding releases
    /// newest first, matching the host contract.
    pub fn add_release(
        &mut self,
        id: u64,
        tag_name: impl Into<String>,
        target_commitish: impl Into<String>,
        draft: bool,
    ) {
        self.releases.push(Release {
            id,
            tag_name: tag_name.into(),
            target_commitish: target_commitish.into(),
            draft,
        });
    }

    /// Requests passed to [ReleaseHost::create_release] so far.
    pub fn created_requests(&self) -> Vec<ReleaseRequest> {
        self.created.lock().expect("mock lock").clone()
    }

    /// Requests passed to [ReleaseHost::update_release] so far.
    pub fn updated_requests(&self) -> Vec<(u64, ReleaseRequest)> {
        self.updated.lock().expect("mock lock").clone()
    }
}

impl ReleaseHost for MockHost {
    fn list_releases(&self) -> Result<Vec<Release>> {
        Ok(self.releases.clone())
    }

    fn target_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn generate_notes(&self, _previous_tag: &str, _next_tag: &str, _branch: &str) -> Result<String> {
        Ok(self.notes_body.clone())
    }

    fn create_release(&self, request: &ReleaseRequest) -> Result<Release> {
        self.created.lock().expect("mock lock").push(request.clone());
        Ok(Release {
            id: 1000,
            tag_name: request.tag_name.clone(),
            target_commitish: request.target_commitish.clone(),
            draft: request.draft,
        })
    }

    fn update_release(&self, id: u64, request: &ReleaseRequest) -> Result<Release> {
        self.updated
            .lock()
            .expect("mock lock")
            .push((id, request.clone()));
        Ok(Release {
            id,
            tag_name: request.tag_name.clone(),
            target_commitish: request.target_commitish.clone(),
            draft: request.draft,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_basic() {
        let mut host = MockHost::new("main", "### body");
        host.add_release(1, "v1.0.0", "main", false);

        let releases = host.list_releases().unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].tag_name, "v1.0.0");
        assert_eq!(host.target_branch().unwrap(), "main");
        assert_eq!(host.generate_notes("", "next", "main").unwrap(), "### body");
    }

    #[test]
    fn test_mock_host_records_creates() {
        let host = MockHost::new("main", "");
        let request = ReleaseRequest {
            tag_name: "v1.0.1".to_string(),
            name: "v1.0.1".to_string(),
            target_commitish: "main".to_string(),
            body: "notes".to_string(),
            draft: true,
        };

        let release = host.create_release(&request).unwrap();
        assert!(release.draft);
        assert_eq!(host.created_requests(), vec![request]);
        assert!(host.updated_requests().is_empty());
    }

    #[test]
    fn test_mock_host_records_updates() {
        let host = MockHost::new("main", "");
        let request = ReleaseRequest {
            tag_name: "v1.0.1".to_string(),
            name: "v1.0.1".to_string(),
            target_commitish: "main".to_string(),
            body: "updated notes".to_string(),
            draft: true,
        };

        host.update_release(2, &request).unwrap();
        let updated = host.updated_requests();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, 2);
        assert_eq!(updated[0].1.body, "updated notes");
    }
}
