use thiserror::Error;

/// Unified error type for draft-release operations
#[derive(Error, Debug)]
pub enum DraftReleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Release host error: {0}")]
    Host(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in draft-release
pub type Result<T> = std::result::Result<T, DraftReleaseError>;

impl DraftReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DraftReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DraftReleaseError::Version(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        DraftReleaseError::Template(msg.into())
    }

    /// Create a release host error with context
    pub fn host(msg: impl Into<String>) -> Self {
        DraftReleaseError::Host(msg.into())
    }
}
