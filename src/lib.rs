pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod markdown;
pub mod notes;
pub mod release;
pub mod sections;
pub mod ui;
pub mod version;

pub use error::{DraftReleaseError, Result};
