//! Login Store Module
//!
//! The boundary to whatever owns the saved logins, plus an in-memory
//! implementation fed from a JSON export.

pub mod import;
pub mod memory;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

/// Login store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Logins file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid logins file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Login store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Source of saved logins.
///
/// Both calls hand back a fresh snapshot; callers replace whatever they
/// held before with it.
#[async_trait]
pub trait LoginStore: Send + Sync {
    /// Every saved login
    async fn get_all_logins(&self) -> StoreResult<Vec<LoginRecord>>;

    /// Logins matching `query`. A blank query matches everything.
    async fn search_logins(&self, query: &str) -> StoreResult<Vec<LoginRecord>>;
}

// Re-exports
pub use memory::MemoryLoginStore;
pub use models::{LoginEntry, LoginRecord};
