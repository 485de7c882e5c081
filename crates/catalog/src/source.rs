//! Snapshot source trait abstraction.

use async_trait::async_trait;
use prep_core::{Company, ProfileData, Topic};

/// Error type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading snapshots.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Source of catalog and profile snapshots.
///
/// Each call returns a fresh, owned snapshot. Aggregation code never keeps
/// a handle to the source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every topic, in catalog order.
    async fn load_topics(&self) -> Result<Vec<Topic>>;

    /// Load every company, in catalog order.
    async fn load_companies(&self) -> Result<Vec<Company>>;

    /// Load the learner profile.
    async fn load_profile(&self) -> Result<ProfileData>;
}
