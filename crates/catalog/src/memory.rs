//! In-memory catalog, for embedding callers and tests.

use std::sync::Arc;
use async_trait::async_trait;
use prep_core::{Company, ProfileData, Topic};
use tokio::sync::RwLock;

use super::{CatalogSource, Result};

/// Catalog held in memory.
///
/// Setters replace the stored snapshot; loads hand out clones, so a caller
/// holding an earlier load never sees later edits.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    topics: Arc<RwLock<Vec<Topic>>>,
    companies: Arc<RwLock<Vec<Company>>>,
    profile: Arc<RwLock<ProfileData>>,
}

impl InMemoryCatalog {
    /// Create a catalog from existing snapshots.
    pub fn new(topics: Vec<Topic>, companies: Vec<Company>) -> Self {
        Self {
            topics: Arc::new(RwLock::new(topics)),
            companies: Arc::new(RwLock::new(companies)),
            profile: Arc::new(RwLock::new(ProfileData::default())),
        }
    }

    /// Replace the topic list.
    pub async fn set_topics(&self, topics: Vec<Topic>) {
        *self.topics.write().await = topics;
    }

    /// Replace the company list.
    pub async fn set_companies(&self, companies: Vec<Company>) {
        *self.companies.write().await = companies;
    }

    /// Replace the profile.
    pub async fn set_profile(&self, profile: ProfileData) {
        *self.profile.write().await = profile;
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load_topics(&self) -> Result<Vec<Topic>> {
        Ok(self.topics.read().await.clone())
    }

    async fn load_companies(&self) -> Result<Vec<Company>> {
        Ok(self.companies.read().await.clone())
    }

    async fn load_profile(&self) -> Result<ProfileData> {
        Ok(self.profile.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_are_independent_snapshots() {
        let catalog = InMemoryCatalog::new(vec![Topic::new("arrays", "Arrays", 10, 2)], vec![]);

        let before = catalog.load_topics().await.unwrap();
        catalog.set_topics(vec![Topic::new("arrays", "Arrays", 10, 9)]).await;
        let after = catalog.load_topics().await.unwrap();

        assert_eq!(before[0].solved_problems, 2);
        assert_eq!(after[0].solved_problems, 9);
    }

    #[tokio::test]
    async fn test_profile_defaults_to_empty() {
        let catalog = InMemoryCatalog::default();
        assert_eq!(catalog.load_profile().await.unwrap(), ProfileData::default());
        assert!(catalog.load_companies().await.unwrap().is_empty());

        catalog
            .set_profile(ProfileData {
                name: "Ada".to_string(),
                ..Default::default()
            })
            .await;
        assert_eq!(catalog.load_profile().await.unwrap().name, "Ada");
    }
}
