//! JSON directory catalog.
//!
//! Reads `topics.json`, `companies.json` and `profile.json` from a root
//! directory. The catalog files are required; a missing profile means the
//! learner has not filled one in yet.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use prep_core::{Company, ProfileData, Topic};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use super::{CatalogError, CatalogSource, Result};

const TOPICS_FILE: &str = "topics.json";
const COMPANIES_FILE: &str = "companies.json";
const PROFILE_FILE: &str = "profile.json";

/// File-based JSON catalog.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    root: PathBuf,
}

impl JsonCatalog {
    /// Create a catalog rooted at `root`. Nothing is read until a load call.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse one file. `Ok(None)` if it does not exist.
    async fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.root.join(name);
        let content = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        debug!("Loaded {} ({} bytes)", path.display(), content.len());
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn read_required<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.read_json(name)
            .await?
            .ok_or_else(|| CatalogError::NotFound(self.root.join(name).display().to_string()))
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn load_topics(&self) -> Result<Vec<Topic>> {
        self.read_required(TOPICS_FILE).await
    }

    async fn load_companies(&self) -> Result<Vec<Company>> {
        self.read_required(COMPANIES_FILE).await
    }

    async fn load_profile(&self) -> Result<ProfileData> {
        Ok(self.read_json(PROFILE_FILE).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::Difficulty;
    use tempfile::TempDir;

    async fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_catalog_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            TOPICS_FILE,
            r#"[{"id":"arrays","title":"Arrays","icon":"📊","totalProblems":20,"solvedProblems":5}]"#,
        )
        .await;
        write(
            &dir,
            COMPANIES_FILE,
            r#"[{"id":"google","title":"Google","totalProblems":3,"solvedProblems":1,
                 "problems":[{"title":"Two Sum","difficulty":"Easy"}]}]"#,
        )
        .await;

        let catalog = JsonCatalog::new(dir.path());
        let topics = catalog.load_topics().await.unwrap();
        let companies = catalog.load_companies().await.unwrap();

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].solved_problems, 5);
        assert_eq!(companies[0].problems[0].difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_missing_catalog_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let catalog = JsonCatalog::new(dir.path());

        let err = catalog.load_topics().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = JsonCatalog::new(dir.path());

        let profile = catalog.load_profile().await.unwrap();
        assert_eq!(profile, ProfileData::default());
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, PROFILE_FILE, "{ not json").await;

        let err = JsonCatalog::new(dir.path()).load_profile().await.unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[tokio::test]
    async fn test_profile_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let mut profile = ProfileData {
            name: "Ada".to_string(),
            summary: "Programmer".to_string(),
            ..Default::default()
        };
        profile.skills.programming.insert("Rust".to_string());
        write(&dir, PROFILE_FILE, &serde_json::to_string_pretty(&profile).unwrap()).await;

        let loaded = JsonCatalog::new(dir.path()).load_profile().await.unwrap();
        assert_eq!(loaded, profile);
    }
}
