//! Read access to stories.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::models::Novel;

use super::catalog::Catalog;
use super::source::{CatalogSource, JsonFileSource};

/// Loads the catalog from its source.
#[derive(Clone)]
pub struct NovelRepository {
    source: Arc<dyn CatalogSource>,
}

impl NovelRepository {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Repository over a JSON catalog file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileSource::new(path))
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Read the whole catalog. Data issues are logged, not rejected.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = Catalog::new(self.source.fetch().await?);

        for issue in catalog.validate() {
            tracing::warn!("Catalog {}: {}", self.source.describe(), issue);
        }
        tracing::debug!(
            "Loaded {} novels from {}",
            catalog.len(),
            self.source.describe()
        );

        Ok(catalog)
    }

    /// Load and look up a single story.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Novel>, CatalogError> {
        Ok(self.load().await?.find_by_id(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemorySource;

    fn novel(id: &str) -> Novel {
        Novel {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            category: "Horror".to_string(),
            keywords: String::new(),
            lang: "ja".to_string(),
            content: vec!["p1".to_string()],
        }
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let repo = NovelRepository::new(MemorySource::new(vec![novel("b"), novel("a")]));
        let catalog = repo.load().await.unwrap();
        let ids: Vec<_> = catalog.novels().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = NovelRepository::new(MemorySource::new(vec![novel("a"), novel("b")]));
        assert_eq!(repo.find_by_id("b").await.unwrap(), Some(novel("b")));
        assert_eq!(repo.find_by_id("zzz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let repo = NovelRepository::from_path("/nonexistent/novels.json");
        assert!(repo.load().await.is_err());
    }
}
