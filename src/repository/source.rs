//! Backends the catalog can be read from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::Novel;

/// Where catalog records come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read every record, in file order.
    async fn fetch(&self) -> Result<Vec<Novel>, CatalogError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// Catalog stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse catalog JSON. `path` is only used for error messages.
    pub fn parse(bytes: &[u8], path: &Path) -> Result<Vec<Novel>, CatalogError> {
        serde_json::from_slice(bytes).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Novel>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;
        Self::parse(&bytes, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    novels: Vec<Novel>,
}

impl MemorySource {
    pub fn new(novels: Vec<Novel>) -> Self {
        Self { novels }
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch(&self) -> Result<Vec<Novel>, CatalogError> {
        Ok(self.novels.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.novels.len())
    }
}
