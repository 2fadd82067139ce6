//! Web server for reading the story catalog.
//!
//! Provides:
//! - A landing page
//! - A filterable listing (`/novels`) by language, category, and text query
//! - A paged reader per story (`/novels/:id?page=N`)
//! - JSON equivalents under `/api`

mod assets;
mod cache;
mod handlers;
mod routes;
mod template_structs;

pub use cache::CatalogCache;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::CatalogError;
use crate::repository::{Catalog, NovelRepository};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub repo: NovelRepository,
    pub cache: Arc<CatalogCache>,
    pub site_title: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self::with_repository(
            NovelRepository::from_path(settings.data_file.clone()),
            CatalogCache::new(settings.cache_ttl),
            &settings.site_title,
        )
    }

    pub fn with_repository(repo: NovelRepository, cache: CatalogCache, site_title: &str) -> Self {
        Self {
            repo,
            cache: Arc::new(cache),
            site_title: Arc::from(site_title),
        }
    }

    /// Current catalog snapshot, from the cache when it is still fresh.
    pub async fn catalog(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.cache.get() {
            tracing::debug!("Catalog cache hit");
            return Ok(catalog);
        }
        if self.cache.is_enabled() {
            tracing::debug!("Catalog cache miss");
        }

        let catalog = Arc::new(self.repo.load().await?);
        self.cache.set(catalog.clone());
        Ok(catalog)
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);

    // Fail fast on an unreadable catalog instead of on the first request.
    let catalog = state.catalog().await?;
    tracing::info!(
        "Serving {} novels from {}",
        catalog.len(),
        state.repo.describe()
    );

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
