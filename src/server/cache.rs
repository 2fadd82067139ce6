//! In-memory cache for the loaded catalog.
//!
//! The catalog is a static file, so a loaded snapshot can be reused for a
//! while. A zero TTL disables caching and every request reads the file.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::repository::Catalog;

/// A cached value with expiration time.
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn get(&self) -> Option<T> {
        if self.is_expired() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

/// Holds the most recently loaded catalog.
pub struct CatalogCache {
    catalog: RwLock<Option<CacheEntry<Arc<Catalog>>>>,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            catalog: RwLock::new(None),
            ttl,
        }
    }

    /// Cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Get the cached catalog, or None if expired/missing.
    pub fn get(&self) -> Option<Arc<Catalog>> {
        self.catalog
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(|e| e.get()))
    }

    /// Store a freshly loaded catalog.
    pub fn set(&self, catalog: Arc<Catalog>) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(mut guard) = self.catalog.write() {
            *guard = Some(CacheEntry::new(catalog, self.ttl));
        }
    }
}
