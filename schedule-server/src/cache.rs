//! Caching layer for sailing fetches.
//!
//! Carrier schedule pages change a few times a day at most, while users
//! iterate on the same lane many times in a session. Caching whole fetch
//! results per (lane, filter) keeps repeat lookups off the source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::{Port, ServiceId};
use crate::sailings::{SailingError, SailingRecord, SailingSource};

/// Cache key for a fetch: (origin, destination, resolved filter).
///
/// The filter is part of the key because a filtered fetch and an
/// unfiltered fetch of the same lane return different lists.
type SailingKey = (Port, Port, Option<ServiceId>);

/// Cached fetch result.
type SailingEntry = Arc<Vec<SailingRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 500,
        }
    }
}

/// Cache for sailing fetch results.
pub struct SailingCache {
    sailings: MokaCache<SailingKey, SailingEntry>,
}

impl SailingCache {
    pub fn new(config: &CacheConfig) -> Self {
        let sailings = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { sailings }
    }

    pub async fn get(&self, key: &SailingKey) -> Option<SailingEntry> {
        self.sailings.get(key).await
    }

    pub async fn insert(&self, key: SailingKey, entry: SailingEntry) {
        self.sailings.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.sailings.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.sailings.invalidate_all();
    }
}

/// Sailing source with caching.
///
/// Wraps any [`SailingSource`] and caches successful fetches. Errors are
/// never cached; a failed scrape should be retried, not remembered.
pub struct CachedSailingSource<S> {
    source: S,
    cache: SailingCache,
}

impl<S: SailingSource> CachedSailingSource<S> {
    pub fn new(source: S, cache_config: &CacheConfig) -> Self {
        Self {
            source,
            cache: SailingCache::new(cache_config),
        }
    }

    /// Access the underlying source for operations that bypass cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl<S: SailingSource> SailingSource for CachedSailingSource<S> {
    async fn fetch_sailings(
        &self,
        origin: &Port,
        destination: &Port,
        filter: Option<&ServiceId>,
    ) -> Result<Vec<SailingRecord>, SailingError> {
        let key = (origin.clone(), destination.clone(), filter.cloned());

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached.as_ref().clone());
        }

        let sailings = self
            .source
            .fetch_sailings(origin, destination, filter)
            .await?;

        self.cache
            .insert(key, Arc::new(sailings.clone()))
            .await;

        Ok(sailings)
    }

    fn name(&self) -> &str {
        self.source.name()
    }
}
