use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::models::ScoredDog;

/// In-process cache of full recommendation rankings, one entry per user
///
/// Entries expire after the configured TTL. Rankings depend on the user's
/// preferences and on the catalog, so callers invalidate a single user on a
/// preference change and everything on any dog change.
///
/// Every invalidation bumps a generation counter. A ranking computed from
/// data read under an older generation is never stored, so a write that
/// lands while a ranking is being built cannot be undone by that ranking.
#[derive(Clone)]
pub struct RecommendationCache {
    entries: moka::future::Cache<String, Arc<Vec<ScoredDog>>>,
    generation: Arc<AtomicU64>,
    enabled: bool,
}

impl RecommendationCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            entries,
            generation: Arc::new(AtomicU64::new(0)),
            enabled: true,
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            entries: moka::future::CacheBuilder::new(0).build(),
            generation: Arc::new(AtomicU64::new(0)),
            enabled: false,
        }
    }

    pub async fn get(&self, user_id: u64) -> Option<Arc<Vec<ScoredDog>>> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::recommendations(user_id);
        let hit = self.entries.get(&key).await;
        tracing::trace!("Cache {}: {}", if hit.is_some() { "hit" } else { "miss" }, key);
        hit
    }

    /// Current invalidation generation
    ///
    /// Read it before loading the data a ranking is built from and hand it
    /// back to [`insert`](Self::insert).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Store a ranking built from data read at `generation`
    ///
    /// Returns `false` when an invalidation happened since, in which case
    /// nothing is kept.
    pub async fn insert(
        &self,
        user_id: u64,
        generation: u64,
        ranking: Arc<Vec<ScoredDog>>,
    ) -> bool {
        if !self.enabled || self.generation() != generation {
            return false;
        }

        let key = CacheKey::recommendations(user_id);
        self.entries.insert(key.clone(), ranking).await;

        // An invalidation may have bumped the generation between the check
        // and the insert without seeing the new entry
        if self.generation() != generation {
            self.entries.invalidate(&key).await;
            tracing::debug!("Dropped stale ranking for {}", key);
            return false;
        }

        true
    }

    pub async fn invalidate_user(&self, user_id: u64) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries
            .invalidate(&CacheKey::recommendations(user_id))
            .await;
    }

    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries.invalidate_all();
        tracing::debug!("Invalidated all cached recommendations");
    }

    /// Entry count after flushing moka's pending maintenance
    pub async fn stats(&self) -> CacheStats {
        self.entries.run_pending_tasks().await;
        CacheStats {
            enabled: self.enabled,
            entries: self.entries.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a user's ranked recommendations
    pub fn recommendations(user_id: u64) -> String {
        format!("recs:{}", user_id)
    }
}
