//! Response cache keyed by user text and career stage.
//!
//! Exact composite-key match only: no normalization, no fuzzy matching. Two
//! semantically identical queries with different casing or punctuation are
//! cache-distinct. At capacity, one entry is evicted uniformly at random
//! before insert; this is a deliberate simplicity trade-off, not an LRU.

use crate::context::CareerStage;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::debug;

/// Default maximum number of cached responses
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    stage: CareerStage,
}

/// Hit/miss counters for one cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from cache, 0.0 when none happened yet
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded map from (user text, career stage) to enhanced response
pub struct ResponseCache {
    entries: HashMap<CacheKey, String>,
    capacity: usize,
    rng: StdRng,
    stats: CacheStats,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            rng: StdRng::from_entropy(),
            stats: CacheStats::default(),
        }
    }

    /// Substitute a deterministic random source (used in tests)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Look up a previously stored response
    pub fn get(&mut self, text: &str, stage: CareerStage) -> Option<String> {
        let key = CacheKey {
            text: text.to_string(),
            stage,
        };
        match self.entries.get(&key) {
            Some(response) => {
                self.stats.hits += 1;
                Some(response.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store a response, evicting one random entry first when at capacity
    pub fn put(&mut self, text: &str, stage: CareerStage, response: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() >= self.capacity {
            let keys: Vec<CacheKey> = self.entries.keys().cloned().collect();
            if let Some(victim) = keys.choose(&mut self.rng) {
                debug!("Cache full; evicting one random entry");
                self.entries.remove(victim);
            }
        }

        self.entries.insert(
            CacheKey {
                text: text.to_string(),
                stage,
            },
            response.into(),
        );
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_cache(capacity: usize) -> ResponseCache {
        ResponseCache::with_capacity(capacity).with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_get_after_put_returns_stored_value() {
        let mut cache = seeded_cache(10);
        cache.put("help with my resume", CareerStage::Starter, "some advice");

        assert_eq!(
            cache.get("help with my resume", CareerStage::Starter).as_deref(),
            Some("some advice")
        );
    }

    #[test]
    fn test_key_is_composite_of_text_and_stage() {
        let mut cache = seeded_cache(10);
        cache.put("help", CareerStage::Starter, "starter advice");

        assert!(cache.get("help", CareerStage::Riser).is_none());
        assert!(cache.get("help", CareerStage::Unset).is_none());
        assert_eq!(cache.get("help", CareerStage::Starter).as_deref(), Some("starter advice"));
    }

    #[test]
    fn test_lookup_is_exact_no_normalization() {
        let mut cache = seeded_cache(10);
        cache.put("Help me", CareerStage::Starter, "advice");

        assert!(cache.get("help me", CareerStage::Starter).is_none());
        assert!(cache.get("Help me!", CareerStage::Starter).is_none());
    }

    #[test]
    fn test_put_beyond_capacity_never_exceeds_capacity() {
        let mut cache = seeded_cache(5);
        for i in 0..50 {
            cache.put(&format!("query {}", i), CareerStage::Starter, format!("reply {}", i));
            assert!(cache.len() <= 5);
        }
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_newest_entry_survives_eviction() {
        let mut cache = seeded_cache(3);
        for i in 0..10 {
            let text = format!("query {}", i);
            cache.put(&text, CareerStage::Riser, "reply");
            assert_eq!(cache.get(&text, CareerStage::Riser).as_deref(), Some("reply"));
        }
    }

    #[test]
    fn test_overwrite_same_key_keeps_latest_value() {
        let mut cache = seeded_cache(10);
        cache.put("query", CareerStage::Starter, "old");
        cache.put("query", CareerStage::Starter, "new");

        assert_eq!(cache.get("query", CareerStage::Starter).as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = seeded_cache(10);
        cache.put("query", CareerStage::Starter, "reply");

        cache.get("query", CareerStage::Starter);
        cache.get("other", CareerStage::Starter);
        cache.get("query", CareerStage::Starter);

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity_cache_stores_nothing() {
        let mut cache = seeded_cache(0);
        cache.put("query", CareerStage::Starter, "reply");
        assert!(cache.is_empty());
        assert!(cache.get("query", CareerStage::Starter).is_none());
    }
}
