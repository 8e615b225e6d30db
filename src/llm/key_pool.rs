//! API key pool with rotation and failure cooldowns.
//!
//! The pool holds one or more credentials for the remote model service. A key
//! that caused a failed call is put on cooldown and excluded from selection
//! until its cooldown expires. Selection among available keys is uniform
//! random; when every key is cooling, the key closest to expiry is handed out
//! so the pool never blocks indefinitely.

use crate::error::{AshaError, Result};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

/// Default seconds a key stays on cooldown after a failed call
pub const DEFAULT_COOLDOWN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct PooledKey {
    key: String,
    cooldown_until: DateTime<Utc>,
}

/// Pool of API credentials with a cooldown policy on failure
///
/// A key is available when `cooldown_until <= now`. Keys start available.
/// There is no explicit success transition; a key that worked simply stays
/// available.
#[derive(Debug)]
pub struct ApiKeyPool {
    keys: Vec<PooledKey>,
    cooldown: Duration,
    rng: StdRng,
}

impl ApiKeyPool {
    /// Create a pool from a set of credentials.
    ///
    /// Fails with [`AshaError::ConfigError`] when no credentials are given;
    /// an empty pool is a fatal configuration error.
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(AshaError::ConfigError("no API keys configured".to_string()));
        }

        Ok(Self {
            keys: keys
                .into_iter()
                .map(|key| PooledKey {
                    key,
                    cooldown_until: DateTime::UNIX_EPOCH,
                })
                .collect(),
            cooldown: Duration::seconds(DEFAULT_COOLDOWN_SECS),
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a single-key pool
    pub fn single(key: impl Into<String>) -> Self {
        Self::new(vec![key.into()]).expect("single key is never empty")
    }

    /// Override the cooldown applied to failed keys
    pub fn with_cooldown_secs(mut self, secs: i64) -> Self {
        self.cooldown = Duration::seconds(secs);
        self
    }

    /// Substitute a deterministic random source (used in tests)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Number of keys in the pool
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of keys currently available at `now`
    pub fn available_at(&self, now: DateTime<Utc>) -> usize {
        self.keys.iter().filter(|k| k.cooldown_until <= now).count()
    }

    /// Select a key for the next call
    pub fn acquire(&mut self) -> String {
        self.acquire_at(Utc::now())
    }

    /// Select a key for the next call, evaluated at `now`.
    ///
    /// Uniform-random among available keys; when none are available the key
    /// with the minimum `cooldown_until` is returned.
    pub fn acquire_at(&mut self, now: DateTime<Utc>) -> String {
        let available: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.cooldown_until <= now)
            .map(|(i, _)| i)
            .collect();

        if let Some(&index) = available.choose(&mut self.rng) {
            debug!(available = available.len(), "Selected available API key");
            return self.keys[index].key.clone();
        }

        // Every key is cooling; hand out the one closest to expiry.
        let soonest = self
            .keys
            .iter()
            .min_by_key(|k| k.cooldown_until)
            .expect("pool is never empty");
        warn!("All API keys cooling down; using the one closest to expiry");
        soonest.key.clone()
    }

    /// Put `key` on cooldown after a failed call
    pub fn start_cooldown(&mut self, key: &str) {
        self.start_cooldown_at(key, Utc::now());
    }

    /// Put `key` on cooldown, evaluated at `now`
    pub fn start_cooldown_at(&mut self, key: &str, now: DateTime<Utc>) {
        if let Some(pooled) = self.keys.iter_mut().find(|k| k.key == key) {
            pooled.cooldown_until = now + self.cooldown;
            debug!(until = %pooled.cooldown_until, "API key placed on cooldown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_pool(keys: &[&str]) -> ApiKeyPool {
        ApiKeyPool::new(keys.iter().map(|k| k.to_string()).collect())
            .unwrap()
            .with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_empty_pool_is_config_error() {
        let err = ApiKeyPool::new(vec![]).unwrap_err();
        match err {
            AshaError::ConfigError(_) => {}
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_single_key_pool_always_returns_the_key() {
        let mut pool = ApiKeyPool::single("only-key");
        assert_eq!(pool.acquire(), "only-key");
        assert_eq!(pool.acquire(), "only-key");
    }

    #[test]
    fn test_all_keys_start_available() {
        let pool = seeded_pool(&["a", "b", "c"]);
        assert_eq!(pool.available_at(Utc::now()), 3);
    }

    #[test]
    fn test_cooldown_excludes_key_from_selection() {
        let mut pool = seeded_pool(&["a", "b"]);
        let now = Utc::now();

        pool.start_cooldown_at("a", now);

        // While "a" is cooling, only "b" may come back.
        for _ in 0..20 {
            assert_eq!(pool.acquire_at(now), "b");
            assert_eq!(pool.acquire_at(now + Duration::seconds(59)), "b");
        }
    }

    #[test]
    fn test_cooldown_expires_after_configured_window() {
        let mut pool = seeded_pool(&["a", "b"]).with_cooldown_secs(60);
        let now = Utc::now();

        pool.start_cooldown_at("a", now);
        assert_eq!(pool.available_at(now + Duration::seconds(59)), 1);

        // cooldown_until <= now means available again.
        assert_eq!(pool.available_at(now + Duration::seconds(60)), 2);

        let later = now + Duration::seconds(60);
        let mut seen_a = false;
        for _ in 0..50 {
            if pool.acquire_at(later) == "a" {
                seen_a = true;
                break;
            }
        }
        assert!(seen_a, "expired key should re-enter the selection pool");
    }

    #[test]
    fn test_exhausted_pool_returns_soonest_expiring_key() {
        let mut pool = seeded_pool(&["a", "b", "c"]);
        let now = Utc::now();

        pool.start_cooldown_at("a", now);
        pool.start_cooldown_at("b", now - Duration::seconds(30));
        pool.start_cooldown_at("c", now - Duration::seconds(10));

        // "b" went on cooldown earliest, so it expires first.
        assert_eq!(pool.available_at(now), 0);
        assert_eq!(pool.acquire_at(now), "b");
    }

    #[test]
    fn test_selection_covers_all_available_keys() {
        let mut pool = seeded_pool(&["a", "b", "c"]);
        let now = Utc::now();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pool.acquire_at(now));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_cooldown_for_unknown_key_is_ignored() {
        let mut pool = seeded_pool(&["a"]);
        pool.start_cooldown("never-issued");
        assert_eq!(pool.available_at(Utc::now()), 1);
    }
}
