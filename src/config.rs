//! Application configuration.
//!
//! Credentials are sourced only from the environment (optionally via a
//! `.env` file): `GOOGLE_API_KEY` for the single-key setup, or
//! `GOOGLE_API_KEY_1`..`GOOGLE_API_KEY_5` for a rotating pool. Starting with
//! zero usable keys is a fatal configuration error.

use crate::chat::cache::DEFAULT_CACHE_CAPACITY;
use crate::chat::engine::DEFAULT_MODEL;
use crate::error::{AshaError, Result};
use crate::llm::gateways::gemini::DEFAULT_TIMEOUT_SECS;
use crate::llm::key_pool::DEFAULT_COOLDOWN_SECS;
use std::path::PathBuf;
use tracing::warn;

/// Google API keys are ~40 characters; anything shorter is a paste error
const MIN_KEY_LENGTH: usize = 30;

/// Everything the engine needs to come up
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_keys: Vec<String>,
    pub model: String,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    pub key_cooldown_secs: i64,
    pub request_timeout_secs: u64,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Configuration with defaults for everything but the credentials
    pub fn new(api_keys: Vec<String>) -> Self {
        Self {
            api_keys,
            model: DEFAULT_MODEL.to_string(),
            cache_enabled: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            key_cooldown_secs: DEFAULT_COOLDOWN_SECS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_dir: None,
        }
    }

    /// Load configuration from the environment (and `.env` when present).
    ///
    /// Fails when no usable credential is found; that halts startup rather
    /// than letting every later call fail.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let candidates = key_env_names()
            .into_iter()
            .map(|name| {
                let value = std::env::var(&name).ok();
                (name, value)
            })
            .collect::<Vec<_>>();

        Self::from_key_candidates(candidates)
    }

    fn from_key_candidates(candidates: Vec<(String, Option<String>)>) -> Result<Self> {
        let api_keys = usable_keys(candidates);
        if api_keys.is_empty() {
            return Err(AshaError::ConfigError(
                "no usable API keys found; set GOOGLE_API_KEY or GOOGLE_API_KEY_1..GOOGLE_API_KEY_5"
                    .to_string(),
            ));
        }

        Ok(Self::new(api_keys))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

fn key_env_names() -> Vec<String> {
    let mut names = vec!["GOOGLE_API_KEY".to_string()];
    names.extend((1..=5).map(|i| format!("GOOGLE_API_KEY_{}", i)));
    names
}

fn usable_keys(candidates: Vec<(String, Option<String>)>) -> Vec<String> {
    let mut keys = Vec::new();
    for (name, value) in candidates {
        let Some(value) = value else { continue };
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        if looks_like_api_key(&value) {
            keys.push(value);
        } else {
            warn!(variable = %name, "Ignoring implausibly short API key");
        }
    }
    keys
}

fn looks_like_api_key(key: &str) -> bool {
    key.len() >= MIN_KEY_LENGTH
}
