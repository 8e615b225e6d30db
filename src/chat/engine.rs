//! The chat engine: one full turn against the remote model.
//!
//! `respond` never fails. It checks the response cache, builds the system
//! prompt from the session context, selects a credential from the key pool,
//! calls the gateway, enhances the reply with knowledge-base content and
//! stores it back in the cache. Every gateway failure is translated into a
//! canned conversational message and the used key is placed on cooldown.
//! Nothing is retried within a turn; the user's next submission picks up a
//! fresh key if one is available.

use crate::chat::cache::{CacheStats, ResponseCache};
use crate::chat::enhancer;
use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::error::{AshaError, Result};
use crate::llm::gateways::{GeminiConfig, GeminiGateway};
use crate::llm::prompt::build_system_prompt;
use crate::llm::{ApiKeyPool, ChatMessage, GenerationConfig, LlmGateway};
use crate::monitor::{CallStatus, PerformanceLogger};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Default model asked of the Gemini service
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

pub const QUOTA_MESSAGE: &str = "I've reached my usage limit. Please try again later.";

pub const UNAVAILABLE_MESSAGE: &str = "The model is currently unavailable. This could be due to \
                                       high demand. Please try again in a few minutes.";

pub struct ChatEngine {
    gateway: Arc<dyn LlmGateway>,
    keys: ApiKeyPool,
    model: String,
    generation: GenerationConfig,
    cache: Option<ResponseCache>,
    monitor: Option<PerformanceLogger>,
    api_calls: u64,
}

impl ChatEngine {
    /// Create an engine with the default model, generation parameters and a
    /// default-capacity cache.
    pub fn new(gateway: Arc<dyn LlmGateway>, keys: ApiKeyPool) -> Self {
        Self {
            gateway,
            keys,
            model: DEFAULT_MODEL.to_string(),
            generation: GenerationConfig::default(),
            cache: Some(ResponseCache::new()),
            monitor: None,
            api_calls: 0,
        }
    }

    /// Assemble an engine from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let gateway = GeminiGateway::with_config(GeminiConfig {
            timeout: std::time::Duration::from_secs(config.request_timeout_secs),
            ..Default::default()
        });
        let keys =
            ApiKeyPool::new(config.api_keys.clone())?.with_cooldown_secs(config.key_cooldown_secs);

        let mut engine = Self::new(Arc::new(gateway), keys).with_model(&config.model);
        engine.cache = config
            .cache_enabled
            .then(|| ResponseCache::with_capacity(config.cache_capacity));
        engine.monitor = config.log_dir.as_ref().map(PerformanceLogger::new);
        Ok(engine)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Replace the response cache (None disables caching entirely)
    pub fn with_cache(mut self, cache: Option<ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_monitor(mut self, monitor: PerformanceLogger) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Number of remote model calls made so far
    pub fn api_calls(&self) -> u64 {
        self.api_calls
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|c| c.stats())
    }

    pub fn key_pool(&self) -> &ApiKeyPool {
        &self.keys
    }

    /// Run one full turn. Always returns user-facing text.
    pub async fn respond(
        &mut self,
        user_input: &str,
        history: &[ChatMessage],
        context: &SessionContext,
    ) -> String {
        if let Some(cache) = &mut self.cache {
            if let Some(hit) = cache.get(user_input, context.career_stage) {
                info!("Returning cached response");
                return hit;
            }
        }

        let system_prompt = build_system_prompt(context, Some(user_input));
        let api_key = self.keys.acquire();
        self.api_calls += 1;

        let started = Instant::now();
        let result = self
            .gateway
            .complete(
                &self.model,
                &api_key,
                &system_prompt,
                history,
                user_input,
                &self.generation,
            )
            .await;
        let duration = started.elapsed();

        match result {
            Ok(reply) => {
                self.record_call(
                    duration,
                    CallStatus::Success,
                    json!({"history_length": history.len()}),
                );

                let enhanced = enhancer::enhance(user_input, context.career_stage, &reply);
                if let Some(cache) = &mut self.cache {
                    cache.put(user_input, context.career_stage, enhanced.clone());
                }
                enhanced
            }
            Err(err) => {
                warn!(error = %err, "Gateway call failed");
                self.keys.start_cooldown(&api_key);
                self.record_call(duration, CallStatus::Failure, json!({"error": err.to_string()}));
                user_facing_message(&err)
            }
        }
    }

    fn record_call(&self, duration: std::time::Duration, status: CallStatus, details: serde_json::Value) {
        if let Some(monitor) = &self.monitor {
            monitor.record("generate_reply", duration, status, details);
        }
    }
}

/// Translate a gateway failure into conversational text.
///
/// Classification is by error category first (timeouts count as the service
/// being unavailable), then by substring scan of the error text.
fn user_facing_message(err: &AshaError) -> String {
    match err {
        AshaError::TimeoutError(_) => return UNAVAILABLE_MESSAGE.to_string(),
        AshaError::HttpError(http) if http.is_timeout() => return UNAVAILABLE_MESSAGE.to_string(),
        _ => {}
    }

    let text = err.to_string().to_lowercase();
    if text.contains("quota") || text.contains("rate limit") {
        QUOTA_MESSAGE.to_string()
    } else if text.contains("not available") || text.contains("unavailable") {
        UNAVAILABLE_MESSAGE.to_string()
    } else {
        format!(
            "I apologize, but I'm having trouble connecting right now. Error: {}",
            err
        )
    }
}
