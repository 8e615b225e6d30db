//! Gemini Gateway for LLM interactions.
//!
//! This module provides a gateway for Google's Generative Language API
//! (`generateContent`). The gateway is pure transport: it ships the system
//! instruction, history and new message over the wire and returns the reply
//! text, never inspecting the response beyond the candidate text.

use crate::error::{AshaError, Result};
use crate::llm::gateway::LlmGateway;
use crate::llm::models::{default_safety_settings, ChatMessage, GenerationConfig, SafetySetting};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Default seconds before an in-flight request is abandoned. A hung remote
/// call must surface as an error instead of hanging the whole turn.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub safety_settings: Vec<SafetySetting>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("GEMINI_API_ENDPOINT").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            safety_settings: default_safety_settings(),
        }
    }
}

/// Gateway for Google's Gemini generative models.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// Create a new Gemini gateway with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeminiConfig::default())
    }

    /// Create a new Gemini gateway with custom configuration.
    pub fn with_config(config: GeminiConfig) -> Self {
        let client = Client::builder().timeout(config.timeout).build().unwrap();
        Self { client, config }
    }

    /// Create gateway with a custom base URL (used with mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_config(GeminiConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }
}

impl Default for GeminiGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn build_request_body(
    system_instruction: &str,
    history: &[ChatMessage],
    message: &str,
    config: &GenerationConfig,
    safety_settings: &[SafetySetting],
) -> Result<Value> {
    let mut contents: Vec<Value> = history
        .iter()
        .map(|m| {
            json!({
                "role": m.role.wire_name(),
                "parts": [{"text": m.content}]
            })
        })
        .collect();
    contents.push(json!({
        "role": "user",
        "parts": [{"text": message}]
    }));

    Ok(json!({
        "system_instruction": {"parts": [{"text": system_instruction}]},
        "contents": contents,
        "generationConfig": {
            "temperature": config.temperature,
            "topP": config.top_p,
            "topK": config.top_k,
            "maxOutputTokens": config.max_output_tokens,
        },
        "safetySettings": serde_json::to_value(safety_settings)?,
    }))
}

fn extract_text(response_body: &Value) -> Option<String> {
    let parts = response_body["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn map_transport_error(err: reqwest::Error) -> AshaError {
    if err.is_timeout() {
        AshaError::TimeoutError("Gemini request timed out".to_string())
    } else {
        AshaError::HttpError(err)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn complete(
        &self,
        model: &str,
        api_key: &str,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        info!("Delegating to Gemini for completion");
        debug!("Model: {}, History length: {}", model, history.len());

        let body = build_request_body(
            system_instruction,
            history,
            message,
            config,
            &self.config.safety_settings,
        )?;

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.config.base_url, model
            ))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AshaError::ApiError(format!(
                "Gemini API error {}: {}",
                status, detail
            )));
        }

        let response_body: Value = response.json().await.map_err(map_transport_error)?;

        extract_text(&response_body)
            .ok_or_else(|| AshaError::GatewayError("No content in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::models::MessageRole;

    fn sample_history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("Hi"),
            ChatMessage::assistant("Hello! How can I help your career today?"),
        ]
    }

    #[test]
    fn test_request_body_maps_assistant_to_model_role() {
        let body = build_request_body(
            "system",
            &sample_history(),
            "Tell me more",
            &GenerationConfig::default(),
            &default_safety_settings(),
        )
        .unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "Tell me more");
    }

    #[test]
    fn test_request_body_carries_generation_config_and_safety() {
        let config = GenerationConfig {
            temperature: 0.3,
            top_p: 0.9,
            top_k: 20,
            max_output_tokens: 256,
        };
        let body =
            build_request_body("system", &[], "hello", &config, &default_safety_settings())
                .unwrap();

        assert_eq!(body["system_instruction"]["parts"][0]["text"], "system");
        assert_eq!(body["generationConfig"]["temperature"], 0.3);
        assert_eq!(body["generationConfig"]["topK"], 20);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "world"}]}
            }]
        });
        assert_eq!(extract_text(&body).unwrap(), "Hello world");
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        assert!(extract_text(&json!({"candidates": []})).is_none());
        assert!(extract_text(&json!({})).is_none());
    }

    #[tokio::test]
    async fn test_complete_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-pro:generateContent")
            .match_query(mockito::Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": {"parts": [{"text": "You could start by updating your resume."}]}
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let gateway = GeminiGateway::with_base_url(server.url());
        let reply = gateway
            .complete(
                "gemini-1.5-pro",
                "test-key",
                "system",
                &sample_history(),
                "What should I do first?",
                &GenerationConfig::default(),
            )
            .await
            .unwrap();

        assert_eq!(reply, "You could start by updating your resume.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_maps_http_failure_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-1.5-pro:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_body("Resource has been exhausted (e.g. check quota).")
            .create_async()
            .await;

        let gateway = GeminiGateway::with_base_url(server.url());
        let err = gateway
            .complete(
                "gemini-1.5-pro",
                "test-key",
                "system",
                &[],
                "hello",
                &GenerationConfig::default(),
            )
            .await
            .unwrap_err();

        match err {
            AshaError::ApiError(detail) => {
                assert!(detail.contains("429"));
                assert!(detail.contains("quota"));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_with_empty_candidates_is_gateway_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-1.5-pro:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"candidates": []}).to_string())
            .create_async()
            .await;

        let gateway = GeminiGateway::with_base_url(server.url());
        let err = gateway
            .complete(
                "gemini-1.5-pro",
                "test-key",
                "system",
                &[],
                "hello",
                &GenerationConfig::default(),
            )
            .await
            .unwrap_err();

        match err {
            AshaError::GatewayError(msg) => assert!(msg.contains("No content")),
            other => panic!("Expected GatewayError, got {:?}", other),
        }
    }

    #[test]
    fn test_roles_serialize_for_wire() {
        assert_eq!(MessageRole::Assistant.wire_name(), "model");
    }
}
