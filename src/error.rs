//! Error types and result aliases for the Asha engine.
//!
//! This module defines the core error type [`AshaError`] and the [`Result`] type alias
//! used throughout the crate. All public APIs that can fail return `Result<T>` for
//! consistent error handling. Note that the chat engine itself never surfaces these
//! errors to the end user; it translates them into conversational text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AshaError {
    #[error("LLM gateway error: {0}")]
    GatewayError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Timeout error: {0}")]
    TimeoutError(String),
}

pub type Result<T> = std::result::Result<T, AshaError>;
