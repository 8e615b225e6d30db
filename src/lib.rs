pub mod chat;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod knowledge;
pub mod llm;
pub mod monitor;

pub use error::{AshaError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::chat::{ChatEngine, ChatSession, ResponseCache, SessionStore};
    pub use crate::config::AppConfig;
    pub use crate::context::{CareerStage, SessionContext};
    pub use crate::error::{AshaError, Result};
    pub use crate::llm::gateways::GeminiGateway;
    pub use crate::llm::{ApiKeyPool, ChatMessage, GenerationConfig, LlmGateway, MessageRole};
}
