use crate::error::Result;
use crate::llm::models::{ChatMessage, GenerationConfig};
use async_trait::async_trait;

/// Abstract interface for remote text-generation services
///
/// A gateway is transport only: it sends the system instruction, the prior
/// history and the new message, and hands back the reply text. It never
/// inspects the response beyond its text, and it never decides which
/// credential to use; key selection belongs to the caller.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Complete a generation request with a text response
    async fn complete(
        &self,
        model: &str,
        api_key: &str,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
        config: &GenerationConfig,
    ) -> Result<String>;
}
