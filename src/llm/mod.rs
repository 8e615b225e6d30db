pub mod gateway;
pub mod gateways;
pub mod key_pool;
pub mod models;
pub mod prompt;

pub use gateway::LlmGateway;
pub use key_pool::ApiKeyPool;
pub use models::{
    default_safety_settings, ChatMessage, GenerationConfig, MessageRole, SafetySetting,
};
pub use prompt::build_system_prompt;
