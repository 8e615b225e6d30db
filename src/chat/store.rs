//! Per-session storage keyed by session id.
//!
//! Each session's mutable state (context, cache, key cooldowns, history) is
//! confined to its own [`ChatSession`]; the store hands out sessions by id
//! so state is never shared between users served by one process.

use crate::chat::session::ChatSession;
use std::collections::HashMap;
use uuid::Uuid;

/// Map of session id to chat session
#[derive(Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, ChatSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session and return its id
    pub fn create(&mut self, session: ChatSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&ChatSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ChatSession> {
        self.sessions.get_mut(id)
    }

    /// Drop a session, destroying its state
    pub fn remove(&mut self, id: &Uuid) -> Option<ChatSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::engine::ChatEngine;
    use crate::error::Result;
    use crate::llm::{ApiKeyPool, ChatMessage, GenerationConfig, LlmGateway};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn complete(
            &self,
            _model: &str,
            _api_key: &str,
            _system_instruction: &str,
            _history: &[ChatMessage],
            message: &str,
            _config: &GenerationConfig,
        ) -> Result<String> {
            Ok(format!("echo: {}", message))
        }
    }

    fn new_session() -> ChatSession {
        let engine = ChatEngine::new(Arc::new(EchoGateway), ApiKeyPool::single("test-key"));
        ChatSession::new(engine)
    }

    #[test]
    fn test_create_and_lookup() {
        let mut store = SessionStore::new();
        let id = store.create(new_session());

        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_some());
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_remove_destroys_session() {
        let mut store = SessionStore::new();
        let id = store.create(new_session());

        assert!(store.remove(&id).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_state() {
        let mut store = SessionStore::new();
        let first = store.create(new_session());
        let second = store.create(new_session());

        store
            .get_mut(&first)
            .unwrap()
            .send("I'm a new graduate in software")
            .await;

        let first_session = store.get(&first).unwrap();
        let second_session = store.get(&second).unwrap();

        assert!(first_session.context().career_stage.is_set());
        assert_eq!(first_session.messages().len(), 2);

        assert!(!second_session.context().career_stage.is_set());
        assert!(second_session.messages().is_empty());
    }
}
