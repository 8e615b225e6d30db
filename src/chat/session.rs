//! Chat session management.
//!
//! A session owns the conversation history, the inferred session context and
//! the chat engine. Each submission is handled to completion before the next
//! is accepted: extract context, run the engine turn, append both messages
//! to the history. The history is the single source of truth for rendering
//! and for the model call's history parameter.

use crate::chat::engine::ChatEngine;
use crate::context::{extractor, CareerStage, SessionContext};
use crate::llm::ChatMessage;

fn stage_acknowledgement(stage: CareerStage) -> Option<&'static str> {
    match stage {
        CareerStage::Starter => Some(
            "Thanks for letting me know you're just starting your career journey! I'll tailor \
             my guidance to help you build a strong foundation. What specific aspect of \
             starting your career would you like help with?",
        ),
        CareerStage::Restarter => Some(
            "I understand you're returning to work after a break. That takes courage! I'll \
             focus on helping you leverage your previous experience while navigating this \
             transition. What's your biggest concern about restarting your career?",
        ),
        CareerStage::Riser => Some(
            "Great to know you're looking to advance in your established career! I'll focus on \
             strategies to help you continue growing professionally. What specific aspect of \
             career advancement are you currently focusing on?",
        ),
        CareerStage::Unset => None,
    }
}

/// One user's conversation with the assistant
pub struct ChatSession {
    engine: ChatEngine,
    context: SessionContext,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(engine: ChatEngine) -> Self {
        Self {
            engine,
            context: SessionContext::new(),
            messages: Vec::new(),
        }
    }

    /// Handle one user submission to completion and return the reply.
    ///
    /// The pipeline is: update the session context from the new text, run
    /// the engine turn against the prior history, then append the user and
    /// assistant messages.
    pub async fn send(&mut self, user_input: &str) -> String {
        extractor::extract(user_input, &mut self.context);

        let reply = self.engine.respond(user_input, &self.messages, &self.context).await;

        self.messages.push(ChatMessage::user(user_input));
        self.messages.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    /// Explicit stage selection (e.g. from a stage-picker UI).
    ///
    /// Unlike keyword extraction this overwrites any previous stage, and the
    /// assistant acknowledges the selection in the history.
    pub fn set_stage(&mut self, stage: CareerStage) {
        self.context.career_stage = stage;
        if let Some(ack) = stage_acknowledgement(stage) {
            self.messages.push(ChatMessage::assistant(ack));
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn engine(&self) -> &ChatEngine {
        &self.engine
    }

    /// Restore loaded messages as the conversation history
    pub fn restore_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Destroy the session state: context and history
    pub fn reset(&mut self) {
        self.context = SessionContext::new();
        self.messages.clear();
    }
}
