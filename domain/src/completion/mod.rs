//! Chat-completion request value objects
//!
//! Provider-neutral description of one completion call. Adapters translate
//! this into their wire format.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Sender of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One buffered (non-streaming) completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    /// Ask the provider for its JSON-object response mode
    pub json_mode: bool,
}

impl CompletionRequest {
    /// The fixed system + user conversation used for structured replies.
    pub fn structured(
        model: Model,
        system_prompt: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            model,
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(prompt)],
            temperature,
            json_mode: true,
        }
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    /// Content of the last user message
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}
