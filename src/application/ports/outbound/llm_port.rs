//! LLM port - chat-completion interface used by the grooming flow

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Output format hint passed to the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// Forces the completion to be a single JSON object
    JsonObject,
}

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            response_format: ResponseFormat::Text,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_json_response(mut self) -> Self {
        self.response_format = ResponseFormat::JsonObject;
        self
    }
}

/// Raw text completion returned by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
    pub tokens_used: u32,
}

/// Errors raised while talking to the upstream model provider
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport-level failure (connect, TLS, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// Provider answered 200 but without a usable completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for chat-completion providers
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Issue exactly one completion request and return the raw text
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}
