//! Grooming Service - messy backlog notes in, structured backlog items out
//!
//! Each call to [`GroomingService::groom`] issues exactly one completion
//! request. There is no retry: an upstream failure fails the whole call.

use std::sync::Arc;

use crate::application::ports::outbound::{ChatMessage, LlmError, LlmPort, LlmRequest};
use crate::application::services::llm::{prompt_builder, response_normalizer};
use crate::domain::entities::BacklogItem;

/// Sampling temperature used when none is configured
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Service for grooming backlog text into items
#[derive(Clone)]
pub struct GroomingService {
    llm: Arc<dyn LlmPort>,
    temperature: f32,
}

impl GroomingService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self {
            llm,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Groom raw backlog text into structured items
    pub async fn groom(&self, backlog_text: &str) -> Result<Vec<BacklogItem>, GroomingError> {
        let request = LlmRequest::new(vec![ChatMessage::user(
            prompt_builder::build_grooming_prompt(backlog_text),
        )])
        .with_system_prompt(prompt_builder::build_system_prompt())
        .with_temperature(self.temperature)
        .with_json_response();

        let response = self.llm.generate(request).await?;
        tracing::debug!(
            "Completion received from {} ({} tokens)",
            response.model,
            response.tokens_used
        );

        response_normalizer::normalize(&response.content)
    }
}

/// Errors that can occur while grooming
#[derive(Debug, thiserror::Error)]
pub enum GroomingError {
    /// The completion call itself failed
    #[error(transparent)]
    Upstream(#[from] LlmError),
    /// The completion did not contain a usable item list
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{LlmResponse, MessageRole, ResponseFormat};
    use std::sync::Mutex;

    /// Mock LLM that records every request and replays a canned result
    struct MockLlm {
        reply: Result<String, u16>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl MockLlm {
        fn replying(content: &str) -> Self {
            Self {
                reply: Ok(content.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl LlmPort for MockLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(content) => Ok(LlmResponse {
                    content: content.clone(),
                    model: "mock".to_string(),
                    tokens_used: 0,
                }),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "rate limited".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_groom_sends_one_json_request() {
        let llm = Arc::new(MockLlm::replying(r#"{"items":[{"title":"A"},{"title":"B"}]}"#));
        let service = GroomingService::new(llm.clone()).with_temperature(0.1);

        let items = service.groom("fix a; build b").await.unwrap();
        assert_eq!(items.len(), 2);

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.response_format, ResponseFormat::JsonObject);
        assert_eq!(request.temperature, Some(0.1));
        assert!(request.system_prompt.is_some());
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert!(request.messages[0].content.contains("fix a; build b"));
    }

    #[tokio::test]
    async fn test_groom_propagates_upstream_error() {
        let service = GroomingService::new(Arc::new(MockLlm::failing(429)));

        let err = service.groom("anything").await.unwrap_err();
        assert!(matches!(err, GroomingError::Upstream(LlmError::Api { status: 429, .. })));
        assert!(err.to_string().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_groom_rejects_malformed_completion() {
        let service = GroomingService::new(Arc::new(MockLlm::replying("not json")));

        let err = service.groom("anything").await.unwrap_err();
        assert!(matches!(err, GroomingError::MalformedResponse(_)));
    }
}
