//! OpenAI-compatible chat-completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    ChatMessage, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, ResponseFormat,
};
use crate::infrastructure::config::AppConfig;

/// Client for the `/chat/completions` endpoint
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.openai_base_url,
            &config.openai_api_key,
            &config.openai_model,
        )
    }

    fn build_body(&self, request: LlmRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system_prompt) = request.system_prompt {
            messages.push(ChatMessage {
                role: MessageRole::System,
                content: system_prompt,
            });
        }
        messages.extend(request.messages);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature,
            response_format: match request.response_format {
                ResponseFormat::JsonObject => Some(WireResponseFormat {
                    format_type: "json_object",
                }),
                ResponseFormat::Text => None,
            },
        }
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = self.build_body(request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_error_message(&error_text),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("completion has no content".to_string()))?;

        Ok(LlmResponse {
            content,
            model: completion.model.unwrap_or_else(|| self.model.clone()),
            tokens_used: completion.usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }
}

/// Pull `error.message` out of a provider error body, falling back to the raw text
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn grooming_request() -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user("groom this")])
            .with_system_prompt("be a PM")
            .with_temperature(0.3)
            .with_json_response()
    }

    #[tokio::test]
    async fn test_generate_returns_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .body_contains("\"response_format\":{\"type\":\"json_object\"}")
                    .body_contains("\"model\":\"gpt-4.1-mini\"")
                    .body_contains("\"role\":\"system\"");
                then.status(200).json_body(json!({
                    "model": "gpt-4.1-mini-2025-04-14",
                    "choices": [{"message": {"role": "assistant", "content": "{\"items\":[]}"}}],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
                }));
            })
            .await;

        let client = OpenAiClient::new(&server.base_url(), "sk-test", "gpt-4.1-mini");
        let response = client.generate(grooming_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "{\"items\":[]}");
        assert_eq!(response.model, "gpt-4.1-mini-2025-04-14");
        assert_eq!(response.tokens_used, 15);
    }

    #[tokio::test]
    async fn test_generate_maps_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401).json_body(json!({
                    "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
                }));
            })
            .await;

        let client = OpenAiClient::new(&server.base_url(), "sk-wrong", "gpt-4.1-mini");
        let err = client.generate(grooming_request()).await.unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_without_choices_is_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({ "choices": [] }));
            })
            .await;

        let client = OpenAiClient::new(&server.base_url(), "sk-test", "gpt-4.1-mini");
        let err = client.generate(grooming_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        // Nothing listens on port 9 locally
        let client = OpenAiClient::new("http://127.0.0.1:9", "sk-test", "gpt-4.1-mini");
        let err = client.generate(grooming_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }

    #[test]
    fn test_text_requests_omit_response_format() {
        let client = OpenAiClient::new("http://localhost/v1/", "sk-test", "gpt-4.1-mini");
        let body = client.build_body(LlmRequest::new(vec![ChatMessage::user("hi")]));
        let value = serde_json::to_value(&body).unwrap();

        assert!(value.get("response_format").is_none());
        assert!(value.get("temperature").is_none());
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(client.base_url, "http://localhost/v1");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_text() {
        assert_eq!(extract_error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
