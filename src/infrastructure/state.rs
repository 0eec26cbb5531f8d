//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::LlmPort;
use crate::application::services::GroomingService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;

/// Shared application state
///
/// Immutable after startup; handlers only read from it.
pub struct AppState {
    pub grooming_service: GroomingService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        // Initialize chat-completion client
        let llm_client = Arc::new(OpenAiClient::from_config(config));
        Self::with_llm(config, llm_client)
    }

    /// Build state around an already-constructed LLM client
    pub fn with_llm(config: &AppConfig, llm_client: Arc<dyn LlmPort>) -> Self {
        Self {
            grooming_service: GroomingService::new(llm_client)
                .with_temperature(config.openai_temperature),
        }
    }
}
