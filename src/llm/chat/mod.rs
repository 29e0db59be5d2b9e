pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;

use super::{ LlmConfig, ProviderError };
use self::openai::OpenAIChatClient;
use crate::models::chat::ChatMessage;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionResponse, ProviderError>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, ProviderError> {
    let client = OpenAIChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
