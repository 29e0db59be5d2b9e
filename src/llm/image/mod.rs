pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;

use super::{ LlmConfig, ProviderError };
use self::openai::OpenAIImageClient;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub count: u32,
    pub size: String,
    pub quality: String,
}

#[async_trait]
pub trait ImageClient: Send + Sync {
    /// Returns one URL per generated image.
    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<String>, ProviderError>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ImageClient>, ProviderError> {
    let client = OpenAIImageClient::from_config(config)?;
    Ok(Arc::new(client))
}
