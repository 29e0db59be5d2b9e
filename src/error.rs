use thiserror::Error;

use crate::llm::ProviderError;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat completion failed: {0}")] Provider(#[from] ProviderError),
}

#[derive(Debug, Error)]
pub enum InvitationError {
    #[error("failed to parse extracted conversation data: {0}")] Extraction(String),
    #[error("invitation provider call failed: {0}")] Provider(#[from] ProviderError),
}
