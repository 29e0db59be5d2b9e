pub mod chat;
pub mod image;
#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http: {0}")] Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")] Status {
        status: u16,
        body: String,
    },
    #[error("provider: {0}")] Provider(String),
    #[error("empty response")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
        }
    }
}

impl LlmConfig {
    pub fn endpoint(&self, route: &str) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL);
        format!("{}{}", base.trim_end_matches('/'), route)
    }
}

pub(crate) async fn check_status(
    resp: reqwest::Response
) -> Result<reqwest::Response, ProviderError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ProviderError::Status { status: status.as_u16(), body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = LlmConfig {
            api_key: None,
            base_url: Some("http://localhost:8080/".into()),
        };
        assert_eq!(config.endpoint("/v1/chat/completions"), "http://localhost:8080/v1/chat/completions");
        assert_eq!(
            LlmConfig::default().endpoint("/v1/images/generations"),
            "https://api.openai.com/v1/images/generations"
        );
    }
}
