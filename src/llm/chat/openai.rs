use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };

use super::{ ChatClient, CompletionRequest, CompletionResponse };
use crate::llm::{ check_status, LlmConfig, ProviderError };
use crate::models::chat::ChatMessage;

const CHAT_COMPLETIONS_ROUTE: &str = "/v1/chat/completions";

pub struct OpenAIChatClient {
    http: HttpClient,
    url: String,
}

#[derive(Serialize)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

pub(crate) fn build_http_client(api_key: &str) -> Result<HttpClient, ProviderError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e|
            ProviderError::Provider(format!("Invalid API key format: {}", e))
        )?
    );
    Ok(HttpClient::builder().default_headers(headers).build()?)
}

impl OpenAIChatClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, ProviderError> {
        let api_key = config.api_key.as_deref().unwrap_or_default();
        Ok(Self {
            http: build_http_client(api_key)?,
            url: config.endpoint(CHAT_COMPLETIONS_ROUTE),
        })
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionResponse, ProviderError> {
        let req = OpenAIChatRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };
        debug!("POST {} (model={}, messages={})", self.url, request.model, request.messages.len());

        let resp = self.http.post(&self.url).json(&req).send().await?;
        let resp = check_status(resp).await?.json::<OpenAIResponse>().await?;

        let content = resp.choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Provider("No response from OpenAI API".to_string()))?
            .message.content
            .ok_or(ProviderError::Empty)?;

        Ok(CompletionResponse { response: content })
    }
}
