use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };

use super::{ ImageClient, ImageRequest };
use crate::llm::chat::openai::build_http_client;
use crate::llm::{ check_status, LlmConfig, ProviderError };

const IMAGE_GENERATIONS_ROUTE: &str = "/v1/images/generations";

pub struct OpenAIImageClient {
    http: HttpClient,
    url: String,
}

#[derive(Serialize)]
struct OpenAIImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
}

#[derive(Deserialize)]
struct OpenAIImageResponse {
    data: Vec<OpenAIImageData>,
}

#[derive(Deserialize)]
struct OpenAIImageData {
    url: Option<String>,
}

impl OpenAIImageClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, ProviderError> {
        let api_key = config.api_key.as_deref().unwrap_or_default();
        Ok(Self {
            http: build_http_client(api_key)?,
            url: config.endpoint(IMAGE_GENERATIONS_ROUTE),
        })
    }
}

#[async_trait]
impl ImageClient for OpenAIImageClient {
    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<String>, ProviderError> {
        let req = OpenAIImageRequest {
            model: &request.model,
            prompt: &request.prompt,
            n: request.count,
            size: &request.size,
            quality: &request.quality,
        };
        debug!("POST {} (model={}, n={})", self.url, request.model, request.count);

        let resp = self.http.post(&self.url).json(&req).send().await?;
        let resp = check_status(resp).await?.json::<OpenAIImageResponse>().await?;

        let urls: Vec<String> = resp.data
            .into_iter()
            .filter_map(|d| d.url)
            .collect();
        if urls.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_keeps_only_url_entries() {
        let body = r#"{"created":1,"data":[{"url":"https://a","revised_prompt":"x"},{"b64_json":"zz"}]}"#;
        let resp: OpenAIImageResponse = serde_json::from_str(body).unwrap();
        let urls: Vec<String> = resp.data.into_iter().filter_map(|d| d.url).collect();
        assert_eq!(urls, vec!["https://a".to_string()]);
    }
}
