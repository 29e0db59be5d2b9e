//! Scripted provider doubles.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::chat::{ ChatClient, CompletionRequest, CompletionResponse };
use super::image::{ ImageClient, ImageRequest };
use super::ProviderError;

#[derive(Default)]
pub struct ScriptedChatClient {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedChatClient {
    pub fn new<I, S>(replies: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        let client = Self::default();
        for reply in replies {
            client.push(Ok(reply.into()));
        }
        client
    }

    pub fn push(&self, reply: Result<String, ProviderError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn complete(
        &self,
        request: &CompletionRequest
    ) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Provider("no scripted reply".into())));
        reply.map(|response| CompletionResponse { response })
    }
}

#[derive(Default)]
pub struct ScriptedImageClient {
    urls: Vec<String>,
    fail: bool,
    requests: Mutex<Vec<ImageRequest>>,
}

impl ScriptedImageClient {
    pub fn with_url(url: &str) -> Self {
        Self { urls: vec![url.to_string()], ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageClient for ScriptedImageClient {
    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<String>, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ProviderError::Status { status: 429, body: "quota exceeded".into() });
        }
        Ok(self.urls.clone())
    }
}
