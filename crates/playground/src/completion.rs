use crate::prelude::*;
use async_trait::async_trait;
use playground_core::chat::{api_error_message, first_choice_content, ChatRequest, ChatResponse};

/// A hosted chat-completion endpoint.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send one request and return the text of the first choice.
    async fn complete(&self, request: &ChatRequest) -> std::result::Result<String, Error>;
}

/// Client for Groq's OpenAI-compatible chat completion API.
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(global.base_url.clone(), global.api_key.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(&self, request: &ChatRequest) -> std::result::Result<String, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        log::debug!(
            "POST {} model={} messages={}",
            self.endpoint(),
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body).unwrap_or(body),
            });
        }

        let payload = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        first_choice_content(payload).map_err(Error::InvalidResponse)
    }
}
