//! Blocking HTTP client for an OpenAI-style chat-completions endpoint.

use crate::model::{ChatCompletionResponse, ChatModel, ChatRequest};
use deck_core::{Config, Error, Result};
use reqwest::blocking::Client;

/// Chat model backed by the Perplexity API.
pub struct PerplexityClient {
    http: Client,
    api_key: String,
    url: String,
}

impl PerplexityClient {
    /// Create a client from validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key.clone(),
            url: config.chat_completions_url(),
        }
    }
}

impl ChatModel for PerplexityClient {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        log::debug!(
            "POST {} (model {}, {} messages)",
            self.url,
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| Error::HttpError(format!("Request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::HttpError(format!("{} returned {}: {}", self.url, status, body)));
        }

        let body: ChatCompletionResponse = response
            .json()
            .map_err(|e| Error::HttpError(format!("Invalid response body: {}", e)))?;

        body.into_content()
            .ok_or_else(|| Error::PipelineError("Model returned no choices".to_string()))
    }
}
