// OpenAI chat-completions provider
//
// Works against api.openai.com and any server exposing the same
// `/v1/chat/completions` route. One request per call, no retry.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{CompletionRequest, CompletionResponse, Message};
use super::LlmProvider;
use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::config::Config;

/// OpenAI API provider
#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl OpenAIProvider {
    /// Create a provider for api.openai.com with the default model
    pub fn new_openai(api_key: String) -> Result<Self> {
        Self::new(api_key, DEFAULT_BASE_URL.to_string(), None)
    }

    /// Create a provider from loaded configuration (requires an API key)
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        Ok(Self::new(api_key, config.base_url.clone(), timeout)?.with_model(config.model.clone()))
    }

    /// Set custom model for this provider
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Create a provider with custom settings
    pub fn new(api_key: String, base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Convert CompletionRequest to OpenAI API format
    fn to_openai_request<'a>(&'a self, request: &'a CompletionRequest) -> OpenAIRequest<'a> {
        let model = if request.model.is_empty() {
            self.default_model.as_str()
        } else {
            request.model.as_str()
        };

        OpenAIRequest {
            model,
            messages: &request.messages,
        }
    }

    /// Convert OpenAI response to CompletionResponse
    fn from_openai_response(&self, response: OpenAIResponse) -> Result<CompletionResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .context("OpenAI returned no choices in response")?;

        Ok(CompletionResponse {
            id: response.id,
            model: response.model,
            text: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason,
            provider: self.name().to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let openai_request = self.to_openai_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::info!(
            model = openai_request.model,
            prompt_chars = request.messages.iter().map(|m| m.content.chars().count()).sum::<usize>(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "OpenAI API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI API response")?;

        tracing::debug!(id = %openai_response.id, choices = openai_response.choices.len(), "Received response");

        self.from_openai_response(openai_response)
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}
