//! Client for an OpenAI-compatible chat completions endpoint (Groq by
//! default).
//!
//! Requests carry a per-request timeout from [`LlmConfig`]. Failures are
//! returned to the caller as they happen. Only when `retries` is configured
//! are timeouts, transport failures and `5xx`/`429` answers attempted again.

use super::Generator;
use crate::libs::config::{Config, LlmConfig, API_KEY_ENV};
use crate::libs::error::GenerationError;
use crate::libs::messages::Message;
use crate::msg_debug;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Chat completions client. A missing API key or endpoint is reported as
/// [`GenerationError::NotConfigured`] when a message is requested, not when
/// the client is built.
#[derive(Debug)]
pub struct Groq {
    client: Client,
    config: LlmConfig,
    api_key: Option<String>,
}

impl Groq {
    pub fn new(config: &LlmConfig, api_key: Option<String>) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Groq {
            client,
            config: config.clone(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Builds a client with the API key taken from the environment.
    pub fn from_env(config: &LlmConfig) -> Result<Self, GenerationError> {
        Self::new(config, Config::api_key())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && !self.config.api_url.trim().is_empty()
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::NotConfigured(format!("{} is not set", API_KEY_ENV)))?;
        if self.config.api_url.trim().is_empty() {
            return Err(GenerationError::NotConfigured("completion API URL is empty".to_string()));
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| self.transport_error(e))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }

    fn transport_error(&self, error: reqwest::Error) -> GenerationError {
        if error.is_timeout() {
            GenerationError::Timeout(self.config.timeout_secs)
        } else {
            GenerationError::Transport(error)
        }
    }
}

impl Generator for Groq {
    async fn generate(&self, system_instruction: &str, user_text: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatRequestMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: self.config.temperature,
        };

        let max_attempts = 1 + self.config.retries;
        let mut attempt = 1;
        loop {
            match self.send(&request).await {
                Err(e) if attempt < max_attempts && is_retryable(&e) => {
                    tracing::warn!(error = %e, attempt, "completion request failed");
                    attempt += 1;
                    msg_debug!(Message::RetryingGeneration(attempt));
                }
                result => return result,
            }
        }
    }
}

fn is_retryable(error: &GenerationError) -> bool {
    match error {
        GenerationError::Timeout(_) | GenerationError::Transport(_) => true,
        GenerationError::Api { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
        }
        GenerationError::NotConfigured(_) | GenerationError::EmptyResponse => false,
    }
}
