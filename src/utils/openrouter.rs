//! Client for the OpenRouter chat-completion endpoint.
//!
//! Every failure is logged here and handed back as a [`CompletionError`]
//! value, so callers only ever see a [`CompletionResult`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;

/// Model every command is answered with.
pub const MODEL: &str = "gryphe/mythomist-7b:free";
/// Base URL of the OpenRouter API.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Reasons a completion could not be obtained.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Error during HTTP request communication.
    #[error("API communication failure: {0}")]
    Api(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("API call failed with status code {0}")]
    Status(StatusCode),

    /// Error parsing the JSON response from the API.
    #[error("Unable to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response held no choices, or the first choice had no text.
    #[error("No completion returned")]
    Empty,

    /// `OPENROUTER_API_KEY` was not configured.
    #[error("No OpenRouter API key configured")]
    MissingApiKey,
}

/// Either the completion text or the reason there is none.
pub type CompletionResult = Result<String, CompletionError>;

/// Something that can turn a prompt into completion text.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Makes exactly one completion attempt for `prompt` with `model`.
    async fn complete(&self, model: &str, prompt: &str) -> CompletionResult;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Pulls `choices[0].message.content` out of a completion response body.
pub fn extract_content(body: &str) -> CompletionResult {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(CompletionError::Empty)
}

/// Completion client bound to one endpoint and credential.
pub struct OpenRouterClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenRouterClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        debug!("Creating OpenRouter client for {}", endpoint);

        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.openrouter_base_url,
            config.openrouter_api_key.clone(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, model: &str, prompt: &str) -> CompletionResult {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status));
        }

        let text = response.text().await?;
        extract_content(&text)
    }
}

#[async_trait]
impl Completer for OpenRouterClient {
    async fn complete(&self, model: &str, prompt: &str) -> CompletionResult {
        info!("Sending completion request to {} with model {}", self.endpoint, model);

        match self.send(model, prompt).await {
            Ok(content) => {
                debug!("Received completion of {} characters", content.chars().count());
                Ok(content)
            }
            Err(e) => {
                error!("Completion request failed: {}", e);
                Err(e)
            }
        }
    }
}
