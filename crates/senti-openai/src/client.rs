//! OpenAI completions client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use senti_core::{CompletionParams, CompletionService, Error, Result};

use crate::config::OpenAiConfig;

/// OpenAI completions client
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/completions", self.config.api_url)
    }

    /// Map a non-success response to an error, preferring the API's own message
    fn status_error(status: StatusCode, body: &str) -> Error {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body.trim().to_string()
                }
            });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication(message),
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(message),
            _ => Error::Service {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, instruction: &str, params: &CompletionParams) -> Result<String> {
        let api_key = self.config.require_api_key()?;

        let request_body = CompletionRequest {
            model: &self.config.model,
            prompt: instruction,
            temperature: params.temperature.value(),
            max_tokens: params.max_tokens.value(),
        };

        let url = self.completions_url();
        debug!(%url, model = %self.config.model, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion request rejected");
            return Err(Self::status_error(status, &response_text));
        }

        let data: CompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        // Returned verbatim; only a missing or zero-length text counts as no answer
        match data.choices.into_iter().next() {
            Some(choice) if !choice.text.is_empty() => Ok(choice.text),
            _ => Err(Error::EmptyResponse),
        }
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
