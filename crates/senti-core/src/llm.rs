//! Completion service trait and parameters

use async_trait::async_trait;
use serde::Serialize;

use super::types::{MaxTokens, Temperature};
use super::Result;

/// Sampling parameters forwarded with every instruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CompletionParams {
    pub temperature: Temperature,
    pub max_tokens: MaxTokens,
}

/// A hosted text-completion endpoint (e.g. OpenAI completions).
///
/// Implementations perform exactly one outbound call per `complete` and do not
/// retry. Test doubles implement this to stand in for the network client.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send an instruction and return the generated text
    async fn complete(&self, instruction: &str, params: &CompletionParams) -> Result<String>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

