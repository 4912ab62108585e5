//! Sentiment analyzer that delegates to a completion service

use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::llm::{CompletionParams, CompletionService};
use crate::prompt::build_instruction;
use crate::types::{AnalysisRequest, AnalysisResult, MaxTokens, Temperature};

/// Turns user text into one completion request and returns the raw answer
pub struct SentimentAnalyzer<S: CompletionService> {
    service: S,
}

impl<S: CompletionService> SentimentAnalyzer<S> {
    /// Create a new analyzer over the given completion service
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Validate the form values and analyze them.
    ///
    /// Blank text returns `EmptyInput` without touching the service.
    pub async fn analyze_text(
        &self,
        text: &str,
        temperature: Temperature,
        max_tokens: MaxTokens,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest::new(text, temperature, max_tokens)?;
        self.analyze(&request).await
    }

    /// Run a single analysis. Service errors are not retried.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let instruction = build_instruction(request.text());
        let params = CompletionParams {
            temperature: request.temperature(),
            max_tokens: request.max_tokens(),
        };

        debug!(
            model = self.service.model_id(),
            temperature = params.temperature.value(),
            max_tokens = params.max_tokens.value(),
            chars = request.text().chars().count(),
            "dispatching sentiment analysis"
        );

        match self.service.complete(&instruction, &params).await {
            Ok(body) => {
                info!(model = self.service.model_id(), chars = body.len(), "analysis completed");
                Ok(AnalysisResult { body })
            }
            Err(e) => {
                warn!(model = self.service.model_id(), error = %e, "analysis failed");
                Err(AnalysisError::Failed(e))
            }
        }
    }

    /// Get the model ID of the underlying service
    pub fn model_id(&self) -> &str {
        self.service.model_id()
    }
}
