//! Form state and the single trigger path

use serde::Serialize;
use tracing::debug;

use senti_core::{
    AnalysisError, AnalysisResult, CompletionService, MaxTokens, SentimentAnalyzer, Temperature,
};

/// Current values of the form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub text: String,
    pub temperature: Temperature,
    pub max_tokens: MaxTokens,
}

/// What the result panel should show after a trigger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome {
    /// Input was blank; nothing was sent
    Warning(String),
    Analysis(AnalysisResult),
    /// The service call failed; the session stays usable
    Failure(String),
}

/// One interactive session. Values are independent per session.
#[derive(Debug, Default)]
pub struct Session {
    pub form: FormState,
}

impl Session {
    pub fn new(temperature: Temperature, max_tokens: MaxTokens) -> Self {
        Self {
            form: FormState {
                text: String::new(),
                temperature,
                max_tokens,
            },
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.form.text = text.into();
    }

    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.form.temperature = temperature;
    }

    pub fn set_max_tokens(&mut self, max_tokens: MaxTokens) {
        self.form.max_tokens = max_tokens;
    }

    /// Analyze the current form values. Never returns an error.
    pub async fn submit<S: CompletionService>(&self, analyzer: &SentimentAnalyzer<S>) -> Outcome {
        let result = analyzer
            .analyze_text(&self.form.text, self.form.temperature, self.form.max_tokens)
            .await;

        match result {
            Ok(result) => Outcome::Analysis(result),
            Err(e @ AnalysisError::EmptyInput) => Outcome::Warning(e.to_string()),
            Err(AnalysisError::Failed(source)) => {
                debug!(error = ?source, "showing failure in result panel");
                Outcome::Failure(format!("Analysis failed: {}", source))
            }
        }
    }
}
