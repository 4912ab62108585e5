//! Error types for Senti

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or talking to the completion service
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Completion service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Empty response from completion service")]
    EmptyResponse,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two kinds of failure a user can see.
///
/// Everything that goes wrong on the service side collapses into `Failed`;
/// the source is kept for logging but callers are not expected to branch on it.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Please enter some text to analyze.")]
    EmptyInput,

    #[error("analysis failed: {0}")]
    Failed(#[source] Error),
}

