//! Core traits and types for Senti (interactive sentiment analysis)
//!
//! This crate defines the value objects, the prompt template and the
//! capability-facing `CompletionService` trait. The `SentimentAnalyzer` is the
//! only piece of business logic: it turns user text into a single completion
//! request and hands back whatever the service returns.

pub mod analyzer;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod types;


pub use analyzer::SentimentAnalyzer;
pub use error::{AnalysisError, Error, Result};
pub use llm::{CompletionParams, CompletionService};
pub use prompt::{build_instruction, SENTIMENT_TEMPLATE};
pub use types::*;
