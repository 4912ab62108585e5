//! OpenAI integration for Senti
//!
//! This crate provides the OpenAI completions implementation of the
//! `CompletionService` trait.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use senti_core::{CompletionParams, CompletionService, Error, Result};
