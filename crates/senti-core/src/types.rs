//! Value objects shared across the workspace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{AnalysisError, Error, Result};

/// Sampling temperature accepted by the completion service.
///
/// Only values in `0.0..=1.0` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.7;
    /// Increment used by the options controls
    pub const STEP: f32 = 0.1;

    pub fn new(value: f32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidInput(format!(
                "temperature must be between {:.1} and {:.1}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f32> for Temperature {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl FromStr for Temperature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a number", s.trim())))?;
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Upper bound on generated tokens, limited to `50..=500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxTokens(u32);

impl MaxTokens {
    pub const RANGE: RangeInclusive<u32> = 50..=500;
    pub const DEFAULT: u32 = 200;
    pub const STEP: u32 = 50;

    pub fn new(value: u32) -> Result<Self> {
        if !Self::RANGE.contains(&value) {
            return Err(Error::InvalidInput(format!(
                "max tokens must be between {} and {}, got {}",
                Self::RANGE.start(),
                Self::RANGE.end(),
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for MaxTokens {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for MaxTokens {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MaxTokens> for u32 {
    fn from(m: MaxTokens) -> Self {
        m.0
    }
}

impl FromStr for MaxTokens {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a whole number", s.trim())))?;
        Self::new(value)
    }
}

impl fmt::Display for MaxTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One analysis, created per trigger and dropped once rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    text: String,
    temperature: Temperature,
    max_tokens: MaxTokens,
}

impl AnalysisRequest {
    /// Fails with `EmptyInput` when the text is blank after trimming.
    pub fn new(
        text: impl Into<String>,
        temperature: Temperature,
        max_tokens: MaxTokens,
    ) -> std::result::Result<Self, AnalysisError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self {
            text,
            temperature,
            max_tokens,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn max_tokens(&self) -> MaxTokens {
        self.max_tokens
    }
}

/// Raw text returned by the completion service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bounds() {
        assert_eq!(Temperature::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Temperature::new(1.0).unwrap().value(), 1.0);
        assert!(Temperature::new(-0.1).is_err());
        assert!(Temperature::new(1.01).is_err());
        assert!(Temperature::new(f32::NAN).is_err());
    }

    #[test]
    fn test_max_tokens_bounds() {
        assert_eq!(MaxTokens::new(50).unwrap().value(), 50);
        assert_eq!(MaxTokens::new(500).unwrap().value(), 500);
        assert!(MaxTokens::new(49).is_err());
        assert!(MaxTokens::new(501).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Temperature::default().value(), 0.7);
        assert_eq!(MaxTokens::default().value(), 200);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("0.3".parse::<Temperature>().unwrap().value(), 0.3);
        assert!("warm".parse::<Temperature>().is_err());
        assert!("2".parse::<Temperature>().is_err());
        assert_eq!(" 250 ".parse::<MaxTokens>().unwrap().value(), 250);
        assert!("-5".parse::<MaxTokens>().is_err());
        assert!("1000".parse::<MaxTokens>().is_err());
    }

    #[test]
    fn test_request_rejects_blank_text() {
        for text in ["", "   ", "\n\t "] {
            let err = AnalysisRequest::new(text, Temperature::default(), MaxTokens::default())
                .unwrap_err();
            assert!(matches!(err, AnalysisError::EmptyInput));
        }
    }

    #[test]
    fn test_request_keeps_text_untrimmed() {
        let request =
            AnalysisRequest::new("  fine  ", Temperature::default(), MaxTokens::default()).unwrap();
        assert_eq!(request.text(), "  fine  ");
    }
}
