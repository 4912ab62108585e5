//! OpenAI configuration

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;

use senti_core::{Error, Result};
use tracing::warn;

/// Configuration for the OpenAI completion client.
///
/// Built once at startup and handed to `OpenAiClient::new`; nothing reads the
/// environment after that. A missing key is kept as `None` so the form stays
/// usable and each analysis reports the authentication failure.
#[derive(Clone, Serialize)]
pub struct OpenAiConfig {
    #[serde(serialize_with = "redact")]
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl OpenAiConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo-instruct";
    pub const API_KEY_VAR: &'static str = "OPENAI_API_KEY";

    /// Create configuration from the process environment, loading `.env` first
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from a specific settings file.
    ///
    /// Variables already present in the process environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path).map_err(|e| {
            Error::Configuration(format!("cannot read settings file {}: {}", path.display(), e))
        })?;

        let mut file_vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                Error::Configuration(format!("invalid settings file {}: {}", path.display(), e))
            })?;
            file_vars.insert(key, value);
        }

        Ok(Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(Self::API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if api_key.is_none() {
            warn!("{} is not set; analyses will fail until it is", Self::API_KEY_VAR);
        }

        Self {
            api_key,
            ..Self::new("")
        }
    }

    /// Create configuration with an explicit key and default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_url: Self::DEFAULT_API_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the client at a different base URL (no trailing slash needed)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the completion model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The key, or the authentication error a request without one gets
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Authentication(format!("{} environment variable not found", Self::API_KEY_VAR))
        })
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

fn redact<S: Serializer>(
    api_key: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match api_key {
        Some(_) => serializer.serialize_some("[redacted]"),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const API_KEY_VAR: &str = OpenAiConfig::API_KEY_VAR;

    #[test]
    fn test_lookup_reads_api_key() {
        let vars = HashMap::from([(API_KEY_VAR, "sk-test")]);
        let config = OpenAiConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.api_url, OpenAiConfig::DEFAULT_API_URL);
        assert_eq!(config.model, OpenAiConfig::DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_or_blank_key_is_kept_as_none() {
        let missing = OpenAiConfig::from_lookup(|_| None);
        assert!(missing.api_key.is_none());

        let blank = OpenAiConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(blank.api_key.is_none());
    }

    #[test]
    fn test_require_api_key_without_key_is_authentication_error() {
        let config = OpenAiConfig::from_lookup(|_| None);
        assert!(matches!(config.require_api_key(), Err(Error::Authentication(_))));

        let config = OpenAiConfig::new("sk-test");
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn test_debug_hides_key() {
        let config = OpenAiConfig::new("sk-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("[redacted]"));
    }

    #[test]
    fn test_settings_file_missing_is_configuration_error() {
        let err = OpenAiConfig::from_env_file("/definitely/not/here/.env").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_settings_file_provides_key() {
        if env::var(API_KEY_VAR).is_ok() {
            // The process environment takes precedence; nothing to check here.
            return;
        }
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# local settings").unwrap();
        writeln!(file, "{}=sk-from-file", API_KEY_VAR).unwrap();

        let config = OpenAiConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-from-file"));
    }

    #[test]
    fn test_with_api_url_trims_trailing_slash() {
        let config = OpenAiConfig::new("k").with_api_url("http://localhost:1234/");
        assert_eq!(config.api_url, "http://localhost:1234");
    }
}
