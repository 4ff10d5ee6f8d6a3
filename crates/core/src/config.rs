//! Runtime configuration loaded from the environment.

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "PERPLEXITY_API_KEY";
/// Optional override for the API base URL.
pub const API_BASE_VAR: &str = "PERPLEXITY_API_BASE";
/// Optional override for the model name.
pub const MODEL_VAR: &str = "PERPLEXITY_MODEL";

pub const DEFAULT_API_BASE: &str = "https://api.perplexity.ai";
pub const DEFAULT_MODEL: &str = "sonar";

/// Settings shared by every stage of a run.
///
/// Built once at startup and passed by reference.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Fails when the credential is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::ConfigurationError(format!("{} not found in environment variables", API_KEY_VAR))
            })?;

        let api_base = lookup(API_BASE_VAR)
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model = lookup(MODEL_VAR)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(Error::ConfigurationError(format!(
                "{} must be an http(s) URL, got '{}'",
                API_BASE_VAR, api_base
            )));
        }

        Ok(Self {
            api_key,
            api_base,
            model,
        })
    }

    /// Endpoint for chat completions.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "pplx-test")])).unwrap();

        assert_eq!(config.api_key, "pplx-test");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(
            config.chat_completions_url(),
            "https://api.perplexity.ai/chat/completions"
        );
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "k"),
            (API_BASE_VAR, "http://localhost:8080/v1/"),
            (MODEL_VAR, "sonar-pro"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.model, "sonar-pro");
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (API_BASE_VAR, "ftp://x")]))
            .unwrap_err();
        assert!(err.to_string().contains(API_BASE_VAR));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "super-secret")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
