// src/config.rs

use lazy_static::lazy_static;
use std::time::Duration;
use url::Url;

lazy_static! {
    static ref ENV_PREFIX: String = env!("CARGO_CRATE_NAME").to_uppercase();
}

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set; export it before starting the checker")]
    MissingApiKey,

    #[error("invalid value {value:?} for {name}")]
    InvalidNumber { name: String, value: String },

    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime settings for the Gemini analysis client.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub api_base: Url,
    pub timeout: Duration,
    pub temperature: f32,
}

impl Settings {
    /// Builds the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the settings from an arbitrary variable lookup. Unset or blank
    /// variables fall back to their defaults; only the API key is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| -> (String, Option<String>) {
            let name = format!("{}_{}", ENV_PREFIX.as_str(), suffix);
            let value = lookup(&name).filter(|v| !v.trim().is_empty());
            (name, value)
        };

        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = var("MODEL").1.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_raw = var("API_BASE").1.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(base_raw.trim_end_matches('/')).map_err(|source| {
            ConfigError::InvalidBaseUrl { value: base_raw.clone(), source }
        })?;

        let timeout = match var("TIMEOUT_SECS") {
            (name, Some(value)) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidNumber { name, value })?,
            (_, None) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let temperature = match var("TEMPERATURE") {
            (name, Some(value)) => value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|t| (0.0..=2.0).contains(t))
                .ok_or(ConfigError::InvalidNumber { name, value })?,
            (_, None) => DEFAULT_TEMPERATURE,
        };

        Ok(Self { api_key, model, api_base, timeout, temperature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_ENV, "abc")])).unwrap();
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(settings.api_base.as_str(), DEFAULT_API_BASE);
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[(API_KEY_ENV, "   ")])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn overrides_are_read_with_the_crate_prefix() {
        let settings = Settings::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            ("ORIGINALITY_RS_CHECKER_MODEL", "gemini-2.5-pro"),
            ("ORIGINALITY_RS_CHECKER_TIMEOUT_SECS", "15"),
            ("ORIGINALITY_RS_CHECKER_API_BASE", "http://localhost:8080/models/"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gemini-2.5-pro");
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert_eq!(settings.api_base.as_str(), "http://localhost:8080/models");
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Settings::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            ("ORIGINALITY_RS_CHECKER_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = Settings::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            ("ORIGINALITY_RS_CHECKER_TEMPERATURE", "7"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
