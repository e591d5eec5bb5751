//! Environment-sourced configuration
//!
//! The catalog API key is an external secret and must never live in the
//! source tree or the binary. It is read from the environment at startup,
//! before the TUI takes over the terminal, so a missing key fails fast with
//! an actionable message on stderr.

use thiserror::Error;

/// Environment variable holding the RapidAPI key (required).
pub const API_KEY_VAR: &str = "SONGSEARCH_API_KEY";
/// Environment variable overriding the catalog API host (optional).
pub const API_HOST_VAR: &str = "SONGSEARCH_API_HOST";
/// Environment variable controlling whether a new search clears the
/// previously displayed results immediately (optional, default false).
pub const CLEAR_ON_SEARCH_VAR: &str = "SONGSEARCH_CLEAR_ON_SEARCH";

const DEFAULT_API_HOST: &str = "spotify23.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{API_KEY_VAR} is not set. Export your RapidAPI key before starting.")]
    MissingApiKey,
    #[error("{API_KEY_VAR} is set but blank.")]
    BlankApiKey,
    #[error("{CLEAR_ON_SEARCH_VAR} must be 'true' or 'false', got '{0}'.")]
    InvalidClearOnSearch(String),
}

/// Runtime configuration for the search client.
#[derive(Debug, Clone)]
pub struct Config {
    /// RapidAPI key sent in the `x-rapidapi-key` header.
    pub api_key: String,
    /// Catalog API host, also sent in the `x-rapidapi-host` header.
    pub api_host: String,
    /// Clear the displayed track list as soon as a new search starts,
    /// instead of keeping it until the response lands.
    pub clear_on_search: bool,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup, so tests can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::BlankApiKey);
        }

        let api_host = lookup(API_HOST_VAR)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        let clear_on_search = match lookup(CLEAR_ON_SEARCH_VAR) {
            None => false,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "false" | "0" => false,
                "true" | "1" => true,
                _ => return Err(ConfigError::InvalidClearOnSearch(value)),
            },
        };

        Ok(Self {
            api_key,
            api_host,
            clear_on_search,
        })
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(result, Err(ConfigError::BlankApiKey)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert!(!config.clear_on_search);
    }

    #[test]
    fn host_override_is_respected() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (API_HOST_VAR, "example.rapidapi.com"),
        ]))
        .unwrap();
        assert_eq!(config.api_host, "example.rapidapi.com");
    }

    #[test]
    fn clear_on_search_parses_booleans() {
        for (raw, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
            let config = Config::from_lookup(lookup_from(&[
                (API_KEY_VAR, "secret"),
                (CLEAR_ON_SEARCH_VAR, raw),
            ]))
            .unwrap();
            assert_eq!(config.clear_on_search, expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn clear_on_search_rejects_garbage() {
        let result = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (CLEAR_ON_SEARCH_VAR, "maybe"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidClearOnSearch(_))));
    }
}
