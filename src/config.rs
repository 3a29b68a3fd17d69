//! Startup configuration read from the process environment
//!
//! - `GEMINI_API_KEY` (or `API_KEY`): required
//! - `HIEROTRAD_MODEL`: model name, default `gemini-2.5-flash`
//! - `HIEROTRAD_ENDPOINT`: API base URL, default Google's v1beta endpoint
//! - `HIEROTRAD_ANIMATION`: `on`/`off` for the animated background, default `on`
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no API key configured: set GEMINI_API_KEY (or API_KEY) before starting")]
    MissingApiKey,

    #[error("invalid value {value:?} for {name}: expected on/off")]
    InvalidFlag { name: &'static str, value: String },
}

/// Everything the app needs to know before opening its window
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Whether the decorative 3D background is mounted
    pub animate_background: bool,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| get(*name))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = get("HIEROTRAD_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let endpoint = get("HIEROTRAD_ENDPOINT")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let animate_background = match get("HIEROTRAD_ANIMATION") {
            None => true,
            Some(value) => parse_flag("HIEROTRAD_ANIMATION", &value)?,
        };

        Ok(Config {
            api_key,
            model,
            endpoint,
            animate_background,
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "1" | "true" | "yes" => Ok(true),
        "off" | "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

// Keep the API key out of debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("animate_background", &self.animate_background)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_key_fails_fast() {
        assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::MissingApiKey));
        assert_eq!(
            Config::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.animate_background);
    }

    #[test]
    fn test_fallback_key_variable() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.api_key, "legacy");

        let config =
            Config::from_lookup(lookup(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "new")])).unwrap();
        assert_eq!(config.api_key, "new");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("HIEROTRAD_MODEL", "gemini-2.5-pro"),
            ("HIEROTRAD_ENDPOINT", "http://localhost:8080/v1beta/"),
            ("HIEROTRAD_ANIMATION", "OFF"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.endpoint, "http://localhost:8080/v1beta");
        assert!(!config.animate_background);
    }

    #[test]
    fn test_invalid_animation_flag() {
        let err = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("HIEROTRAD_ANIMATION", "sometimes"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                name: "HIEROTRAD_ANIMATION",
                value: "sometimes".to_string(),
            }
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "top-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
