use std::{env, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

// Environment variables recognized by `ShortUrlConfig::from_env`
const ENV_URL_SCHEME: &str = "SHORT_URL_SCHEME";
const ENV_SHORT_DOMAIN_NAME: &str = "SHORT_URL_DOMAIN";
const ENV_MAX_KEYWORD_LENGTH: &str = "SHORT_URL_MAX_KEYWORD_LENGTH";

// Optional overrides for the short URL generator. A field left unset keeps
// the generator default at construction time; a zero keyword length counts
// as unset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShortUrlConfig {
    pub url_scheme: Option<String>,
    pub short_domain_name: Option<String>,
    pub max_keyword_length: Option<usize>,
}

impl ShortUrlConfig {
    // Create an empty configuration; every setting keeps its default
    pub fn new() -> Self {
        Self::default()
    }

    // Builder-style setters for overriding individual settings
    pub fn with_url_scheme(mut self, url_scheme: impl Into<String>) -> Self {
        self.url_scheme = Some(url_scheme.into());
        self
    }

    pub fn with_short_domain_name(mut self, short_domain_name: impl Into<String>) -> Self {
        self.short_domain_name = Some(short_domain_name.into());
        self
    }

    pub fn with_max_keyword_length(mut self, max_keyword_length: usize) -> Self {
        self.max_keyword_length = Some(max_keyword_length);
        self
    }

    // Load overrides from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env file if it exists
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let config = ShortUrlConfig {
            url_scheme: get_env_opt(ENV_URL_SCHEME)?,
            short_domain_name: get_env_opt(ENV_SHORT_DOMAIN_NAME)?,
            max_keyword_length: get_env_opt(ENV_MAX_KEYWORD_LENGTH)?,
        };

        info!("Short URL configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an optional env variable, parsed into its target type
fn get_env_opt<T: FromStr>(key: &str) -> ConfigResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, keeping generator default", key);
            Ok(None)
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters_override_fields() {
        let config = ShortUrlConfig::new()
            .with_url_scheme("https://")
            .with_short_domain_name("new-short-name.com")
            .with_max_keyword_length(30);

        assert_eq!(config.url_scheme.as_deref(), Some("https://"));
        assert_eq!(config.short_domain_name.as_deref(), Some("new-short-name.com"));
        assert_eq!(config.max_keyword_length, Some(30));
    }

    #[test]
    fn test_default_config_leaves_everything_unset() {
        let config = ShortUrlConfig::default();

        assert!(config.url_scheme.is_none());
        assert!(config.short_domain_name.is_none());
        assert!(config.max_keyword_length.is_none());
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: ShortUrlConfig =
            serde_json::from_str(r#"{"short_domain_name": "sho.rt"}"#).unwrap();

        assert!(config.url_scheme.is_none());
        assert_eq!(config.short_domain_name.as_deref(), Some("sho.rt"));
        assert!(config.max_keyword_length.is_none());
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = ShortUrlConfig::new()
            .with_url_scheme("https://")
            .with_short_domain_name("new-short-name.com")
            .with_max_keyword_length(30);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ShortUrlConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.url_scheme, config.url_scheme);
        assert_eq!(parsed.short_domain_name, config.short_domain_name);
        assert_eq!(parsed.max_keyword_length, config.max_keyword_length);
    }

    #[test]
    fn test_from_env_reads_and_validates_overrides() {
        let _ = env_logger::builder().is_test(true).try_init();

        // All steps share the same variable, so they run in one test to
        // avoid races with parallel test threads.
        env::set_var(ENV_MAX_KEYWORD_LENGTH, "30");
        let config = ShortUrlConfig::from_env().unwrap();
        assert_eq!(config.max_keyword_length, Some(30));

        env::set_var(ENV_MAX_KEYWORD_LENGTH, "not-a-number");
        let err = ShortUrlConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(
            err.to_string().contains(ENV_MAX_KEYWORD_LENGTH),
            "parse error should name the offending variable: {}",
            err
        );

        env::remove_var(ENV_MAX_KEYWORD_LENGTH);
        let config = ShortUrlConfig::from_env().unwrap();
        assert_eq!(config.max_keyword_length, None);
    }
}
