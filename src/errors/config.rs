use std::env::VarError;

use thiserror::Error;

/// Error type for loading `SHORT_URL_*` overrides from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Represents an error reading an override variable.
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] VarError),

    /// Represents an error parsing an override into its target type;
    /// `key` names the offending variable.
    #[error("Could not parse {key}: {reason}")]
    ParseError { key: String, reason: String },
}
