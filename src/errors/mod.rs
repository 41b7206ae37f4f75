use thiserror::Error;
use validator::ValidationError;

pub mod config;
pub mod generator;

pub use config::ConfigError;
pub use generator::GeneratorError;

// Custom result type for fallible library operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Domain errors surfaced by the formatting operations
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Generator error: {0}")]
    Generator(String),
    // Environment/configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GeneratorError> for AppError {
    fn from(e: GeneratorError) -> Self {
        AppError::Generator(e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let message = err
            .message
            .clone()
            .unwrap_or_else(|| "invalid".into())
            .into_owned();
        AppError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_convert_into_app_error() {
        let result: AppResult<String> = Err(GeneratorError::InvalidLength(0).into());
        let generator_err = result.unwrap_err();
        assert!(matches!(generator_err, AppError::Generator(_)));
        assert_eq!(
            generator_err.to_string(),
            "Generator error: Length of sequence must be at least 1, got 0"
        );

        let config_err: AppError = ConfigError::ParseError {
            key: "SHORT_URL_MAX_KEYWORD_LENGTH".to_string(),
            reason: "invalid digit found in string".to_string(),
        }
        .into();
        assert!(matches!(config_err, AppError::Config(_)));
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Could not parse SHORT_URL_MAX_KEYWORD_LENGTH: invalid digit found in string"
        );
    }
}
