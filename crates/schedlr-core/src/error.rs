use thiserror::Error;

/// Configuration errors raised while assembling provider settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' is required")]
    MissingEnv { name: String },

    #[error("environment variable '{name}' is not valid: '{value}'")]
    InvalidEnv { name: String, value: String },

    #[error("base url cannot be empty")]
    EmptyBaseUrl,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },

    #[error("credential parameter name cannot be empty")]
    EmptyCredentialParam,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid provider '{value}', expected one of linkedin, pinterest")]
    UnknownProvider { value: String },

    #[error("invalid metric '{value}', expected one of likes, shares, comments")]
    UnknownMetric { value: String },
}
