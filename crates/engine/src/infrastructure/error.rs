//! Infrastructure error types.

use rollcall_domain::DomainError;
use thiserror::Error;

/// Configuration could not be loaded from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse.
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    /// A parsed value was rejected by the domain (e.g., zero dice sides).
    #[error("Configuration rejected: {0}")]
    Domain(#[from] DomainError),
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
        }
    }
}
