//! Unified error types for the domain layer
//!
//! Construction-time validation is the only failure mode in this crate:
//! once a value exists, reading names and rolling dice are total operations.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A component was configured with values it cannot operate on
    /// (e.g., a die with zero sides)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a configuration error for values rejected at construction.
    ///
    /// # Example
    /// ```ignore
    /// if sides <= 0 {
    ///     return Err(DomainError::invalid_configuration("Dice must have at least one side"));
    /// }
    /// ```
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_error() {
        let err = DomainError::invalid_configuration("sides must be positive");
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: sides must be positive"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("range is inverted");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: range is inverted");
    }
}
