// src/error.rs
use std::fmt;

/// Custom error types for the sde-sim library
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// A sequence argument does not have the length the simulation needs
    ShapeMismatch {
        argument: String,
        expected: usize,
        actual: usize,
    },

    /// A scheme was invoked without a coefficient it cannot do without
    MissingArgument { scheme: String, argument: String },

    /// A boundary value could not be interpreted as the expected type
    InvalidArgumentType {
        argument: String,
        expected: String,
        found: String,
    },

    /// RNG or random number generation error
    RandomGenerationError { reason: String },

    /// Reading or writing a numeric table failed
    Io { path: String, reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::ShapeMismatch {
                argument,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch for '{}': expected {} values, got {}",
                    argument, expected, actual
                )
            }
            SdeError::MissingArgument { scheme, argument } => {
                write!(
                    f,
                    "Missing argument '{}': required by the {} scheme",
                    argument, scheme
                )
            }
            SdeError::InvalidArgumentType {
                argument,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Invalid type for '{}': expected {}, found '{}'",
                    argument, expected, found
                )
            }
            SdeError::RandomGenerationError { reason } => {
                write!(f, "Random number generation error: {}", reason)
            }
            SdeError::Io { path, reason } => {
                write!(f, "I/O error on '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-sim operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if !(value > 0.0) {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "n_steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a sequence argument holds exactly `expected` values
    pub fn validate_length(name: &str, expected: usize, actual: usize) -> SdeResult<()> {
        if expected != actual {
            Err(SdeError::ShapeMismatch {
                argument: name.to_string(),
                expected,
                actual,
            })
        } else {
            Ok(())
        }
    }
}
