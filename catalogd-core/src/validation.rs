//! Validation error types

use std::fmt;

/// Validation error for product payloads
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field must be strictly greater than zero
    NotPositive { field: &'static str },

    /// Numeric field must not be negative
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NotPositive { field } => write!(f, "{} must be greater than 0", field),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "description",
            max: 500,
        };
        assert_eq!(
            err.to_string(),
            "description exceeds maximum length of 500 characters"
        );

        let err = ValidationError::NotPositive { field: "price" };
        assert_eq!(err.to_string(), "price must be greater than 0");
    }
}
