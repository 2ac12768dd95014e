// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision fixed-point operations
// ============================================================================

use std::fmt;

/// Errors that can occur during arbitrary-precision fixed-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Requested scale exceeds the representable exponent range
    PrecisionOverflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Scale mismatch between operands
    ScaleMismatch,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionOverflow => write!(
                f,
                "precision overflow: requested scale exceeds the representable exponent range"
            ),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleMismatch => write!(f, "scale mismatch between operands"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::ScaleMismatch.to_string(),
            "scale mismatch between operands"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            NumericError::PrecisionOverflow,
            NumericError::PrecisionOverflow
        );
        assert_ne!(NumericError::PrecisionOverflow, NumericError::PrecisionLoss);
    }
}
