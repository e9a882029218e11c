// ============================================================================
// Numeric Errors
// Error types for scaled arithmetic, parsing and configuration
// ============================================================================

use std::fmt;

/// Errors that can occur during scaled fixed-point operations.
///
/// Wraparound in [`multiply`](crate::numeric::ScaledArithmetic::multiply) is
/// not an error and never produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the maximum of the target type
    Overflow,
    /// Result below the minimum of the target type
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input text is not a number in the requested style
    InvalidFormat,
    /// Raw rounding-mode tag outside the known range
    InvalidRoundingMode(u8),
    /// Number of decimal places whose scaling factor does not fit the domain
    InvalidScale(u32),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidFormat => {
                write!(f, "invalid format: input is not a number in the given style")
            },
            NumericError::InvalidRoundingMode(tag) => {
                write!(f, "invalid rounding mode: {} is not a known mode", tag)
            },
            NumericError::InvalidScale(decimals) => write!(
                f,
                "invalid scale: 10^{} does not fit the target type",
                decimals
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
