//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// An operand was rejected at construction (e.g. a blank currency code).
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// A stress scenario observed a value other than the expected one.
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// A scenario ran slower than its timing requirement allows.
    #[error("Threshold exceeded: {0}")]
    ThresholdExceeded(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code used in structured logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOperand(_) => "INVALID_OPERAND",
            Self::Assertion(_) => "ASSERTION_FAILED",
            Self::ThresholdExceeded(_) => "THRESHOLD_EXCEEDED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
