//! Error types for Reed-Solomon field, polynomial and codec operations

use thiserror::Error;

/// Errors that can occur while encoding or decoding codeword blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Malformed field parameters, buffers or arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inverting zero or dividing by the zero polynomial
    #[error("Division by zero")]
    DivisionByZero,

    /// The received block holds more damage than the parity can repair
    #[error("Too many errors: {0}")]
    TooManyErrors(&'static str),
}

impl RsError {
    /// Shorthand for building an [`RsError::InvalidArgument`]
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RsError::InvalidArgument(message.into())
    }

    /// True when the block was well-formed but could not be repaired
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::TooManyErrors(_))
    }
}

/// Type alias for Result with RsError
pub type RsResult<T> = Result<T, RsError>;
