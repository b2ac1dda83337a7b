//! Error types shared by the model and the tracer.

use thiserror::Error;

/// Errors raised while validating tracing input.
///
/// Every variant is raised before any geometry is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TraceError {
    /// Shorthand for building an `InvalidInput` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        TraceError::InvalidInput(message.into())
    }
}

pub type TraceResult<T> = Result<T, TraceError>;
