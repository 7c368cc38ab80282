//! Error types for iter-stream
//!
//! Callback failures are never wrapped: panics unwind to the caller and the
//! `try_*` operations hand back the callback's own error. `StreamError` only
//! covers failures raised by the crate itself.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A bounded materialization produced more elements than allowed
    #[error("Resource exhausted: more than {limit} elements")]
    ResourceExhausted { limit: usize },
    /// Configuration rejected during parsing or validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::InvalidConfig(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
