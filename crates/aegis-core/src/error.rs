//! Error Types

use thiserror::Error;

/// Result type alias for Aegis operations
pub type Result<T> = std::result::Result<T, AegisError>;

/// Aegis error types
///
/// The variants keep enough detail for diagnostics; callers on the
/// submission path treat every variant as the same "submission failed"
/// outcome.
#[derive(Error, Debug)]
pub enum AegisError {
    /// Request never reached the backend
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success HTTP status
    #[error("request failed with status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// Credential verification failed
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Answer backend failure
    #[error("answer backend error: {0}")]
    Backend(String),
}
