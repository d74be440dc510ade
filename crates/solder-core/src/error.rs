//! Unified error types for the Solder core.
//!
//! Every fallible seam in the framework reports through [`ApiError`]; adapters
//! propagate these unmodified so the host can distinguish transport-level
//! failures from protocol-level rejections.

use thiserror::Error;

/// Result type for API calls and adapter operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when talking to a protocol implementation.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The underlying transport is not connected.
    #[error("bot is not connected")]
    NotConnected,

    /// The call did not complete within the configured bound.
    #[error("API call timed out")]
    Timeout,

    /// The protocol implementation rejected the call.
    #[error("API error ({retcode}): {message}")]
    Api {
        /// Protocol-level return code (non-zero).
        retcode: i64,
        /// Human-readable rejection message.
        message: String,
    },

    /// A payload could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The transport failed below the protocol layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// The operation required session information that was absent.
    #[error("missing session info: {0}")]
    MissingSession(String),

    /// A bot with the same sid is already registered.
    #[error("bot with sid '{0}' already exists")]
    AlreadyRegistered(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
