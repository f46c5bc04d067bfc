//! Error types for the wire codec.

use thiserror::Error;

/// Errors that can occur encoding or decoding wire messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WireError {
    /// A parameter message must populate exactly one of `raw` and
    /// `parameter_key`.
    #[error("parameter must set exactly one of raw and parameter_key")]
    MalformedParam,

    /// The decoded operation failed gate-level validation.
    #[error("gate error: {0}")]
    Gate(#[from] grani_ir::GateError),

    /// JSON transport failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for wire codec operations.
pub type WireResult<T> = Result<T, WireError>;
