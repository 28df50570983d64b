//! Structured error types for the known-answer engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    /// The operation ran and rejected its input (e.g. `verify` returned false)
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<nemcrypt::Error> for EngineError {
    fn from(e: nemcrypt::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}
