//! Error handling for the nemcrypt crates

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Self::Serialization {
            context: "hex decoding",
            message: e.to_string(),
        }
    }
}
