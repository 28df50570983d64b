//! Public API types for the nemcrypt library
//!
//! This crate provides the error taxonomy, the size constants and the
//! byte-level key and signature types shared by every other nemcrypt crate.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::{PrivateKey, PublicKey, Signature};
