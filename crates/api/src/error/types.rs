//! Error type definitions for key handling and signing

use thiserror::Error as ThisError;

/// Primary error type for nemcrypt operations
///
/// Verification failures are not errors: `verify` reports them as `Ok(false)`.
/// Every variant here means the operation could not be carried out at all.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A key was malformed or failed validation
    #[error("Invalid key ({context}): {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// A signature was structurally malformed
    #[error("Invalid signature ({context}): {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("Invalid length ({context}): expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A signing operation was attempted on a public-only key pair
    #[error("Missing private key ({context}): {message}")]
    MissingPrivateKey {
        context: &'static str,
        message: String,
    },

    /// A freshly produced signature failed the canonical check
    #[error("Non-canonical signature ({context}): {message}")]
    NonCanonicalSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("Invalid parameter ({context}): {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Authenticated encryption failed, or a ciphertext did not authenticate
    #[error("Cipher error ({context}): {message}")]
    Cipher {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error ({context}): {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },
}

/// Result type for nemcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidKey`]
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// The static context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::MissingPrivateKey { context, .. }
            | Self::NonCanonicalSignature { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Cipher { context, .. }
            | Self::Serialization { context, .. } => context,
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::MissingPrivateKey { message, .. } => Self::MissingPrivateKey { context, message },
            Self::NonCanonicalSignature { message, .. } => {
                Self::NonCanonicalSignature { context, message }
            }
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Cipher { message, .. } => Self::Cipher { context, message },
            Self::Serialization { message, .. } => Self::Serialization { context, message },
        }
    }
}
