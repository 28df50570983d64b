//! # nemcrypt
//!
//! Ed25519 key derivation, signing and verification for NEM-family networks,
//! under either the SHA3 schema or the legacy Keccak schema, plus AES-GCM
//! messages encrypted under a key shared by two key pairs.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nemcrypt = "0.3"
//! ```
//!
//! ```
//! use nemcrypt::prelude::*;
//!
//! # fn main() -> nemcrypt::Result<()> {
//! let key_pair = KeyPair::random(SignSchema::Keccak);
//! let signature = nemcrypt::sign(b"hello", &key_pair, SignSchema::Keccak)?;
//! assert!(nemcrypt::verify(
//!     b"hello",
//!     &signature,
//!     key_pair.public_key(),
//!     SignSchema::Keccak,
//! )?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: serde support for keys, signatures and [`SignSchema`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`nemcrypt-api`]: Errors, key and signature types
//! - [`nemcrypt-internal`]: Constant-time helpers
//! - [`nemcrypt-algorithms`]: Curve arithmetic and schema hashing
//! - [`nemcrypt-sign`]: Key pairs and the Ed25519 engine
//!
//! [`SignSchema`]: algorithms::SignSchema

pub use nemcrypt_algorithms as algorithms;
pub use nemcrypt_api as api;
pub use nemcrypt_internal as internal;
pub use nemcrypt_sign as sign;

pub use nemcrypt_api::{Error, Result};

use nemcrypt_algorithms::{HashSize, SignSchema};
use nemcrypt_api::{PrivateKey, PublicKey, Signature};
use nemcrypt_sign::{
    BlockCipher, DsaSigner, Ed25519BlockCipher, Ed25519DsaSigner, Ed25519KeyGenerator,
    KeyGenerator, KeyPair,
};

/// Common imports for nemcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export key material
    pub use crate::api::{PrivateKey, PublicKey, Signature};

    // Re-export schema selection and hashing
    pub use crate::algorithms::{HashSize, MerkleHashBuilder, SignSchema};

    // Re-export the engine and its traits
    pub use crate::sign::{
        derive_shared_key, BlockCipher, CryptoEngine, DsaSigner, Ed25519BlockCipher,
        Ed25519CryptoEngine, Ed25519DsaSigner, KeyAnalyzer, KeyGenerator, KeyPair,
    };
}

/// Public key for `private_key` under `schema`
pub fn derive_public_key(private_key: &PrivateKey, schema: SignSchema) -> PublicKey {
    Ed25519KeyGenerator::new(schema).derive_public_key(private_key)
}

/// Sign `message` with `key_pair`
///
/// Fails with [`Error::MissingPrivateKey`] for a public-only key pair.
///
/// # Panics
///
/// If `key_pair` was derived under a schema other than `schema`.
pub fn sign(message: &[u8], key_pair: &KeyPair, schema: SignSchema) -> Result<Signature> {
    Ed25519DsaSigner::new(key_pair.clone(), schema).sign(message)
}

/// Check `signature` over `message` against `public_key`
///
/// `Ok(false)` means the signature was checked and rejected; an `Err` means
/// the public key could not be used at all.
pub fn verify(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
    schema: SignSchema,
) -> Result<bool> {
    let key_pair = KeyPair::only_public(*public_key)?;
    Ed25519DsaSigner::new(key_pair, schema).verify(message, signature)
}

/// Hash the concatenation of `inputs` with the schema's 32- or 64-byte hash
///
/// Any other `size` is an [`Error::InvalidParameter`].
pub fn hash(schema: SignSchema, size: usize, inputs: &[&[u8]]) -> Result<Vec<u8>> {
    let size = HashSize::try_from(size)?;
    Ok(schema.hash(size, inputs))
}

/// Encrypt `plaintext` from `sender` to the owner of `recipient`
///
/// The payload is `tag || iv || ciphertext`; see [`decrypt_message`].
///
/// # Panics
///
/// If `sender` was derived under a schema other than `schema`.
pub fn encrypt_message(
    plaintext: &[u8],
    sender: &KeyPair,
    recipient: &PublicKey,
    schema: SignSchema,
) -> Result<Vec<u8>> {
    let recipient = KeyPair::only_public(*recipient)?;
    Ed25519BlockCipher::new(sender.clone(), recipient, schema).encrypt(plaintext)
}

/// Decrypt a payload produced by [`encrypt_message`]
///
/// Fails with [`Error::Cipher`] if the payload was not encrypted for this
/// pair of keys or was altered.
///
/// # Panics
///
/// If `recipient` was derived under a schema other than `schema`.
pub fn decrypt_message(
    payload: &[u8],
    recipient: &KeyPair,
    sender: &PublicKey,
    schema: SignSchema,
) -> Result<Vec<u8>> {
    let sender = KeyPair::only_public(*sender)?;
    Ed25519BlockCipher::new(sender, recipient.clone(), schema).decrypt(payload)
}
