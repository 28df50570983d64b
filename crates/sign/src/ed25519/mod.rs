//! Ed25519 engine
//!
//! Key derivation: hash the private key with the schema's long hash, clamp
//! the low half, multiply the base point. Signing follows RFC 8032 with the
//! schema's hash in place of SHA-512.
//!
//! Two key pairs can also agree on an AES key and exchange encrypted
//! messages; see [`Ed25519BlockCipher`].

mod block_cipher;
mod dsa_signer;
mod engine;
mod key_analyzer;
mod key_generator;
mod utils;

pub use block_cipher::{derive_shared_key, derive_shared_secret, Ed25519BlockCipher};
pub use dsa_signer::Ed25519DsaSigner;
pub use engine::Ed25519CryptoEngine;
pub use key_analyzer::Ed25519KeyAnalyzer;
pub use key_generator::Ed25519KeyGenerator;
pub use utils::prepare_for_scalar_multiply;
