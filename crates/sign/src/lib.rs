//! Key pairs and deterministic Ed25519 signatures
//!
//! A [`CryptoEngine`] hands out the collaborators every signing flow needs:
//! a [`KeyGenerator`], a [`KeyAnalyzer`] and a [`DsaSigner`], plus a
//! [`BlockCipher`] for encrypted messages between two key pairs. The only
//! engine shipped is [`Ed25519CryptoEngine`]; [`KeyPair`] uses it unless told
//! otherwise.
//!
//! ```
//! use nemcrypt_sign::{DsaSigner, Ed25519DsaSigner, KeyPair};
//! use nemcrypt_algorithms::SignSchema;
//!
//! # fn main() -> nemcrypt_api::Result<()> {
//! let key_pair = KeyPair::random(SignSchema::Sha3);
//! let signer = Ed25519DsaSigner::new(key_pair, SignSchema::Sha3);
//!
//! let signature = signer.sign(b"NEM is awesome !")?;
//! assert!(signer.verify(b"NEM is awesome !", &signature)?);
//! # Ok(())
//! # }
//! ```

pub mod ed25519;
pub mod key_pair;
pub mod traits;

pub use ed25519::{
    derive_shared_key, derive_shared_secret, Ed25519BlockCipher, Ed25519CryptoEngine,
    Ed25519DsaSigner, Ed25519KeyAnalyzer, Ed25519KeyGenerator,
};
pub use key_pair::KeyPair;
pub use traits::{BlockCipher, CryptoEngine, DsaSigner, KeyAnalyzer, KeyGenerator};
