//! Selection between the SHA3 and the legacy Keccak signing schemas
//!
//! Both schemas derive keys and sign the same way (hash, clamp, multiply);
//! they differ in the sponge padding and, for the legacy schema, in the byte
//! order of the private key fed into the hash.

use core::fmt;
use core::str::FromStr;

use nemcrypt_api::constants::{LONG_HASH_SIZE, PRIVATE_KEY_SIZE, SHORT_HASH_SIZE};
use nemcrypt_api::{Error, PrivateKey, Result};
use tiny_keccak::{Hasher as _, Keccak, Sha3};
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hash construction used for key derivation and signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SignSchema {
    /// FIPS 202 SHA3-256 / SHA3-512
    Sha3,
    /// Original Keccak-256 / Keccak-512; private keys are hashed byte-reversed
    Keccak,
}

/// Digest length selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashSize {
    /// 32 bytes
    Short = 32,
    /// 64 bytes
    Long = 64,
}

impl HashSize {
    pub fn len(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for HashSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        match size {
            SHORT_HASH_SIZE => Ok(HashSize::Short),
            LONG_HASH_SIZE => Ok(HashSize::Long),
            _ => Err(Error::param(
                "HashSize",
                format!("hash size must be 32 or 64 bytes, got {}", size),
            )),
        }
    }
}

enum Sponge {
    Sha3(Sha3),
    Keccak(Keccak),
}

/// Streaming hasher for one schema and size
pub struct SchemaHasher {
    sponge: Sponge,
    size: HashSize,
}

impl SchemaHasher {
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        match &mut self.sponge {
            Sponge::Sha3(h) => h.update(data),
            Sponge::Keccak(h) => h.update(data),
        }
        self
    }

    pub fn size(&self) -> HashSize {
        self.size
    }

    /// Consume the hasher, returning `size().len()` bytes
    pub fn finalize(self) -> Vec<u8> {
        let mut out = vec![0u8; self.size.len()];
        match self.sponge {
            Sponge::Sha3(h) => h.finalize(&mut out),
            Sponge::Keccak(h) => h.finalize(&mut out),
        }
        out
    }

    fn finalize_into(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.size.len());
        match self.sponge {
            Sponge::Sha3(h) => h.finalize(out),
            Sponge::Keccak(h) => h.finalize(out),
        }
    }
}

impl SignSchema {
    /// Both schemas, in declaration order
    pub const ALL: [SignSchema; 2] = [SignSchema::Sha3, SignSchema::Keccak];

    /// Fresh streaming hasher producing `size` bytes
    pub fn hasher(self, size: HashSize) -> SchemaHasher {
        let sponge = match (self, size) {
            (SignSchema::Sha3, HashSize::Short) => Sponge::Sha3(Sha3::v256()),
            (SignSchema::Sha3, HashSize::Long) => Sponge::Sha3(Sha3::v512()),
            (SignSchema::Keccak, HashSize::Short) => Sponge::Keccak(Keccak::v256()),
            (SignSchema::Keccak, HashSize::Long) => Sponge::Keccak(Keccak::v512()),
        };
        SchemaHasher { sponge, size }
    }

    /// Hash the concatenation of `inputs`
    pub fn hash(self, size: HashSize, inputs: &[&[u8]]) -> Vec<u8> {
        let mut hasher = self.hasher(size);
        for input in inputs {
            hasher.update(input);
        }
        hasher.finalize()
    }

    /// 32-byte hash of the concatenation of `inputs`
    pub fn hash_short(self, inputs: &[&[u8]]) -> [u8; SHORT_HASH_SIZE] {
        let mut hasher = self.hasher(HashSize::Short);
        for input in inputs {
            hasher.update(input);
        }
        let mut out = [0u8; SHORT_HASH_SIZE];
        hasher.finalize_into(&mut out);
        out
    }

    /// 64-byte hash of the concatenation of `inputs`
    pub fn hash_long(self, inputs: &[&[u8]]) -> [u8; LONG_HASH_SIZE] {
        let mut hasher = self.hasher(HashSize::Long);
        for input in inputs {
            hasher.update(input);
        }
        let mut out = [0u8; LONG_HASH_SIZE];
        hasher.finalize_into(&mut out);
        out
    }

    /// The bytes in reverse order
    pub fn reverse(bytes: &[u8]) -> Vec<u8> {
        bytes.iter().rev().copied().collect()
    }

    /// Whether private keys are byte-reversed before hashing
    pub fn reverses_private_key(self) -> bool {
        matches!(self, SignSchema::Keccak)
    }

    /// The private key bytes in the order this schema hashes them
    pub fn private_key_bytes(self, key: &PrivateKey) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut bytes = Zeroizing::new(*key.as_bytes());
        if self.reverses_private_key() {
            bytes.reverse();
        }
        bytes
    }

    pub fn name(self) -> &'static str {
        match self {
            SignSchema::Sha3 => "sha3",
            SignSchema::Keccak => "keccak",
        }
    }
}

impl fmt::Display for SignSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignSchema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha3" => Ok(SignSchema::Sha3),
            "keccak" => Ok(SignSchema::Keccak),
            _ => Err(Error::param(
                "SignSchema::from_str",
                format!("unknown sign schema '{}'", s),
            )),
        }
    }
}
