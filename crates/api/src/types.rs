//! Key and signature types with security guarantees
//!
//! Lengths are checked once, at construction. Everything downstream works
//! on fixed-size arrays and never re-validates.

use core::fmt;
use core::str::FromStr;

use nemcrypt_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_PART_SIZE, SIGNATURE_SIZE};
use crate::error::validate;
use crate::{Error, Result};

fn decode_hex<const N: usize>(context: &'static str, hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).map_err(|e| Error::from(e).with_context(context))?;
    validate::length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// A 32-byte private key seed, not yet hashed or clamped
///
/// The bytes are wiped on drop, compared in constant time and never printed
/// by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    data: [u8; PRIVATE_KEY_SIZE],
}

impl PrivateKey {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("PrivateKey::from_bytes", bytes.len(), PRIVATE_KEY_SIZE)?;
        let mut data = [0u8; PRIVATE_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Parse a 64-character hex string (either case)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        decode_hex("PrivateKey::from_hex", hex_str).map(Self::new)
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; PRIVATE_KEY_SIZE];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.data
    }

    /// Upper-case hex of the key bytes
    ///
    /// Exposes secret material; callers decide where it may go.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.data)
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey[REDACTED]")
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// A 32-byte compressed curve point
///
/// Only the length is checked here; whether the bytes decode to a point on
/// the curve is decided when the key is first used for verification.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    data: [u8; PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("PublicKey::from_bytes", bytes.len(), PUBLIC_KEY_SIZE)?;
        let mut data = [0u8; PUBLIC_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Parse a 64-character hex string (either case)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        decode_hex("PublicKey::from_hex", hex_str).map(Self::new)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.data
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.data
    }

    /// Number of encoded bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Upper-case hex, the form used in wallets and node APIs
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.data)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// A 64-byte signature: encoded point `R` followed by little-endian scalar `S`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    data: [u8; SIGNATURE_SIZE],
}

impl Signature {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; SIGNATURE_SIZE]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("Signature::from_bytes", bytes.len(), SIGNATURE_SIZE)?;
        let mut data = [0u8; SIGNATURE_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Assemble a signature from its two halves
    pub fn from_parts(r: &[u8; SIGNATURE_PART_SIZE], s: &[u8; SIGNATURE_PART_SIZE]) -> Self {
        let mut data = [0u8; SIGNATURE_SIZE];
        data[..SIGNATURE_PART_SIZE].copy_from_slice(r);
        data[SIGNATURE_PART_SIZE..].copy_from_slice(s);
        Self { data }
    }

    /// Parse a 128-character hex string (either case)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        decode_hex("Signature::from_hex", hex_str).map(Self::new)
    }

    /// The encoded point `R`
    pub fn r(&self) -> [u8; SIGNATURE_PART_SIZE] {
        let mut r = [0u8; SIGNATURE_PART_SIZE];
        r.copy_from_slice(&self.data[..SIGNATURE_PART_SIZE]);
        r
    }

    /// The scalar `S`, little-endian
    pub fn s(&self) -> [u8; SIGNATURE_PART_SIZE] {
        let mut s = [0u8; SIGNATURE_PART_SIZE];
        s.copy_from_slice(&self.data[SIGNATURE_PART_SIZE..]);
        s
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.data
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.data
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.data)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{PublicKey, Signature};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    macro_rules! hex_serde {
        ($ty:ident) => {
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_hex())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    $ty::from_hex(&s).map_err(D::Error::custom)
                }
            }
        };
    }

    hex_serde!(PublicKey);
    hex_serde!(Signature);
}
