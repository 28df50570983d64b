//! Hash functions used for key derivation, signing and aggregate hashes
//!
//! Two sponge constructions share the Keccak-f[1600] permutation and differ
//! only in their padding byte:
//!
//! - FIPS 202 SHA3 (`0x06`), behind [`SignSchema::Sha3`]
//! - original Keccak (`0x01`), behind [`SignSchema::Keccak`]
//!
//! Every function takes a list of inputs that are hashed as if concatenated.

use tiny_keccak::{Keccak, Sha3};

pub mod merkle;
pub mod sign_schema;

pub use merkle::MerkleHashBuilder;
pub use sign_schema::{HashSize, SchemaHasher, SignSchema};

fn digest<H: tiny_keccak::Hasher, const N: usize>(mut hasher: H, inputs: &[&[u8]]) -> [u8; N] {
    for input in inputs {
        hasher.update(input);
    }
    let mut out = [0u8; N];
    hasher.finalize(&mut out);
    out
}

/// SHA3-256 of the concatenated inputs
pub fn sha3_256(inputs: &[&[u8]]) -> [u8; 32] {
    digest(Sha3::v256(), inputs)
}

/// SHA3-512 of the concatenated inputs
pub fn sha3_512(inputs: &[&[u8]]) -> [u8; 64] {
    digest(Sha3::v512(), inputs)
}

/// Legacy Keccak-256 of the concatenated inputs
pub fn keccak256(inputs: &[&[u8]]) -> [u8; 32] {
    digest(Keccak::v256(), inputs)
}

/// Legacy Keccak-512 of the concatenated inputs
pub fn keccak512(inputs: &[&[u8]]) -> [u8; 64] {
    digest(Keccak::v512(), inputs)
}
