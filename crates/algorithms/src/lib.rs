//! Cryptographic primitives for the nemcrypt library
//!
//! - [`ec::ed25519`]: prime-field, group and scalar arithmetic on the
//!   Ed25519 twisted Edwards curve, including precomputed base-point tables.
//! - [`hash`]: the Keccak/SHA3 primitives, the [`SignSchema`] selector and the
//!   Merkle root builder used for aggregate hashes.

pub mod ec;
pub mod hash;

pub use ec::ed25519::{
    AffinePoint, CachedPoint, CompletedPoint, CompressedPoint, CoordinateSystem, ExtendedPoint,
    FieldElement, GroupElement, PrecomputedPoint, PreparedPoint, ProjectivePoint, Scalar,
    BASE_POINT,
};
pub use hash::{HashSize, MerkleHashBuilder, SignSchema};
