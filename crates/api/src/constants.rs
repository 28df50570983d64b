//! Byte sizes of every fixed-length value crossing the public API

/// Size of a private key seed in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a compressed public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a signature (`R || S`) in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Size of each half of a signature
pub const SIGNATURE_PART_SIZE: usize = 32;

/// Output size of a "short" schema hash
pub const SHORT_HASH_SIZE: usize = 32;

/// Output size of a "long" schema hash
pub const LONG_HASH_SIZE: usize = 64;

/// Size of a key agreed between two key pairs
pub const SHARED_KEY_SIZE: usize = 32;

/// AES-GCM initialisation vector size in bytes
pub const AES_GCM_IV_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes
pub const AES_GCM_TAG_SIZE: usize = 16;
