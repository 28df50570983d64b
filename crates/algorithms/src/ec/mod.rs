//! Elliptic curve arithmetic

pub mod ed25519;
