use nemcrypt_algorithms::CompressedPoint;
use nemcrypt_api::PublicKey;

use crate::traits::KeyAnalyzer;

/// Accepts keys that decode to a point on the curve
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519KeyAnalyzer;

impl KeyAnalyzer for Ed25519KeyAnalyzer {
    fn is_key_compressed(&self, public_key: &PublicKey) -> bool {
        CompressedPoint(public_key.to_bytes()).decode().is_some()
    }
}
