use nemcrypt_algorithms::SignSchema;

use super::{Ed25519BlockCipher, Ed25519DsaSigner, Ed25519KeyAnalyzer, Ed25519KeyGenerator};
use crate::key_pair::KeyPair;
use crate::traits::CryptoEngine;

/// The Ed25519 engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519CryptoEngine;

impl CryptoEngine for Ed25519CryptoEngine {
    type KeyGenerator = Ed25519KeyGenerator;
    type KeyAnalyzer = Ed25519KeyAnalyzer;
    type DsaSigner = Ed25519DsaSigner;
    type BlockCipher = Ed25519BlockCipher;

    fn name(&self) -> &'static str {
        "Ed25519"
    }

    fn create_key_generator(&self, schema: SignSchema) -> Ed25519KeyGenerator {
        Ed25519KeyGenerator::new(schema)
    }

    fn create_key_analyzer(&self) -> Ed25519KeyAnalyzer {
        Ed25519KeyAnalyzer
    }

    fn create_dsa_signer(&self, key_pair: KeyPair, schema: SignSchema) -> Ed25519DsaSigner {
        Ed25519DsaSigner::new(key_pair, schema)
    }

    fn create_block_cipher(
        &self,
        sender: KeyPair,
        recipient: KeyPair,
        schema: SignSchema,
    ) -> Ed25519BlockCipher {
        Ed25519BlockCipher::new(sender, recipient, schema)
    }
}
