use nemcrypt_algorithms::{SignSchema, BASE_POINT};
use nemcrypt_api::{PrivateKey, PublicKey};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::utils::prepare_for_scalar_multiply;
use crate::key_pair::KeyPair;
use crate::traits::KeyGenerator;

/// Ed25519 key generation under one schema
#[derive(Debug, Clone, Copy)]
pub struct Ed25519KeyGenerator {
    schema: SignSchema,
}

impl Ed25519KeyGenerator {
    pub fn new(schema: SignSchema) -> Self {
        Self { schema }
    }
}

impl KeyGenerator for Ed25519KeyGenerator {
    fn schema(&self) -> SignSchema {
        self.schema
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> KeyPair {
        let private_key = PrivateKey::random(rng);
        let public_key = self.derive_public_key(&private_key);
        debug!(schema = %self.schema, "generated key pair");
        KeyPair::from_parts(private_key, public_key, self.schema)
    }

    fn derive_public_key(&self, private_key: &PrivateKey) -> PublicKey {
        let a = prepare_for_scalar_multiply(private_key, self.schema);
        PublicKey::new(BASE_POINT.scalar_multiply(&a).encode().to_bytes())
    }
}
