//! Key pairs that may or may not be able to sign

use nemcrypt_algorithms::SignSchema;
use nemcrypt_api::{Error, PrivateKey, PublicKey, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::ed25519::Ed25519CryptoEngine;
use crate::traits::{CryptoEngine, KeyAnalyzer, KeyGenerator};

/// A public key, optionally with the private key it was derived from
///
/// Pairs built from a private key remember the schema the public key was
/// derived under; public-only pairs carry no schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_key: Option<PrivateKey>,
    public_key: PublicKey,
    schema: Option<SignSchema>,
}

impl KeyPair {
    /// Random key pair from the operating system RNG
    pub fn random(schema: SignSchema) -> Self {
        Self::random_with(&Ed25519CryptoEngine, schema, &mut OsRng)
    }

    /// Random key pair from the given engine and RNG
    pub fn random_with<E, R>(engine: &E, schema: SignSchema, rng: &mut R) -> Self
    where
        E: CryptoEngine,
        R: CryptoRng + RngCore,
    {
        engine.create_key_generator(schema).generate_key_pair(rng)
    }

    /// Key pair for an existing private key; the public key is derived
    pub fn from_private(private_key: PrivateKey, schema: SignSchema) -> Self {
        Self::from_private_with(&Ed25519CryptoEngine, private_key, schema)
    }

    pub fn from_private_with<E: CryptoEngine>(
        engine: &E,
        private_key: PrivateKey,
        schema: SignSchema,
    ) -> Self {
        let public_key = engine
            .create_key_generator(schema)
            .derive_public_key(&private_key);
        Self {
            private_key: Some(private_key),
            public_key,
            schema: Some(schema),
        }
    }

    /// Verification-only key pair
    pub fn only_public(public_key: PublicKey) -> Result<Self> {
        Self::only_public_with(public_key, &Ed25519CryptoEngine)
    }

    /// Verification-only key pair, checked by the engine's analyzer
    pub fn only_public_with<E: CryptoEngine>(public_key: PublicKey, engine: &E) -> Result<Self> {
        if !engine.create_key_analyzer().is_key_compressed(&public_key) {
            return Err(Error::invalid_key(
                "KeyPair::only_public",
                "PublicKey must be in compressed form",
            ));
        }
        Ok(Self {
            private_key: None,
            public_key,
            schema: None,
        })
    }

    /// Assemble a pair whose halves are already known to match
    pub(crate) fn from_parts(
        private_key: PrivateKey,
        public_key: PublicKey,
        schema: SignSchema,
    ) -> Self {
        Self {
            private_key: Some(private_key),
            public_key,
            schema: Some(schema),
        }
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    pub fn private_key(&self) -> Result<&PrivateKey> {
        self.private_key
            .as_ref()
            .ok_or_else(|| Error::MissingPrivateKey {
                context: "KeyPair::private_key",
                message: "Private Key hasn't been provided.".into(),
            })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The schema the public key was derived under, if known
    pub fn schema(&self) -> Option<SignSchema> {
        self.schema
    }
}
