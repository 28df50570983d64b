use nemcrypt_algorithms::{CompressedPoint, PreparedPoint, Scalar, SignSchema, BASE_POINT};
use nemcrypt_api::{Error, Result, Signature};
use nemcrypt_internal::constant_time::{ct_eq, ct_is_zero};
use tracing::debug;
use zeroize::Zeroizing;

use super::utils::expand_private_key;
use crate::key_pair::KeyPair;
use crate::traits::DsaSigner;

/// Deterministic Ed25519 signer bound to one key pair and schema
#[derive(Debug, Clone)]
pub struct Ed25519DsaSigner {
    key_pair: KeyPair,
    schema: SignSchema,
}

impl Ed25519DsaSigner {
    /// # Panics
    ///
    /// If `key_pair` was derived under a different schema. Signing with a
    /// key under the wrong schema would silently produce signatures for a
    /// different public key.
    pub fn new(key_pair: KeyPair, schema: SignSchema) -> Self {
        if let Some(key_schema) = key_pair.schema() {
            assert_eq!(
                key_schema, schema,
                "key pair was derived under the {} schema, signer uses {}",
                key_schema, schema
            );
        }
        Self { key_pair, schema }
    }

    pub fn schema(&self) -> SignSchema {
        self.schema
    }
}

impl DsaSigner for Ed25519DsaSigner {
    fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    fn sign(&self, message: &[u8]) -> Result<Signature> {
        let private_key = self
            .key_pair
            .private_key()
            .map_err(|_| Error::MissingPrivateKey {
                context: "Ed25519DsaSigner::sign",
                message: "cannot sign without private key".into(),
            })?;

        let expanded = expand_private_key(private_key, self.schema);
        let public_key = self.key_pair.public_key();

        // r = H(prefix || m) mod L
        let r_hash = Zeroizing::new(self.schema.hash_long(&[&expanded.prefix[..], message]));
        let r = Scalar::from_bytes_mod_order_wide(&r_hash);

        // R = r·B
        let encoded_r: CompressedPoint = BASE_POINT.scalar_multiply(&r).encode();

        // k = H(R || A || m) mod L
        let k = Scalar::from_bytes_mod_order_wide(&self.schema.hash_long(&[
            encoded_r.as_bytes(),
            public_key.as_bytes(),
            message,
        ]));

        // S = (r + k·a) mod L
        let s = Scalar::mul_add(&k, &expanded.scalar, &r);

        let signature = Signature::from_parts(encoded_r.as_bytes(), s.as_bytes());
        if !self.is_canonical_signature(&signature) {
            return Err(Error::NonCanonicalSignature {
                context: "Ed25519DsaSigner::sign",
                message: "Generated signature is not canonical".into(),
            });
        }

        debug!(schema = %self.schema, message_len = message.len(), "signed message");
        Ok(signature)
    }

    fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        if !self.is_canonical_signature(signature) {
            debug!(schema = %self.schema, "rejecting non-canonical signature");
            return Ok(false);
        }

        let public_key = self.key_pair.public_key();
        if ct_is_zero(public_key.as_bytes()) {
            debug!(schema = %self.schema, "rejecting all-zero public key");
            return Ok(false);
        }

        let a = CompressedPoint(public_key.to_bytes()).decode().ok_or_else(|| {
            Error::invalid_key(
                "Ed25519DsaSigner::verify",
                "public key does not decode to a curve point",
            )
        })?;

        let r = signature.r();
        let k = Scalar::from_bytes_mod_order_wide(&self.schema.hash_long(&[
            &r,
            public_key.as_bytes(),
            message,
        ]));
        let s = Scalar::from_bits(signature.s());

        // S·B - k·A must encode to R
        let a = PreparedPoint::new(a);
        let r_check = BASE_POINT
            .double_scalar_multiply_variable_time(&a, &k, &s)
            .encode();

        let valid = ct_eq(r_check.as_bytes(), r);
        debug!(
            schema = %self.schema,
            message_len = message.len(),
            valid,
            "verified signature"
        );
        Ok(valid)
    }

    fn is_canonical_signature(&self, signature: &Signature) -> bool {
        Scalar::is_canonical(&signature.s())
    }

    fn make_signature_canonical(&self, signature: &Signature) -> Signature {
        let s = Scalar::from_bytes_mod_order(&signature.s());
        Signature::from_parts(&signature.r(), s.as_bytes())
    }
}
