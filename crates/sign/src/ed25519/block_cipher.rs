//! Shared keys and AES-GCM messages between two key pairs
//!
//! The shared secret is the encoded point `a·B`, where `a` is one party's
//! clamped private scalar and `B` the other party's public point. It goes
//! through HKDF-SHA256 (no salt, info `catapult`) to give the AES-256 key.
//!
//! Encrypted payloads are laid out as `tag (16) || iv (12) || ciphertext`.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce, Tag};
use hkdf::Hkdf;
use nemcrypt_algorithms::{CompressedPoint, PreparedPoint, SignSchema};
use nemcrypt_api::constants::{AES_GCM_IV_SIZE, AES_GCM_TAG_SIZE, SHARED_KEY_SIZE};
use nemcrypt_api::{Error, PrivateKey, PublicKey, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use super::utils::prepare_for_scalar_multiply;
use crate::key_pair::KeyPair;
use crate::traits::BlockCipher;

const SHARED_KEY_INFO: &[u8] = b"catapult";

/// Encoded point shared by `private_key`'s owner and `public_key`'s owner
///
/// Fails with [`Error::InvalidKey`] if `public_key` is not a curve point.
pub fn derive_shared_secret(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    schema: SignSchema,
) -> Result<Zeroizing<[u8; SHARED_KEY_SIZE]>> {
    let point = CompressedPoint(public_key.to_bytes())
        .decode()
        .ok_or_else(|| {
            Error::invalid_key(
                "derive_shared_secret",
                "public key does not decode to a curve point",
            )
        })?;

    let a = prepare_for_scalar_multiply(private_key, schema);
    let shared = PreparedPoint::new(point).scalar_multiply(&a).encode();
    Ok(Zeroizing::new(shared.to_bytes()))
}

/// AES-256 key derived from [`derive_shared_secret`]
pub fn derive_shared_key(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    schema: SignSchema,
) -> Result<Zeroizing<[u8; SHARED_KEY_SIZE]>> {
    let secret = derive_shared_secret(private_key, public_key, schema)?;

    let mut key = Zeroizing::new([0u8; SHARED_KEY_SIZE]);
    Hkdf::<Sha256>::new(None, &secret[..])
        .expand(SHARED_KEY_INFO, &mut key[..])
        .map_err(|_| Error::param("derive_shared_key", "HKDF output length rejected"))?;
    Ok(key)
}

fn seal(
    key: &[u8; SHARED_KEY_SIZE],
    iv: &[u8; AES_GCM_IV_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let body = AES_GCM_TAG_SIZE + AES_GCM_IV_SIZE;
    let mut payload = Vec::with_capacity(body + plaintext.len());
    payload.resize(AES_GCM_TAG_SIZE, 0);
    payload.extend_from_slice(iv);
    payload.extend_from_slice(plaintext);

    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(iv), b"", &mut payload[body..])
        .map_err(|_| Error::Cipher {
            context: "Ed25519BlockCipher::encrypt",
            message: "plaintext too long for AES-GCM".into(),
        })?;
    payload[..AES_GCM_TAG_SIZE].copy_from_slice(&tag);
    Ok(payload)
}

fn open(key: &[u8; SHARED_KEY_SIZE], payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() < AES_GCM_TAG_SIZE + AES_GCM_IV_SIZE {
        return Err(Error::param(
            "Ed25519BlockCipher::decrypt",
            "payload is shorter than the tag and IV",
        ));
    }
    let (tag, rest) = payload.split_at(AES_GCM_TAG_SIZE);
    let (iv, ciphertext) = rest.split_at(AES_GCM_IV_SIZE);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let mut plaintext = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(iv),
            b"",
            &mut plaintext,
            Tag::from_slice(tag),
        )
        .map_err(|_| Error::Cipher {
            context: "Ed25519BlockCipher::decrypt",
            message: "authentication tag mismatch".into(),
        })?;
    Ok(plaintext)
}

/// AES-GCM messages from `sender` to `recipient`
#[derive(Debug, Clone)]
pub struct Ed25519BlockCipher {
    sender: KeyPair,
    recipient: KeyPair,
    schema: SignSchema,
}

impl Ed25519BlockCipher {
    /// # Panics
    ///
    /// If either key pair was derived under a different schema.
    pub fn new(sender: KeyPair, recipient: KeyPair, schema: SignSchema) -> Self {
        for key_pair in [&sender, &recipient] {
            if let Some(key_schema) = key_pair.schema() {
                assert_eq!(
                    key_schema, schema,
                    "key pair was derived under the {} schema, cipher uses {}",
                    key_schema, schema
                );
            }
        }
        Self {
            sender,
            recipient,
            schema,
        }
    }

    pub fn schema(&self) -> SignSchema {
        self.schema
    }

    /// Encrypt with an IV drawn from `rng`
    pub fn encrypt_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let key = derive_shared_key(
            self.sender.private_key()?,
            self.recipient.public_key(),
            self.schema,
        )?;

        let mut iv = [0u8; AES_GCM_IV_SIZE];
        rng.fill_bytes(&mut iv);

        let payload = seal(&key, &iv, plaintext)?;
        debug!(schema = %self.schema, plaintext_len = plaintext.len(), "encrypted message");
        Ok(payload)
    }
}

impl BlockCipher for Ed25519BlockCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_rng(&mut OsRng, plaintext)
    }

    fn decrypt(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let key = derive_shared_key(
            self.recipient.private_key()?,
            self.sender.public_key(),
            self.schema,
        )?;

        let plaintext = open(&key, payload)?;
        debug!(schema = %self.schema, payload_len = payload.len(), "decrypted message");
        Ok(plaintext)
    }
}
