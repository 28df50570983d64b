//! Engine traits
//!
//! The traits mirror the roles a curve engine plays: turning private keys
//! into public keys, judging whether a public key is usable, signing and
//! verifying, and encrypting messages between two key pairs.

use nemcrypt_algorithms::SignSchema;
use nemcrypt_api::{PrivateKey, PublicKey, Result, Signature};
use rand::{CryptoRng, RngCore};

use crate::key_pair::KeyPair;

/// Derives public keys and generates fresh key pairs
pub trait KeyGenerator {
    /// The schema keys are derived under
    fn schema(&self) -> SignSchema;

    /// Generate a new key pair from the provided RNG
    fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> KeyPair;

    /// Derive the public key matching `private_key`
    fn derive_public_key(&self, private_key: &PrivateKey) -> PublicKey;
}

/// Structural checks on public keys
pub trait KeyAnalyzer {
    /// Whether `public_key` is in compressed (encoded point) form
    fn is_key_compressed(&self, public_key: &PublicKey) -> bool;
}

/// Deterministic signing and verification bound to one key pair
pub trait DsaSigner {
    /// The key pair the signer was built for
    fn key_pair(&self) -> &KeyPair;

    /// Sign `message`
    ///
    /// Fails if the key pair holds no private key.
    fn sign(&self, message: &[u8]) -> Result<Signature>;

    /// Check `signature` over `message` against the key pair's public key
    ///
    /// A signature that does not verify yields `Ok(false)`. `Err` means the
    /// check could not be performed at all, for example because the public
    /// key is not a curve point.
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool>;

    /// Whether `S` lies strictly between zero and the group order
    fn is_canonical_signature(&self, signature: &Signature) -> bool;

    /// Replace `S` with `S` mod the group order
    fn make_signature_canonical(&self, signature: &Signature) -> Signature;
}

/// Authenticated encryption between a sender and a recipient
///
/// Encrypting needs the sender's private key and the recipient's public key;
/// decrypting needs the recipient's private key and the sender's public key.
/// Either party can therefore decrypt what the sender encrypted.
pub trait BlockCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Factory for the collaborators of one curve
pub trait CryptoEngine {
    type KeyGenerator: KeyGenerator;
    type KeyAnalyzer: KeyAnalyzer;
    type DsaSigner: DsaSigner;
    type BlockCipher: BlockCipher;

    /// Returns the name of the curve
    fn name(&self) -> &'static str;

    fn create_key_generator(&self, schema: SignSchema) -> Self::KeyGenerator;

    fn create_key_analyzer(&self) -> Self::KeyAnalyzer;

    /// # Panics
    ///
    /// If `key_pair` was created under a schema other than `schema`.
    fn create_dsa_signer(&self, key_pair: KeyPair, schema: SignSchema) -> Self::DsaSigner;

    /// # Panics
    ///
    /// If either key pair was created under a schema other than `schema`.
    fn create_block_cipher(
        &self,
        sender: KeyPair,
        recipient: KeyPair,
        schema: SignSchema,
    ) -> Self::BlockCipher;
}
