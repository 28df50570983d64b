use nemcrypt_algorithms::{Scalar, SignSchema};
use nemcrypt_api::PrivateKey;
use zeroize::{Zeroize, Zeroizing};

/// Hash output split into the clamped scalar and the nonce prefix
pub(crate) struct ExpandedPrivateKey {
    pub(crate) scalar: Scalar,
    pub(crate) prefix: Zeroizing<[u8; 32]>,
}

pub(crate) fn expand_private_key(private_key: &PrivateKey, schema: SignSchema) -> ExpandedPrivateKey {
    let key_bytes = schema.private_key_bytes(private_key);
    let hash = Zeroizing::new(schema.hash_long(&[&key_bytes[..]]));

    let mut a = [0u8; 32];
    a.copy_from_slice(&hash[..32]);
    a[0] &= 248;
    a[31] &= 127;
    a[31] |= 64;

    let mut prefix = Zeroizing::new([0u8; 32]);
    prefix.copy_from_slice(&hash[32..]);

    let scalar = Scalar::from_bits(a);
    a.zeroize();

    ExpandedPrivateKey { scalar, prefix }
}

/// Clamped secret scalar for `private_key` under `schema`
pub fn prepare_for_scalar_multiply(private_key: &PrivateKey, schema: SignSchema) -> Scalar {
    expand_private_key(private_key, schema).scalar
}
