//! Fixed keys and messages shared by the integration tests
//!
//! The JSON files under `kat_json/` are read by the known-answer suites; the
//! values here are the handful the hand-written tests refer to directly.

use nemcrypt::algorithms::SignSchema;
use nemcrypt::api::{PrivateKey, PublicKey, Signature};
use once_cell::sync::Lazy;

/// Message signed by the fixed signature vectors
pub const MESSAGE: &[u8] = b"NEM is awesome !";

/// Private key behind the fixed signature vectors
pub const SIGNING_KEY_HEX: &str =
    "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d";

pub static SIGNING_KEY: Lazy<PrivateKey> = Lazy::new(|| {
    PrivateKey::from_hex(SIGNING_KEY_HEX).expect("signing key vector is valid hex")
});

/// Public key of [`SIGNING_KEY`] under `schema`
pub fn signing_public_key(schema: SignSchema) -> PublicKey {
    let hex = match schema {
        SignSchema::Sha3 => "1026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF37755",
        SignSchema::Keccak => "63A003F135105BCBA5A25AF48A3F5513428E5EAD7B30B1896103DF428165F7B3",
    };
    PublicKey::from_hex(hex).expect("public key vector is valid hex")
}

/// Signature of [`MESSAGE`] by [`SIGNING_KEY`] under `schema`
pub fn message_signature(schema: SignSchema) -> Signature {
    let hex = match schema {
        SignSchema::Sha3 => concat!(
            "D390A59B7A62EFD601F6D6A7F32349909648E5A90760DE493E01C88FEF0FEE4E",
            "482553D05EA609BE8E409D5E0B94B7C678EB358F17E4472B9F85EA88CF6C5405"
        ),
        SignSchema::Keccak => concat!(
            "1C24F6E94946EAFF609E87D867652955CD6A678F5717776CB4B2493BAE90A4DD",
            "066A83ED0F593E135668441F7281C19248B5C324635AB0E5EC46A76241205D01"
        ),
    };
    Signature::from_hex(hex).expect("signature vector is valid hex")
}

/// Ed25519 group order L, little-endian
pub const CURVE_ORDER_LE: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Little-endian sum of two 32-byte values, dropping any carry out of the top byte
pub fn add_le(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut carry = 0u16;
    for i in 0..32 {
        let v = a[i] as u16 + b[i] as u16 + carry;
        out[i] = v as u8;
        carry = v >> 8;
    }
    out
}
