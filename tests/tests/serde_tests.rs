//! serde representations of keys, signatures and schemas

use nemcrypt::prelude::*;
use nemcrypt_tests::vectors::{message_signature, signing_public_key};

#[test]
fn schema_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SignSchema::Keccak).unwrap(), "\"keccak\"");
    assert_eq!(
        serde_json::from_str::<SignSchema>("\"sha3\"").unwrap(),
        SignSchema::Sha3
    );
    assert!(serde_json::from_str::<SignSchema>("\"sha2\"").is_err());
}

#[test]
fn public_key_is_a_hex_string() {
    let public_key = signing_public_key(SignSchema::Sha3);
    let json = serde_json::to_string(&public_key).unwrap();
    assert_eq!(
        json,
        "\"1026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF37755\""
    );
    assert_eq!(serde_json::from_str::<PublicKey>(&json).unwrap(), public_key);
}

#[test]
fn signature_survives_json() {
    let signature = message_signature(SignSchema::Keccak);
    let json = serde_json::to_string(&signature).unwrap();
    assert_eq!(serde_json::from_str::<Signature>(&json).unwrap(), signature);

    // wrong length inside a well-formed string
    assert!(serde_json::from_str::<Signature>("\"ABCD\"").is_err());
}
