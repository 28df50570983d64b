//! End-to-end tests of the facade functions

use nemcrypt::prelude::*;
use nemcrypt_tests::vectors::{
    add_le, message_signature, signing_public_key, CURVE_ORDER_LE, MESSAGE, SIGNING_KEY,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn derive_sign_verify_round_trip() {
    for schema in SignSchema::ALL {
        let key_pair = KeyPair::from_private(SIGNING_KEY.clone(), schema);
        let public_key = nemcrypt::derive_public_key(&SIGNING_KEY, schema);
        assert_eq!(public_key, signing_public_key(schema));
        assert_eq!(key_pair.public_key(), &public_key);

        let signature = nemcrypt::sign(MESSAGE, &key_pair, schema).unwrap();
        assert_eq!(signature, message_signature(schema));
        assert!(nemcrypt::verify(MESSAGE, &signature, &public_key, schema).unwrap());
    }
}

#[test]
fn verification_is_schema_specific() {
    let signature = message_signature(SignSchema::Sha3);
    let public_key = signing_public_key(SignSchema::Sha3);

    assert!(nemcrypt::verify(MESSAGE, &signature, &public_key, SignSchema::Sha3).unwrap());
    assert!(!nemcrypt::verify(MESSAGE, &signature, &public_key, SignSchema::Keccak).unwrap());
}

#[test]
fn public_only_key_pair_reports_missing_private_key() {
    let key_pair = KeyPair::only_public(signing_public_key(SignSchema::Keccak)).unwrap();
    let err = nemcrypt::sign(MESSAGE, &key_pair, SignSchema::Keccak).unwrap_err();
    assert!(matches!(err, Error::MissingPrivateKey { .. }));
}

#[test]
fn rejection_is_not_an_error() {
    let schema = SignSchema::Sha3;
    let public_key = signing_public_key(schema);
    let signature = message_signature(schema);

    // tampered message
    assert_eq!(
        nemcrypt::verify(b"NEM is awesome?!", &signature, &public_key, schema),
        Ok(false)
    );

    // malleated S
    let malleated = Signature::from_parts(&signature.r(), &add_le(&signature.s(), &CURVE_ORDER_LE));
    assert_eq!(
        nemcrypt::verify(MESSAGE, &malleated, &public_key, schema),
        Ok(false)
    );

    // all-zero key
    assert_eq!(
        nemcrypt::verify(MESSAGE, &signature, &PublicKey::new([0u8; 32]), schema),
        Ok(false)
    );
}

#[test]
fn undecodable_public_key_is_an_error() {
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    let result = nemcrypt::verify(
        MESSAGE,
        &message_signature(SignSchema::Sha3),
        &PublicKey::new(bytes),
        SignSchema::Sha3,
    );
    assert!(matches!(result, Err(Error::InvalidKey { .. })));
}

#[test]
fn malformed_lengths_are_rejected_at_construction() {
    assert!(matches!(
        PrivateKey::from_bytes(&[0u8; 31]),
        Err(Error::InvalidLength { expected: 32, actual: 31, .. })
    ));
    assert!(matches!(
        PublicKey::from_bytes(&[0u8; 33]),
        Err(Error::InvalidLength { expected: 32, actual: 33, .. })
    ));
    assert!(matches!(
        Signature::from_bytes(&[0u8; 63]),
        Err(Error::InvalidLength { expected: 64, actual: 63, .. })
    ));
    assert!(matches!(
        PublicKey::from_hex("zz"),
        Err(Error::Serialization { .. })
    ));
}

#[test]
fn hash_sizes() {
    let input: &[u8] = &[0x22, 0x7F];
    assert_eq!(nemcrypt::hash(SignSchema::Sha3, 32, &[input]).unwrap().len(), 32);
    assert_eq!(nemcrypt::hash(SignSchema::Keccak, 64, &[input]).unwrap().len(), 64);
    assert!(matches!(
        nemcrypt::hash(SignSchema::Sha3, 48, &[input]),
        Err(Error::InvalidParameter { .. })
    ));

    // inputs are concatenated
    assert_eq!(
        nemcrypt::hash(SignSchema::Keccak, 64, &[&input[..1], &input[1..]]).unwrap(),
        nemcrypt::hash(SignSchema::Keccak, 64, &[input]).unwrap()
    );
}

#[test]
fn engine_generated_key_pairs_sign() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let engine = Ed25519CryptoEngine;

    for schema in SignSchema::ALL {
        let key_pair = KeyPair::random_with(&engine, schema, &mut rng);
        let signer = engine.create_dsa_signer(key_pair.clone(), schema);
        let signature = signer.sign(MESSAGE).unwrap();

        assert!(signer.is_canonical_signature(&signature));
        assert!(nemcrypt::verify(MESSAGE, &signature, key_pair.public_key(), schema).unwrap());
    }
}

#[test]
fn concurrent_signing_agrees() {
    // first use of the shared base-point tables may race between threads
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let schema = SignSchema::ALL[i % 2];
                let key_pair = KeyPair::from_private(SIGNING_KEY.clone(), schema);
                (schema, nemcrypt::sign(MESSAGE, &key_pair, schema).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (schema, signature) = handle.join().unwrap();
        assert_eq!(signature, message_signature(schema));
    }
}

#[test]
fn encrypted_messages_between_key_pairs() {
    let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
    let engine = Ed25519CryptoEngine;

    for schema in SignSchema::ALL {
        let sender = KeyPair::random_with(&engine, schema, &mut rng);
        let recipient = KeyPair::random_with(&engine, schema, &mut rng);
        let stranger = KeyPair::random_with(&engine, schema, &mut rng);

        let payload =
            nemcrypt::encrypt_message(MESSAGE, &sender, recipient.public_key(), schema).unwrap();
        assert_ne!(&payload[28..], MESSAGE);

        let opened =
            nemcrypt::decrypt_message(&payload, &recipient, sender.public_key(), schema).unwrap();
        assert_eq!(opened, MESSAGE);

        // both ends derive the same key
        assert_eq!(
            *derive_shared_key(sender.private_key().unwrap(), recipient.public_key(), schema)
                .unwrap(),
            *derive_shared_key(recipient.private_key().unwrap(), sender.public_key(), schema)
                .unwrap()
        );

        assert!(matches!(
            nemcrypt::decrypt_message(&payload, &stranger, sender.public_key(), schema),
            Err(Error::Cipher { .. })
        ));
    }
}

#[test]
fn encrypting_to_an_off_curve_key_is_an_error() {
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    let sender = KeyPair::from_private(SIGNING_KEY.clone(), SignSchema::Sha3);
    assert!(matches!(
        nemcrypt::encrypt_message(MESSAGE, &sender, &PublicKey::new(bytes), SignSchema::Sha3),
        Err(Error::InvalidKey { .. })
    ));
}
