//! Deterministic signing and verification vectors

use std::collections::HashMap;

use nemcrypt::api::{PrivateKey, PublicKey, Signature};
use nemcrypt::sign::KeyPair;

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::engine::check;
use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{TestCase, TestGroup};

fn sign(group: &TestGroup, case: &TestCase) -> Result<()> {
    let schema = group.sign_schema()?;
    let key_pair = KeyPair::from_private(PrivateKey::from_bytes(&case.hex("sk")?)?, schema);
    let msg = case.hex("msg")?;

    let signature = nemcrypt::sign(&msg, &key_pair, schema)?;
    check("sig", &case.hex("sig")?, signature.as_bytes())?;

    if !nemcrypt::verify(&msg, &signature, key_pair.public_key(), schema)? {
        return Err(EngineError::Mismatch {
            expected: "fresh signature verifies".into(),
            actual: "rejected".into(),
        });
    }
    Ok(())
}

fn verify(group: &TestGroup, case: &TestCase) -> Result<()> {
    let schema = group.sign_schema()?;
    let public_key = PublicKey::from_bytes(&case.hex("pk")?)?;
    let signature = Signature::from_bytes(&case.hex("sig")?)?;

    if nemcrypt::verify(&case.hex("msg")?, &signature, &public_key, schema)? {
        Ok(())
    } else {
        Err(EngineError::Rejected(format!(
            "signature {} does not verify",
            signature
        )))
    }
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "signature", "sign", sign);
    insert(map, "signature", "verify", verify);
}
