//! Public key derivation and private-key reversal vectors

use std::collections::HashMap;

use nemcrypt::api::PrivateKey;
use nemcrypt::algorithms::SignSchema;
use nemcrypt::sign::KeyPair;

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::engine::check;
use crate::suites::kat::error::Result;
use crate::suites::kat::model::{TestCase, TestGroup};

fn derive(group: &TestGroup, case: &TestCase) -> Result<()> {
    let schema = group.sign_schema()?;
    let private_key = PrivateKey::from_bytes(&case.hex("sk")?)?;
    let expected = case.hex("pk")?;

    let public_key = nemcrypt::derive_public_key(&private_key, schema);
    check("pk", &expected, public_key.as_bytes())?;

    let key_pair = KeyPair::from_private(private_key, schema);
    check("key pair pk", &expected, key_pair.public_key().as_bytes())
}

fn reverse(group: &TestGroup, case: &TestCase) -> Result<()> {
    let schema = group.sign_schema()?;
    let sk = case.hex("sk")?;
    let expected = case.hex("reversed")?;

    check("reversed", &expected, &SignSchema::reverse(&sk))?;

    let private_key = PrivateKey::from_bytes(&sk)?;
    check(
        "hashed key bytes",
        &expected,
        &schema.private_key_bytes(&private_key)[..],
    )
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "key", "derive", derive);
    insert(map, "key", "reverse", reverse);
}
