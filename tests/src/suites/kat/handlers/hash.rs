//! Schema hash vectors: `nemcrypt::hash` at 32 and 64 bytes

use std::collections::HashMap;

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::engine::check;
use crate::suites::kat::error::Result;
use crate::suites::kat::model::{TestCase, TestGroup};

fn hash_digest(group: &TestGroup, case: &TestCase) -> Result<()> {
    let schema = group.sign_schema()?;
    let size = case.number("size")? as usize;
    let msg = case.hex("msg")?;

    let one_shot = nemcrypt::hash(schema, size, &[&msg])?;
    check("md", &case.hex("md")?, &one_shot)?;

    // byte-at-a-time through the variadic form must agree
    let pieces: Vec<&[u8]> = msg.chunks(1).collect();
    let split = nemcrypt::hash(schema, size, &pieces)?;
    check("md (split input)", &one_shot, &split)
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "hash", "hash", hash_digest);
}
