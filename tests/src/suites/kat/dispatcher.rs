//! Registry mapping (algorithm, function) pairs to handlers

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::model::{TestCase, TestGroup};
use super::error::Result;

/// Registry key for looking up handlers
#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub struct DispatchKey {
    pub algo: String,
    pub function: String, // "function" from the group JSON (e.g. "sign", "verify")
}

/// Handler function type
pub type HandlerFn = fn(&TestGroup, &TestCase) -> Result<()>;

/// Global registry of handlers
pub static REGISTRY: Lazy<HashMap<DispatchKey, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<DispatchKey, HandlerFn>::new();

    super::handlers::hash::register(&mut m);
    super::handlers::key::register(&mut m);
    super::handlers::merkle::register(&mut m);
    super::handlers::shared_key::register(&mut m);
    super::handlers::signature::register(&mut m);
    m
});

/// Helper function for registering handlers
pub fn insert(
    map: &mut HashMap<DispatchKey, HandlerFn>,
    algo: &str,     // e.g. "hash", "signature"
    function: &str, // e.g. "derive", "verify"
    handler: HandlerFn,
) {
    map.insert(
        DispatchKey {
            algo: algo.to_string(),
            function: function.to_string(),
        },
        handler,
    );
}
