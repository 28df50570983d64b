//! Pure data model for the JSON known-answer vectors.
//! No dependency on the rest of the framework.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use nemcrypt::algorithms::SignSchema;

use super::error::{EngineError, Result};

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid / fail
    #[serde(flatten)]
    pub inputs: HashMap<String, Value>,
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    fn field(&self, name: &'static str) -> Result<&Value> {
        self.inputs.get(name).ok_or(EngineError::MissingField(name))
    }

    /// A string field
    pub fn string(&self, name: &'static str) -> Result<&str> {
        self.field(name)?
            .as_str()
            .ok_or_else(|| EngineError::InvalidData(format!("{} is not a string", name)))
    }

    /// A hex-encoded byte field
    pub fn hex(&self, name: &'static str) -> Result<Vec<u8>> {
        Ok(hex::decode(self.string(name)?)?)
    }

    /// An array of hex-encoded byte strings
    pub fn hex_list(&self, name: &'static str) -> Result<Vec<Vec<u8>>> {
        let items = self
            .field(name)?
            .as_array()
            .ok_or_else(|| EngineError::InvalidData(format!("{} is not an array", name)))?;

        items
            .iter()
            .map(|item| {
                let s = item.as_str().ok_or_else(|| {
                    EngineError::InvalidData(format!("{} holds a non-string entry", name))
                })?;
                Ok(hex::decode(s)?)
            })
            .collect()
    }

    /// An unsigned integer field
    pub fn number(&self, name: &'static str) -> Result<u64> {
        self.field(name)?
            .as_u64()
            .ok_or_else(|| EngineError::InvalidData(format!("{} is not an unsigned integer", name)))
    }
}

/// ----------------------------------------------------------------
/// 2. Test-group (shares one schema and function)
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u32,
    pub schema: String,
    pub function: String,
    /// Filled in from the suite by the loader
    #[serde(default)]
    pub algorithm: String,
    pub tests: Vec<TestCase>,
    /// Group-level values shared by every case (keys, sizes, ...)
    #[serde(flatten)]
    pub defaults: HashMap<String, Value>,
}

impl TestGroup {
    pub fn sign_schema(&self) -> Result<SignSchema> {
        self.schema
            .parse()
            .map_err(|e: nemcrypt::Error| EngineError::InvalidData(e.to_string()))
    }
}

/// ----------------------------------------------------------------
/// 3. Top-level suite file
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub suite_name: String,
    pub algorithm: String,
    pub groups: Vec<TestGroup>,
}
