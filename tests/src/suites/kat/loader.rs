//! Loads known-answer vectors from JSON files.

use crate::suites::kat::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

/// ----------------------------------------------------------------
/// Get the path to the JSON vectors
/// ----------------------------------------------------------------
fn kat_json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat_json")
}

/// ----------------------------------------------------------------
/// Parse a suite and push suite-level values down to each case
/// ----------------------------------------------------------------
pub fn parse_suite(json: &str) -> Result<TestSuite, String> {
    let mut suite: TestSuite =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let algorithm = suite.algorithm.trim().to_ascii_lowercase();
    suite.algorithm = algorithm.clone();

    for group in &mut suite.groups {
        group.algorithm = algorithm.clone();
        group.function = group.function.trim().to_ascii_lowercase();

        // Group-level values (keys, sizes) apply to every case that doesn't
        // override them
        for case in &mut group.tests {
            for (k, v) in &group.defaults {
                case.inputs.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
    }

    Ok(suite)
}

/// ----------------------------------------------------------------
/// Public helper to load a specific suite by file stem
/// ----------------------------------------------------------------
pub fn load_suite_by_name(suite_name: &str) -> Result<TestSuite, String> {
    let file = kat_json_dir().join(format!("{}.json", suite_name));
    let json = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    parse_suite(&json)
}

/// ----------------------------------------------------------------
/// Load every suite in the vector directory, sorted by file name
/// ----------------------------------------------------------------
pub fn load_all_suites() -> Result<Vec<TestSuite>, String> {
    let dir = kat_json_dir();
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    files.sort();

    files
        .iter()
        .map(|file| {
            let json = fs::read_to_string(file)
                .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
            parse_suite(&json)
        })
        .collect()
}
