// tests/kat_tests.rs
use nemcrypt_tests::suites::kat::{loader, runner::Runner, engine::NemEngine};

fn run(name: &str) -> usize {
    let engine = NemEngine;
    let suite = loader::load_suite_by_name(name)
        .unwrap_or_else(|e| panic!("Failed to load {} suite: {}", name, e));

    println!("Running known-answer suite: {}", suite.suite_name);
    let report = Runner::new(&engine)
        .run_suite(&suite)
        .unwrap_or_else(|e| panic!("{} vectors failed: {}", name, e));
    report.passed
}

#[test]
fn test_hash_kat() {
    // 3 messages x 2 sizes x 2 schemas
    assert_eq!(run("hash"), 12);
}

#[test]
fn test_key_kat() {
    // 4 keys x 2 schemas, plus 7 reversals
    assert_eq!(run("key"), 15);
}

#[test]
fn test_signature_kat() {
    // per schema: 2 signing vectors and 7 verification cases
    assert_eq!(run("signature"), 18);
}

#[test]
fn test_merkle_kat() {
    assert_eq!(run("merkle"), 6);
}

#[test]
fn test_shared_key_kat() {
    // per schema: 3 agreement cases and 4 decryption cases
    assert_eq!(run("shared_key"), 14);
}

#[test]
fn every_vector_file_loads() {
    let suites = loader::load_all_suites().expect("vector directory loads");
    let names: Vec<&str> = suites.iter().map(|s| s.algorithm.as_str()).collect();
    assert_eq!(names, ["hash", "key", "merkle", "shared_key", "signature"]);
}
