//! Generic driver that executes a `TestSuite` using a pluggable engine.

use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{TestCase, TestGroup, TestSuite};

/// Trait every back-end must implement.
pub trait KatEngine {
    /// Execute one test case and return `Ok(())` on success.
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Tally of one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Whether `outcome` is what the case's `expectedResult` asks for
    ///
    /// `valid` cases must succeed, `invalid` cases must be rejected by the
    /// operation itself and `fail` cases must error before any check is made.
    fn matches_expectation(outcome: &Result<()>, expected: &str) -> bool {
        match (outcome, expected) {
            (Ok(()), "valid") => true,
            (Err(EngineError::Rejected(_)), "invalid") => true,
            (Err(EngineError::Crypto(_)), "fail") => true,
            _ => false,
        }
    }

    pub fn run_suite(&self, suite: &TestSuite) -> std::result::Result<Report, String> {
        let mut report = Report::default();

        for group in &suite.groups {
            println!(
                "Running group {}: {} - {} ({})",
                group.group_id, group.algorithm, group.function, group.schema
            );

            for case in &group.tests {
                let outcome = self.engine.run(group, case);
                let expected = case.expected_result.as_str();

                if Self::matches_expectation(&outcome, expected) {
                    report.passed += 1;
                    continue;
                }

                report.failed += 1;
                match outcome {
                    Ok(()) => eprintln!(
                        "Group {} case {} succeeded but expected {}",
                        group.group_id, case.test_id, expected
                    ),
                    Err(e) => eprintln!(
                        "Group {} case {} ({}) failed: {}",
                        group.group_id,
                        case.test_id,
                        case.comment.as_deref().unwrap_or("no comment"),
                        e
                    ),
                }
            }
        }

        println!(
            "{}: {} passed, {} failed",
            suite.suite_name, report.passed, report.failed
        );

        if report.failed > 0 {
            Err(format!("{} tests failed", report.failed))
        } else {
            Ok(report)
        }
    }
}
