// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Per-session pass/fail accounting and assertion surface

use std::fmt::Debug;
use std::panic::Location;

use colored::Colorize;

use super::markers;

/// One named test session. Owns its own counters, so there is no global
/// state to reset between problems; constructing the session *is* the reset.
///
/// Assertion output accumulates in an in-memory transcript rather than going
/// straight to stdout. The caller flushes the transcript to its own sink after
/// the run, which lets a driver capture and re-render the marker lines.
pub struct TestSession {
    name: String,
    passed: usize,
    total: usize,
    transcript: String,
}

impl TestSession {
    /// Open a session and record the `Testing <name>...` header.
    pub fn start(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut session = Self {
            name,
            passed: 0,
            total: 0,
            transcript: String::new(),
        };
        session
            .transcript
            .push_str(&format!("{}{}...\n\n", markers::TESTING, session.name));
        session
    }

    /// Equality assertion. Records a PASS line with the expected value, or a
    /// FAIL line with both renderings. Never halts the remaining assertions.
    ///
    /// The reported line number is the call site, via `#[track_caller]`.
    #[track_caller]
    pub fn check_eq<T: PartialEq + Debug>(&mut self, label: &str, actual: T, expected: T) -> bool {
        let line = Location::caller().line();
        self.total += 1;
        if actual == expected {
            self.passed += 1;
            self.transcript.push_str(&format!(
                "{} Line {}: {} == {:?}\n",
                markers::PASS.green(),
                line,
                label,
                expected
            ));
            true
        } else {
            self.transcript
                .push_str(&format!("{} Line {}: {}\n", markers::FAIL.red(), line, label));
            self.transcript
                .push_str(&format!("       Expected: {:?}\n", expected));
            self.transcript
                .push_str(&format!("       Actual:   {:?}\n", actual));
            false
        }
    }

    /// Generic boolean assertion with a human-readable description.
    pub fn check(&mut self, condition: bool, description: &str) -> bool {
        self.total += 1;
        if condition {
            self.passed += 1;
            self.transcript
                .push_str(&format!("{} {}\n", markers::PASS.green(), description));
            true
        } else {
            self.transcript
                .push_str(&format!("{} {}\n", markers::FAIL.red(), description));
            false
        }
    }

    /// Record a `Test Case:` divider ahead of a group of assertions.
    pub fn test_case(&mut self, description: &str) {
        self.transcript
            .push_str(&format!("\n{} {}\n", markers::TEST_CASE, description));
    }

    /// Append the `Passed <p>/<t> tests` summary line. Read-only with respect
    /// to the counters, so calling it twice reports identical figures.
    pub fn print_summary(&mut self) {
        let verdict = if self.passed == self.total {
            format!(" - {}", markers::ALL_PASSED).green().to_string()
        } else {
            format!(" - {} {}", self.failed(), markers::TESTS_FAILED)
                .red()
                .to_string()
        };
        self.transcript.push_str(&format!(
            "\n{}{}/{} tests{}\n",
            markers::PASSED,
            self.passed,
            self.total,
            verdict
        ));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Everything recorded so far, marker lines included.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let session = TestSession::start("Empty");
        assert_eq!(session.passed(), 0);
        assert_eq!(session.total(), 0);
        assert!(session.all_passed());
    }

    #[test]
    fn check_eq_returns_outcome() {
        let mut session = TestSession::start("Eq");
        assert!(session.check_eq("four", 4, 4));
        assert!(!session.check_eq("four vs five", 4, 5));
        assert_eq!(session.passed(), 1);
        assert_eq!(session.total(), 2);
        assert_eq!(session.failed(), 1);
    }

    #[test]
    fn failure_records_both_renderings() {
        colored::control::set_override(false);
        let mut session = TestSession::start("Vectors");
        session.check_eq("seq", vec![1, 2, 3], vec![1, 2, 4]);
        assert!(session.transcript().contains("Expected: [1, 2, 4]"));
        assert!(session.transcript().contains("Actual:   [1, 2, 3]"));
    }

    #[test]
    fn summary_wording_matches_contract() {
        colored::control::set_override(false);
        let mut session = TestSession::start("X");
        session.check_eq("eq", 4, 4);
        session.check_eq("eq", 4, 5);
        session.print_summary();
        assert!(session
            .transcript()
            .contains("Passed 1/2 tests - 1 tests failed"));
    }
}
