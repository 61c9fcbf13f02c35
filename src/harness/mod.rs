// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Assertion harness driven by each problem's test procedure

pub mod session;

pub use session::TestSession;

/// Literal substrings emitted in run output. Drivers that capture the output
/// stream key off these for classification and coloring, so they must stay
/// byte-for-byte stable.
pub mod markers {
    pub const PASS: &str = "[PASS]";
    pub const FAIL: &str = "[FAIL]";
    pub const TESTING: &str = "Testing ";
    pub const TEST_CASE: &str = "Test Case:";
    pub const PROBLEM: &str = "Problem #";
    pub const PASSED: &str = "Passed ";
    pub const ALL_PASSED: &str = "All tests passed!";
    pub const TESTS_FAILED: &str = "tests failed";
}
