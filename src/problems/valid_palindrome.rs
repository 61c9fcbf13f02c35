// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 125: Valid Palindrome

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(125, "Valid Palindrome", run_tests).with_difficulty(Difficulty::Easy)
}

/// Palindrome check over alphanumeric characters only, case-insensitively.
fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    chars.iter().eq(chars.iter().rev())
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    t.check_eq(
        "\"A man, a plan, a canal: Panama\"",
        is_palindrome("A man, a plan, a canal: Panama"),
        true,
    );

    t.test_case("Example 2");
    t.check_eq("\"race a car\"", is_palindrome("race a car"), false);

    t.test_case("Punctuation only collapses to empty");
    t.check_eq("\" \"", is_palindrome(" "), true);
    t.check_eq("\".,!\"", is_palindrome(".,!"), true);

    t.test_case("Digits count");
    t.check_eq("\"0P\"", is_palindrome("0P"), false);
    t.check_eq("\"1a1\"", is_palindrome("1a1"), true);
}
