// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 9: Palindrome Number

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(9, "Palindrome Number", run_tests).with_difficulty(Difficulty::Easy)
}

/// Digit reversal in i64 so the reversed value cannot overflow.
fn is_palindrome(x: i32) -> bool {
    if x < 0 {
        return false;
    }
    if x < 10 {
        return true;
    }

    let mut remaining = i64::from(x);
    let mut reversed: i64 = 0;
    while remaining > 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }
    reversed == i64::from(x)
}

fn run_tests(t: &mut TestSession) {
    t.check_eq("is_palindrome(121)", is_palindrome(121), true);
    t.check_eq("is_palindrome(1221)", is_palindrome(1221), true);
    t.check_eq("is_palindrome(12321)", is_palindrome(12321), true);
    t.check_eq("is_palindrome(0)", is_palindrome(0), true);
    t.check_eq("is_palindrome(9)", is_palindrome(9), true);

    t.check_eq("is_palindrome(123)", is_palindrome(123), false);
    t.check_eq("is_palindrome(10)", is_palindrome(10), false);
    t.check_eq("is_palindrome(-121)", is_palindrome(-121), false);
    t.check_eq("is_palindrome(-1)", is_palindrome(-1), false);

    t.test_case("Large palindrome");
    t.check_eq("is_palindrome(1234554321)", is_palindrome(1_234_554_321), true);

    t.test_case("Numbers ending with zero");
    t.check_eq("is_palindrome(1000)", is_palindrome(1000), false);

    t.test_case("Near-max palindrome");
    t.check_eq("is_palindrome(2147447412)", is_palindrome(2_147_447_412), true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negatives_are_never_palindromes() {
        assert!(!is_palindrome(-121));
    }

    #[test]
    fn near_max_does_not_overflow() {
        assert!(is_palindrome(2_147_447_412));
    }

    #[test]
    fn trailing_zero_fails() {
        assert!(!is_palindrome(10));
    }
}
