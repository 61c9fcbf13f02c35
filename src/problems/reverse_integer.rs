// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 7: Reverse Integer

use crate::harness::TestSession;
use crate::registry::Problem;

pub fn problem() -> Problem {
    Problem::new(7, "Reverse Integer", run_tests)
}

/// Reverse the decimal digits of `x`; 0 on 32-bit overflow.
fn reverse(mut x: i32) -> i32 {
    let mut reversed: i32 = 0;
    while x != 0 {
        let digit = x % 10;
        x /= 10;
        reversed = match reversed.checked_mul(10).and_then(|r| r.checked_add(digit)) {
            Some(r) => r,
            None => return 0,
        };
    }
    reversed
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    t.check_eq("reverse(123)", reverse(123), 321);

    t.test_case("Example 2");
    t.check_eq("reverse(-123)", reverse(-123), -321);

    t.test_case("Example 3");
    t.check_eq("reverse(120)", reverse(120), 21);

    t.test_case("Zero");
    t.check_eq("reverse(0)", reverse(0), 0);

    t.test_case("Overflow clamps to zero");
    t.check_eq("reverse(1534236469)", reverse(1_534_236_469), 0);
    t.check_eq("reverse(i32::MIN)", reverse(i32::MIN), 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_sign() {
        assert_eq!(reverse(-123), -321);
    }

    #[test]
    fn drops_trailing_zeros() {
        assert_eq!(reverse(120), 21);
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(reverse(i32::MAX), 0);
        assert_eq!(reverse(i32::MIN), 0);
    }
}
