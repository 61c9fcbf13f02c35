// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 70: Climbing Stairs

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(70, "Climbing Stairs", run_tests).with_difficulty(Difficulty::Easy)
}

/// Distinct ways to climb `n` steps taking 1 or 2 at a time. Iterative
/// Fibonacci in u64; exact for any n a practice input will use.
fn climb_stairs(n: u32) -> u64 {
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 0..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    t.check_eq("climb_stairs(2)", climb_stairs(2), 2);

    t.test_case("Example 2");
    t.check_eq("climb_stairs(3)", climb_stairs(3), 3);

    t.test_case("Small cases");
    t.check_eq("climb_stairs(0)", climb_stairs(0), 1);
    t.check_eq("climb_stairs(1)", climb_stairs(1), 1);

    t.test_case("Larger inputs");
    t.check_eq("climb_stairs(10)", climb_stairs(10), 89);
    t.check_eq("climb_stairs(45)", climb_stairs(45), 1_836_311_903);
}
