// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 1: Two Sum

use std::collections::HashMap;

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(1, "Two Sum", run_tests).with_difficulty(Difficulty::Easy)
}

/// Indices of the two numbers that add up to `target`, in ascending order.
fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());
    for (i, &n) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - n)) {
            return Some((j, i));
        }
        seen.insert(n, i);
    }
    None
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    t.check_eq("two_sum([2,7,11,15], 9)", two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));

    t.test_case("Example 2");
    t.check_eq("two_sum([3,2,4], 6)", two_sum(&[3, 2, 4], 6), Some((1, 2)));

    t.test_case("Example 3");
    t.check_eq("two_sum([3,3], 6)", two_sum(&[3, 3], 6), Some((0, 1)));

    t.test_case("No matching pair");
    t.check_eq("two_sum([1,2,3], 100)", two_sum(&[1, 2, 3], 100), None);

    t.test_case("Negative values");
    t.check_eq("two_sum([-1,-2,-3,-4,-5], -8)", two_sum(&[-1, -2, -3, -4, -5], -8), Some((2, 4)));
}
