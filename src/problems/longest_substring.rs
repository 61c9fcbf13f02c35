// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 3: Longest Substring Without Repeating Characters

use std::collections::HashMap;

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(3, "Longest Substring Without Repeating Characters", run_tests)
        .with_difficulty(Difficulty::Medium)
}

/// Sliding window over char positions; the window start jumps past the
/// previous occurrence of a repeated character.
fn length_of_longest_substring(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (i, c) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&c) {
            if prev >= start {
                start = prev + 1;
            }
        }
        last_seen.insert(c, i);
        best = best.max(i - start + 1);
    }
    best
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    t.check_eq("abcabcbb", length_of_longest_substring("abcabcbb"), 3);

    t.test_case("Example 2");
    t.check_eq("bbbbb", length_of_longest_substring("bbbbb"), 1);

    t.test_case("Example 3");
    t.check_eq("pwwkew", length_of_longest_substring("pwwkew"), 3);

    t.test_case("Empty and single");
    t.check_eq("empty", length_of_longest_substring(""), 0);
    t.check_eq("single", length_of_longest_substring("a"), 1);

    t.test_case("Repeat far behind the window");
    t.check_eq("abba", length_of_longest_substring("abba"), 2);
    t.check_eq("tmmzuxt", length_of_longest_substring("tmmzuxt"), 5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_does_not_move_backwards() {
        // 'a' repeats outside the current window; start must not regress
        assert_eq!(length_of_longest_substring("abba"), 2);
    }

    #[test]
    fn all_unique() {
        assert_eq!(length_of_longest_substring("abcdef"), 6);
    }
}
