// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Practice problems and the manifest that registers them

pub mod add_two_numbers;
pub mod climbing_stairs;
pub mod longest_substring;
pub mod merge_sorted_array;
pub mod palindrome_number;
pub mod reverse_integer;
pub mod two_sum;
pub mod valid_palindrome;

use crate::registry::{Problem, Registry};

/// Every problem in the scaffold, assembled in one place so the entry point
/// never enumerates modules by hand and no load-time side effects are needed.
pub fn manifest() -> Vec<Problem> {
    vec![
        two_sum::problem(),
        add_two_numbers::problem(),
        longest_substring::problem(),
        reverse_integer::problem(),
        palindrome_number::problem(),
        climbing_stairs::problem(),
        merge_sorted_array::problem(),
        valid_palindrome::problem(),
    ]
}

/// A registry populated with the full manifest.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    for problem in manifest() {
        registry.register(problem);
    }
    registry
}
