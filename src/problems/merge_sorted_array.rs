// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 88: Merge Sorted Array

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};

pub fn problem() -> Problem {
    Problem::new(88, "Merge Sorted Array", run_tests).with_difficulty(Difficulty::Easy)
}

/// Merge `nums2` into `nums1` in place. `nums1` holds `m` live values followed
/// by `nums2.len()` slots of scratch space; filling from the back never
/// clobbers unread values.
fn merge(nums1: &mut [i32], m: usize, nums2: &[i32]) {
    let mut i = m;
    let mut j = nums2.len();
    let mut k = m + nums2.len();
    while j > 0 {
        if i > 0 && nums1[i - 1] > nums2[j - 1] {
            nums1[k - 1] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[k - 1] = nums2[j - 1];
            j -= 1;
        }
        k -= 1;
    }
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1");
    let mut nums1 = vec![1, 2, 3, 0, 0, 0];
    merge(&mut nums1, 3, &[2, 5, 6]);
    t.check_eq("[1,2,3] + [2,5,6]", nums1, vec![1, 2, 2, 3, 5, 6]);

    t.test_case("Second array empty");
    let mut nums1 = vec![1];
    merge(&mut nums1, 1, &[]);
    t.check_eq("[1] + []", nums1, vec![1]);

    t.test_case("First array empty");
    let mut nums1 = vec![0];
    merge(&mut nums1, 0, &[1]);
    t.check_eq("[] + [1]", nums1, vec![1]);

    t.test_case("All of nums2 smaller");
    let mut nums1 = vec![4, 5, 6, 0, 0, 0];
    merge(&mut nums1, 3, &[1, 2, 3]);
    t.check_eq("[4,5,6] + [1,2,3]", nums1, vec![1, 2, 3, 4, 5, 6]);

    t.test_case("Negative values interleave");
    let mut nums1 = vec![-3, 0, 7, 0, 0];
    merge(&mut nums1, 3, &[-5, 4]);
    t.check_eq("[-3,0,7] + [-5,4]", nums1, vec![-5, -3, 0, 4, 7]);
}
