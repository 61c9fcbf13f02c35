// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem 2: Add Two Numbers

use crate::harness::TestSession;
use crate::registry::{Difficulty, Problem};
use crate::support::list::{from_slice, to_vec, ListNode};

pub fn problem() -> Problem {
    Problem::new(2, "Add Two Numbers", run_tests).with_difficulty(Difficulty::Medium)
}

/// Sum two non-negative integers stored as reversed-digit lists.
fn add_two_numbers(
    mut l1: Option<Box<ListNode>>,
    mut l2: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut tail = &mut head;
    let mut carry = 0;

    while l1.is_some() || l2.is_some() || carry > 0 {
        let mut sum = carry;
        if let Some(node) = l1 {
            sum += node.val;
            l1 = node.next;
        }
        if let Some(node) = l2 {
            sum += node.val;
            l2 = node.next;
        }
        carry = sum / 10;
        let node = tail.insert(Box::new(ListNode::new(sum % 10)));
        tail = &mut node.next;
    }

    head
}

fn run_tests(t: &mut TestSession) {
    t.test_case("Example 1: 342 + 465 = 807");
    let sum = add_two_numbers(from_slice(&[2, 4, 3]), from_slice(&[5, 6, 4]));
    t.check_eq("342 + 465", to_vec(&sum), vec![7, 0, 8]);

    t.test_case("Example 2: 0 + 0");
    let sum = add_two_numbers(from_slice(&[0]), from_slice(&[0]));
    t.check_eq("0 + 0", to_vec(&sum), vec![0]);

    t.test_case("Example 3: carry ripples through");
    let sum = add_two_numbers(from_slice(&[9, 9, 9, 9, 9, 9, 9]), from_slice(&[9, 9, 9, 9]));
    t.check_eq("9999999 + 9999", to_vec(&sum), vec![8, 9, 9, 9, 0, 0, 0, 1]);

    t.test_case("Uneven lengths");
    let sum = add_two_numbers(from_slice(&[1]), from_slice(&[9, 9]));
    t.check_eq("1 + 99", to_vec(&sum), vec![0, 0, 1]);

    t.test_case("Empty operands");
    t.check_eq("empty + empty", add_two_numbers(None, None), None);
}
