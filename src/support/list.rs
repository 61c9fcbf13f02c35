// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Singly linked list helpers for list-based problems

/// LeetCode-style singly linked list node, owned through boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }
}

/// Build a list from a slice; an empty slice yields `None`.
pub fn from_slice(values: &[i32]) -> Option<Box<ListNode>> {
    let mut head = None;
    for &val in values.iter().rev() {
        head = Some(Box::new(ListNode { val, next: head }));
    }
    head
}

/// Collect a list's values front to back.
pub fn to_vec(head: &Option<Box<ListNode>>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut current = head;
    while let Some(node) = current {
        out.push(node.val);
        current = &node.next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let list = from_slice(&[2, 4, 3]);
        assert_eq!(to_vec(&list), vec![2, 4, 3]);
    }

    #[test]
    fn empty_slice_is_no_list() {
        assert_eq!(from_slice(&[]), None);
        assert!(to_vec(&None).is_empty());
    }
}
