// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Shared helpers for problem test procedures

pub mod list;

pub use list::ListNode;
