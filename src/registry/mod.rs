// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Problem catalog: registration, sorted listing, and execution

pub mod catalog;
pub mod report;
pub mod types;

pub use catalog::Registry;
pub use report::{ProblemRunResult, RunReport, RunReporter};
pub use types::{Difficulty, Problem, TestFn};
