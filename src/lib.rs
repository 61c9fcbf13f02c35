// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Katarun practice scaffold
//!
//! A registry of small, self-contained algorithm problems, each carrying its
//! own test procedure, plus the assertion harness those procedures drive.
//! A CLI driver lists problems, runs one by number, or runs the whole catalog
//! and emits structured run reports.

pub mod config;
pub mod harness;
pub mod problems;
pub mod registry;
pub mod support;

pub use config::RunnerConfig;
pub use harness::TestSession;
pub use registry::{Difficulty, Problem, ProblemRunResult, Registry, RunReport, RunReporter};
