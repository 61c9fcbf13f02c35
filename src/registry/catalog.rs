// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! The registry itself: owns the problem list and runs entries

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;

use super::report::{ProblemRunResult, RunReport};
use super::types::Problem;
use crate::harness::TestSession;

const BANNER: &str = "========================================";

/// Catalog of registered problems. Constructed once in the entry point and
/// handed to the driver; there is no hidden global instance.
#[derive(Default)]
pub struct Registry {
    problems: Vec<Problem>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate numbers are allowed but flagged on stderr;
    /// the first-registered entry wins number lookup, and listings show all.
    pub fn register(&mut self, problem: Problem) {
        if let Some(existing) = self.problems.iter().find(|p| p.number == problem.number) {
            eprintln!(
                "{} duplicate problem number #{}: \"{}\" already registered as \"{}\"",
                "Warning:".yellow(),
                problem.number,
                problem.title,
                existing.title
            );
        }
        self.problems.push(problem);
    }

    pub fn count(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// All entries ascending by number. `sort_by_key` is stable, so duplicate
    /// numbers keep their relative registration order.
    pub fn list_sorted(&self) -> Vec<&Problem> {
        let mut sorted: Vec<&Problem> = self.problems.iter().collect();
        sorted.sort_by_key(|p| p.number);
        sorted
    }

    /// Run the first entry (in registration order) with a matching number.
    /// An unknown number prints `Problem #N not found.` and runs nothing.
    pub fn run_by_number(
        &self,
        number: u32,
        out: &mut dyn Write,
    ) -> Result<Option<ProblemRunResult>> {
        match self.problems.iter().find(|p| p.number == number) {
            Some(problem) => Ok(Some(self.execute(problem, out)?)),
            None => {
                writeln!(out, "Problem #{} not found.", number)?;
                Ok(None)
            }
        }
    }

    /// Run every entry in ascending-number order.
    pub fn run_all(&self, out: &mut dyn Write) -> Result<RunReport> {
        self.run_matching(&[], out)
    }

    /// Run entries whose title or number matches any filter, in ascending
    /// order. Empty filters match everything.
    pub fn run_matching(&self, filters: &[String], out: &mut dyn Write) -> Result<RunReport> {
        writeln!(out, "\nRunning all solutions...")?;
        let mut report = RunReport::new();
        for problem in self.list_sorted() {
            if !matches_filters(filters, problem) {
                continue;
            }
            report.add_result(self.execute(problem, out)?);
            writeln!(out)?;
        }
        Ok(report)
    }

    fn execute(&self, problem: &Problem, out: &mut dyn Write) -> Result<ProblemRunResult> {
        writeln!(out, "\n{}", BANNER)?;
        writeln!(out, "Problem #{}: {}", problem.number, problem.title)?;
        writeln!(out, "{}\n", BANNER)?;

        let start = Instant::now();
        let mut session = TestSession::start(problem.title.as_str());
        (problem.test_fn)(&mut session);
        session.print_summary();
        let duration = start.elapsed();

        out.write_all(session.transcript().as_bytes())?;
        writeln!(out, "{}", BANNER)?;

        Ok(ProblemRunResult::from_session(problem, &session, duration))
    }
}

fn matches_filters(filters: &[String], problem: &Problem) -> bool {
    if filters.is_empty() {
        return true;
    }
    filters
        .iter()
        .any(|f| problem.title.contains(f.as_str()) || problem.number.to_string() == *f)
}
