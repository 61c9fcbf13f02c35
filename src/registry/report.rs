// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Structured run results and report generation

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::{Difficulty, Problem};
use crate::harness::TestSession;

// Custom serialization for Duration
fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Ok(Duration::from_secs_f64(secs))
}

/// Assertion accounting for one problem run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRunResult {
    pub number: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub duration: Duration,
}

impl ProblemRunResult {
    pub fn from_session(problem: &Problem, session: &TestSession, duration: Duration) -> Self {
        Self {
            number: problem.number,
            title: problem.title.clone(),
            difficulty: problem.difficulty,
            passed: session.passed(),
            failed: session.failed(),
            total: session.total(),
            duration,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Aggregate result of a full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: String,
    pub total_problems: usize,
    pub total_assertions: usize,
    pub total_passed: usize,
    pub total_failed: usize,
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub total_duration: Duration,
    pub results: Vec<ProblemRunResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_problems: 0,
            total_assertions: 0,
            total_passed: 0,
            total_failed: 0,
            total_duration: Duration::ZERO,
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ProblemRunResult) {
        self.total_problems += 1;
        self.total_assertions += result.total;
        self.total_passed += result.passed;
        self.total_failed += result.failed;
        self.total_duration += result.duration;
        self.results.push(result);
    }

    pub fn pass_rate(&self) -> f32 {
        if self.total_assertions == 0 {
            0.0
        } else {
            (self.total_passed as f32 / self.total_assertions as f32) * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.total_failed > 0
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Report generator: JSON and Markdown files plus a terminal summary.
pub struct RunReporter;

impl RunReporter {
    /// Write JSON report
    pub fn write_json(report: &RunReport, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write Markdown report
    pub fn write_markdown(report: &RunReport, path: impl AsRef<Path>) -> Result<()> {
        let mut md = String::new();

        md.push_str("# Katarun Run Report\n\n");
        md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));
        md.push_str("---\n\n");

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Problems:** {}\n", report.total_problems));
        md.push_str(&format!("- **Assertions:** {}\n", report.total_assertions));
        md.push_str(&format!(
            "- **Passed:** {} ({:.1}%)\n",
            report.total_passed,
            report.pass_rate()
        ));
        md.push_str(&format!("- **Failed:** {}\n", report.total_failed));
        md.push_str(&format!(
            "- **Duration:** {:.2}s\n\n",
            report.total_duration.as_secs_f64()
        ));
        md.push_str("---\n\n");

        md.push_str("## Problems\n\n");
        md.push_str("| # | Title | Difficulty | Passed | Failed | Duration |\n");
        md.push_str("|---|-------|------------|--------|--------|----------|\n");
        for result in &report.results {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.3}s |\n",
                result.number,
                result.title,
                result.difficulty.as_str(),
                result.passed,
                result.failed,
                result.duration.as_secs_f64()
            ));
        }
        md.push('\n');

        let failed: Vec<_> = report.results.iter().filter(|r| !r.all_passed()).collect();
        if !failed.is_empty() {
            md.push_str("## Failed Problems\n\n");
            for result in failed {
                md.push_str(&format!(
                    "- `#{} {}`: {} of {} assertions failed\n",
                    result.number, result.title, result.failed, result.total
                ));
            }
            md.push('\n');
        }

        fs::write(path, md)?;
        Ok(())
    }

    /// Print terminal summary
    pub fn print_summary(report: &RunReport) {
        println!("\n{}", "═".repeat(80).white());
        println!("{}", "Run Report".bold());
        println!("{}", "═".repeat(80).white());
        println!("  {} {}", "Timestamp:".white(), report.timestamp.cyan());
        println!(
            "  {} {}",
            "Problems:".white(),
            report.total_problems.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Assertions:".white(),
            report.total_assertions.to_string().cyan()
        );
        println!(
            "  {} {} ({:.1}%)",
            "Passed:".white(),
            report.total_passed.to_string().green(),
            report.pass_rate()
        );
        println!(
            "  {} {}",
            "Failed:".white(),
            if report.total_failed > 0 {
                report.total_failed.to_string().red()
            } else {
                report.total_failed.to_string().green()
            }
        );
        println!(
            "  {} {:.2}s",
            "Duration:".white(),
            report.total_duration.as_secs_f64()
        );

        println!("\n{}", "Problem Results".bold());
        println!("{}", "─".repeat(80).white());

        for result in &report.results {
            let status_icon = if result.all_passed() {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "  {} #{} {}: {} passed, {} failed ({:.3}s)",
                status_icon,
                result.number,
                result.title.cyan(),
                result.passed.to_string().green(),
                if result.failed > 0 {
                    result.failed.to_string().red()
                } else {
                    result.failed.to_string().white()
                },
                result.duration.as_secs_f64()
            );
        }

        println!("{}", "═".repeat(80).white());
    }
}
