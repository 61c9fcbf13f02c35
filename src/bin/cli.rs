// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Console driver for the katarun problem registry

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use katarun::config::RunnerConfig;
use katarun::problems;
use katarun::registry::{Difficulty, Registry, RunReport, RunReporter};

#[derive(Parser)]
#[command(name = "katarun")]
#[command(about = "Algorithm-practice runner", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output directory for reports
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered problems in number order
    List,

    /// Run one problem by number
    Run {
        /// Problem number
        number: u32,
    },

    /// Run every registered problem
    All {
        /// Filter problems by title substring or exact number
        #[arg(short, long)]
        filter: Option<String>,

        /// Write JSON and Markdown reports
        #[arg(long)]
        report: bool,
    },

    /// Regenerate a report from a saved JSON run
    Report {
        /// Input JSON report file
        #[arg(short, long)]
        input: String,

        /// Output format (json, markdown, terminal)
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RunnerConfig::load().unwrap_or_default();
    config.verbose |= cli.verbose;
    if let Some(ref output) = cli.output {
        config.output_dir = PathBuf::from(output);
    }

    let registry = problems::registry();

    if registry.is_empty() && !matches!(cli.command, Commands::Report { .. }) {
        println!("No solutions registered. Please add some problems.");
        return Ok(());
    }

    match &cli.command {
        Commands::List => list_problems(&registry),
        Commands::Run { number } => run_one(&registry, *number)?,
        Commands::All { filter, report } => {
            if let Some(filter) = filter {
                config.filters.push(filter.clone());
            }
            run_all(&registry, &config, *report)?;
        }
        Commands::Report { input, format } => generate_report(input, format, &config.output_dir)?,
    }

    Ok(())
}

fn list_problems(registry: &Registry) {
    println!("\n{}", "Available Solutions:".bold());
    println!("===================");
    for problem in registry.list_sorted() {
        println!(
            "#{}: {} [{}]",
            problem.number,
            problem.title,
            colorize_difficulty(problem.difficulty)
        );
    }
    println!();
}

fn colorize_difficulty(difficulty: Difficulty) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.as_str().green(),
        Difficulty::Medium => difficulty.as_str().yellow(),
        Difficulty::Hard => difficulty.as_str().red(),
    }
}

fn run_one(registry: &Registry, number: u32) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = registry.run_by_number(number, &mut out)?;
    out.flush()?;

    if let Some(result) = result {
        if !result.all_passed() {
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_all(registry: &Registry, config: &RunnerConfig, write_reports: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = registry.run_matching(&config.filters, &mut out)?;
    out.flush()?;

    RunReporter::print_summary(&report);

    if write_reports {
        std::fs::create_dir_all(&config.output_dir)?;

        let json_path = config.output_dir.join("run_report.json");
        RunReporter::write_json(&report, &json_path)?;

        let md_path = config.output_dir.join("run_report.md");
        RunReporter::write_markdown(&report, &md_path)?;

        if config.verbose {
            println!("Reports written to {}", config.output_dir.display());
        }
    }

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}

fn generate_report(input: &str, format: &str, output_dir: &Path) -> Result<()> {
    let json_content = std::fs::read_to_string(input)?;
    let report: RunReport = serde_json::from_str(&json_content)?;

    std::fs::create_dir_all(output_dir)?;

    match format.to_lowercase().as_str() {
        "json" => {
            let json_path = output_dir.join("report.json");
            RunReporter::write_json(&report, &json_path)?;
            println!(
                "{} Generated JSON report: {}",
                "Success:".green(),
                json_path.display()
            );
        }
        "markdown" | "md" => {
            let md_path = output_dir.join("report.md");
            RunReporter::write_markdown(&report, &md_path)?;
            println!(
                "{} Generated Markdown report: {}",
                "Success:".green(),
                md_path.display()
            );
        }
        "terminal" | "term" => {
            RunReporter::print_summary(&report);
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown format: {}. Use json, markdown, or terminal",
                format
            ));
        }
    }

    Ok(())
}
