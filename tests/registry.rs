// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Integration tests for the problem registry

use katarun::harness::TestSession;
use katarun::registry::{Difficulty, Problem, Registry, RunReport, RunReporter};

fn noop(_: &mut TestSession) {}

fn one_pass(t: &mut TestSession) {
    t.check(true, "ran exactly once");
}

fn one_pass_one_fail(t: &mut TestSession) {
    t.check(true, "passing assertion");
    t.check(false, "failing assertion");
}

fn run_all_to_string(registry: &Registry) -> (String, RunReport) {
    let mut out = Vec::new();
    let report = registry.run_all(&mut out).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

#[test]
fn sort_is_stable_for_duplicate_numbers() {
    let mut registry = Registry::new();
    registry.register(Problem::new(5, "five", noop));
    registry.register(Problem::new(1, "one-a", noop));
    registry.register(Problem::new(3, "three", noop));
    registry.register(Problem::new(1, "one-b", noop));

    let sorted = registry.list_sorted();
    let numbers: Vec<u32> = sorted.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 1, 3, 5]);

    // ties keep their registration order
    assert_eq!(sorted[0].title, "one-a");
    assert_eq!(sorted[1].title, "one-b");
}

#[test]
fn duplicate_registration_keeps_both_entries() {
    let mut registry = Registry::new();
    registry.register(Problem::new(42, "original", noop));
    registry.register(Problem::new(42, "alias", noop));
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.list_sorted().len(), 2);
}

#[test]
fn run_by_number_executes_exactly_once() {
    colored::control::set_override(false);
    let mut registry = Registry::new();
    registry.register(Problem::new(7, "Reverse Integer", one_pass));
    registry.register(Problem::new(9, "Palindrome Number", one_pass));

    let mut out = Vec::new();
    let result = registry.run_by_number(7, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let result = result.expect("problem 7 is registered");
    assert_eq!(result.number, 7);
    assert_eq!(result.total, 1);
    assert_eq!(output.matches("ran exactly once").count(), 1);
    assert!(output.contains("Problem #7: Reverse Integer"));
    assert!(!output.contains("Problem #9"));
}

#[test]
fn run_by_number_resolves_duplicates_to_first_registered() {
    colored::control::set_override(false);
    let mut registry = Registry::new();
    registry.register(Problem::new(42, "first", one_pass));
    registry.register(Problem::new(42, "second", one_pass_one_fail));

    let mut out = Vec::new();
    let result = registry.run_by_number(42, &mut out).unwrap().unwrap();
    assert_eq!(result.title, "first");
    assert_eq!(result.failed, 0);
}

#[test]
fn unknown_number_reports_not_found() {
    let mut registry = Registry::new();
    registry.register(Problem::new(7, "Reverse Integer", one_pass));

    let mut out = Vec::new();
    let result = registry.run_by_number(999, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(result.is_none());
    assert!(output.contains("Problem #999 not found."));
    assert!(!output.contains("ran exactly once"));
}

#[test]
fn run_all_is_complete_and_ordered() {
    colored::control::set_override(false);
    let mut registry = Registry::new();
    registry.register(Problem::new(88, "Merge Sorted Array", one_pass));
    registry.register(Problem::new(1, "Two Sum", one_pass));
    registry.register(Problem::new(9, "Palindrome Number", one_pass));

    let (output, report) = run_all_to_string(&registry);

    assert_eq!(report.total_problems, 3);
    assert_eq!(output.matches("ran exactly once").count(), 3);

    let first = output.find("Problem #1:").unwrap();
    let second = output.find("Problem #9:").unwrap();
    let third = output.find("Problem #88:").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn run_all_output_carries_banners_and_markers() {
    colored::control::set_override(false);
    let mut registry = Registry::new();
    registry.register(Problem::new(9, "Palindrome Number", one_pass_one_fail));

    let (output, _) = run_all_to_string(&registry);
    assert!(output.contains("Running all solutions..."));
    assert!(output.contains("Problem #9: Palindrome Number"));
    assert!(output.contains("Testing Palindrome Number..."));
    assert!(output.contains("[PASS]"));
    assert!(output.contains("[FAIL]"));
    assert!(output.contains("Passed 1/2 tests - 1 tests failed"));
}

#[test]
fn report_accounting_matches_sessions() {
    let mut registry = Registry::new();
    registry.register(Problem::new(1, "all green", one_pass));
    registry.register(Problem::new(2, "mixed", one_pass_one_fail));

    let (_, report) = run_all_to_string(&registry);

    assert_eq!(report.total_problems, 2);
    assert_eq!(report.total_assertions, 3);
    assert_eq!(report.total_passed, 2);
    assert_eq!(report.total_failed, 1);
    assert!(report.has_failures());

    let mixed = report.results.iter().find(|r| r.number == 2).unwrap();
    assert_eq!(mixed.passed, 1);
    assert_eq!(mixed.failed, 1);
    assert_eq!(mixed.total, 2);
}

#[test]
fn run_matching_filters_by_title_and_number() {
    colored::control::set_override(false);
    let mut registry = Registry::new();
    registry.register(Problem::new(7, "Reverse Integer", one_pass));
    registry.register(Problem::new(9, "Palindrome Number", one_pass));

    let mut out = Vec::new();
    let report = registry
        .run_matching(&["Reverse".to_string()], &mut out)
        .unwrap();
    assert_eq!(report.total_problems, 1);
    assert_eq!(report.results[0].number, 7);

    let mut out = Vec::new();
    let report = registry.run_matching(&["9".to_string()], &mut out).unwrap();
    assert_eq!(report.total_problems, 1);
    assert_eq!(report.results[0].number, 9);
}

#[test]
fn empty_registry_boundary() {
    let registry = Registry::new();
    assert_eq!(registry.count(), 0);
    assert!(registry.is_empty());
    assert!(registry.list_sorted().is_empty());

    let (_, report) = run_all_to_string(&registry);
    assert_eq!(report.total_problems, 0);
    assert!(!report.has_failures());
}

#[test]
fn report_files_round_trip() {
    use tempfile::TempDir;

    let mut registry = Registry::new();
    registry.register(
        Problem::new(9, "Palindrome Number", one_pass).with_difficulty(Difficulty::Easy),
    );
    let (_, report) = run_all_to_string(&registry);

    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("run.json");
    let md_path = temp_dir.path().join("run.md");

    RunReporter::write_json(&report, &json_path).expect("Failed to write JSON");
    RunReporter::write_markdown(&report, &md_path).expect("Failed to write Markdown");

    assert!(json_path.exists());
    assert!(md_path.exists());

    let json_content = std::fs::read_to_string(&json_path).unwrap();
    let parsed: RunReport = serde_json::from_str(&json_content).unwrap();
    assert_eq!(parsed.total_problems, report.total_problems);
    assert_eq!(parsed.total_passed, report.total_passed);
    assert_eq!(parsed.results[0].number, 9);

    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("# Katarun Run Report"));
    assert!(md.contains("Palindrome Number"));
}
