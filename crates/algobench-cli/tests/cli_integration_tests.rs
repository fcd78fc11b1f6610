// Dweve AlgoBench - Algorithm Benchmark Records
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI integration tests

use algobench_test::fixtures::{ALGORITHMS, DATASETS, RESULTS};
use algobench_test::SourceFiles;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

// Test helper to create an AlgoBench command
fn algobench_cmd() -> Command {
    Command::cargo_bin("algobench").expect("Failed to find algobench binary")
}

fn run_json(files: &SourceFiles, extra: &[&str]) -> Value {
    let output = algobench_cmd()
        .arg("report")
        .args(files.args())
        .args(["--format", "json"])
        .args(extra)
        .output()
        .expect("Failed to run algobench");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("report must be valid JSON")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    algobench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AlgoBench - algorithm benchmark records"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_missing_arguments() {
    algobench_cmd()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<RESULTS>"));
}

// ===== Report Tests =====

#[test]
fn test_report_text() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .arg("report")
        .args(files.args())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Algorithms D01S D02S D03A D04A |"))
        .stdout(predicate::str::contains("| CNN 95.0 XX 99.2 XX |"))
        .stdout(predicate::str::contains("There are 4 algorithms and 4 datasets."))
        .stdout(predicate::str::contains("| D04A CIFAR10 A 4 60000 Krizhevsky 96.4 96.4 - 96.4 3 |"))
        .stdout(predicate::str::contains(
            "The most difficult dataset is Wine with an average result of 92.2.",
        ))
        .stdout(predicate::str::contains("SVM (!)"))
        .stdout(predicate::str::contains(
            "The best algorithm is SVM with an average result of 98.2.",
        ))
        .stdout(predicate::str::contains("Transformer").not());
}

#[test]
fn test_report_json() {
    let files = SourceFiles::sample();
    let doc = run_json(&files, &[]);

    assert_eq!(doc["summary"]["completed"], 11);
    assert_eq!(doc["datasets"].as_array().map(Vec::len), Some(4));
    assert_eq!(doc["algorithms"][0]["statistics"]["name"], "KNN");
    assert_eq!(doc["algorithms"][0]["statistics"]["fail_datasets"][0], "D04A (404)");
    assert_eq!(doc["rankings"]["best_algorithms"][0], "SVM");
}

#[test]
fn test_report_ongoing_policies() {
    let files = SourceFiles::sample();

    let global = run_json(&files, &[]);
    let per_row = run_json(&files, &["--per-row-ongoing"]);

    // Global: every algorithm carries the table-wide pending count.
    assert_eq!(global["algorithms"][0]["statistics"]["ongoing_results"], 2);
    assert_eq!(global["algorithms"][2]["statistics"]["ongoing_results"], 2);
    // Per row: only CNN has pending cells.
    assert_eq!(per_row["algorithms"][0]["statistics"]["ongoing_results"], 0);
    assert_eq!(per_row["algorithms"][2]["statistics"]["ongoing_results"], 2);
}

#[test]
fn test_report_invalid_format() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .arg("report")
        .args(files.args())
        .args(["--format", "xml"])
        .assert()
        .failure();
}

// ===== Export Tests =====

#[test]
fn test_export_appends_reports() {
    let files = SourceFiles::sample();
    let report_file = files.dir().join("reports.txt");

    for _ in 0..2 {
        algobench_cmd()
            .arg("export")
            .args(files.args())
            .arg("--report-file")
            .arg(&report_file)
            .assert()
            .success()
            .stdout(predicate::str::contains("Report generated successfully."));
    }

    let content = fs::read_to_string(&report_file).unwrap();
    assert_eq!(content.matches("Report generated on: ").count(), 2);
    assert!(content.contains("Simple Dataset Information"));
    assert!(content.contains("Advanced Dataset Information"));
    assert!(content.contains("ML Algorithm Information"));
    assert!(content.contains("DL Algorithm Information"));
}

#[test]
fn test_export_default_report_file() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .current_dir(files.dir())
        .arg("export")
        .args(files.args())
        .assert()
        .success();

    assert!(files.dir().join("reports.txt").exists());
}

// ===== Validate Tests =====

#[test]
fn test_validate_counts() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .arg("validate")
        .args(files.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Datasets: 4"))
        .stdout(predicate::str::contains("Algorithms: 4"))
        .stdout(predicate::str::contains("Results: 15"))
        .stdout(predicate::str::contains("Dropped: 1"))
        .stdout(predicate::str::contains("line 5: Transformer D01S (UnknownAlgorithm)"));
}

// ===== Error Tests =====

#[test]
fn test_missing_source_file() {
    let files = SourceFiles::sample();
    fs::remove_file(&files.paths.algorithms).unwrap();

    algobench_cmd()
        .arg("report")
        .args(files.args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: File not found:"))
        .stderr(predicate::str::contains("algorithms.txt"));
}

#[test]
fn test_datasets_reported_before_other_missing_sources() {
    let files = SourceFiles::sample();
    fs::remove_file(&files.paths.results).unwrap();
    fs::remove_file(&files.paths.datasets).unwrap();

    algobench_cmd()
        .arg("validate")
        .args(files.args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("datasets.txt"));
}

#[test]
fn test_invalid_dataset_identifier() {
    let files = SourceFiles::write("X01S, Iris, 1, 150, UCI\n", ALGORITHMS, RESULTS);

    algobench_cmd()
        .arg("report")
        .args(files.args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: invalid dataset ID: X01S"));
}

#[test]
fn test_invalid_result_value() {
    let files = SourceFiles::write(DATASETS, ALGORITHMS, "KNN, D01S: fast\n");

    algobench_cmd()
        .arg("validate")
        .args(files.args())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("line 1: invalid result value 'fast'"));
}

#[test]
fn test_file_size_limit() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .env("ALGOBENCH_MAX_FILE_SIZE", "10")
        .arg("report")
        .args(files.args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"));
}

#[test]
fn test_invalid_file_size_limit() {
    let files = SourceFiles::sample();
    algobench_cmd()
        .env("ALGOBENCH_MAX_FILE_SIZE", "lots")
        .arg("validate")
        .args(files.args())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Invalid input: ALGOBENCH_MAX_FILE_SIZE must be a size in bytes, got 'lots'",
        ));
}

#[test]
fn test_report_rounds_halves_to_even() {
    let files = SourceFiles::write(
        "D01S, Iris, 1, 150, UCI\n",
        "KNN, ML, 1967, Cover\nSVM, ML, 1995, Vapnik\n",
        "KNN, D01S: 80.0\nSVM, D01S: 80.5\n",
    );
    algobench_cmd()
        .arg("report")
        .args(files.args())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("| KNN 80.0 |"))
        .stdout(predicate::str::contains("| D01S Iris S 1 150 UCI 80.2 80.0 - 80.5 0 |"));
}

#[test]
fn test_empty_sources() {
    let files = SourceFiles::write("", "", "");
    algobench_cmd()
        .arg("report")
        .args(files.args())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 0 algorithms and 0 datasets."))
        .stdout(predicate::str::contains("No algorithms are recorded."));
}
