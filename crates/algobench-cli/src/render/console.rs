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


//! Console report: results matrix, summaries and information tables.

use super::{authors_label, dataset_line, flagged_name, plural, DATASET_HEADER};
use algobench_core::{Ranking, Records, Statistics};
use colored::Colorize;

/// Renders the full console report.
pub fn render_report(records: &Records, stats: &Statistics) -> String {
    let ranking = Ranking::new(records, stats);
    let mut out = String::new();

    out.push_str(&results_matrix(records));
    out.push_str(&results_summary(records));
    out.push_str(&dataset_information(&ranking));
    out.push_str(&dataset_summary(&ranking));
    out.push_str(&algorithm_information(&ranking));
    out.push_str(&algorithm_summary(&ranking));
    out
}

/// The algorithm × dataset matrix in catalog order.
pub fn results_matrix(records: &Records) -> String {
    let mut out = format!("{}\n", "RESULTS".bold());

    out.push_str("| Algorithms");
    for dataset in records.datasets() {
        out.push_str(&format!(" {}", dataset.id));
    }
    out.push_str(" |\n");

    for algorithm in records.algorithms() {
        out.push_str(&format!("| {}", algorithm.name));
        for (_, cell) in records.results().row(algorithm, records.datasets()) {
            out.push_str(&format!(" {}", cell));
        }
        out.push_str(" |\n");
    }
    out
}

/// Matrix size and the number of cells still awaiting a result.
pub fn results_summary(records: &Records) -> String {
    let summary = records.summary();
    let mut out = format!("\n{}\n", "RESULTS SUMMARY".bold());

    out.push_str(&format!(
        "There are {} algorithms and {} datasets.\n",
        summary.algorithms, summary.datasets
    ));
    out.push_str(&format!(
        "The number of nonexistent results is {} and ongoing results is {}\n",
        summary.missing, summary.ongoing
    ));
    out
}

pub fn dataset_information(ranking: &Ranking<'_>) -> String {
    let mut out = format!("\n{}\n", "DATASET INFORMATION".bold());
    out.push_str(DATASET_HEADER);
    out.push('\n');
    for entry in ranking.datasets() {
        out.push_str(&dataset_line(entry.dataset, entry.stats));
        out.push('\n');
    }
    out
}

/// Most difficult and most failed datasets, one sentence each, or a bullet
/// list when several datasets tie.
pub fn dataset_summary(ranking: &Ranking<'_>) -> String {
    let mut out = format!("\n{}\n", "DATASET SUMMARY".bold());

    let difficult = ranking.most_difficult_datasets();
    match difficult.as_slice() {
        [] => out.push_str("No dataset has any results yet.\n"),
        [only] => out.push_str(&format!(
            "The most difficult dataset is {} with an average result of {}.\n",
            only.dataset.name,
            only.stats.average_label()
        )),
        tied => {
            out.push_str("The most difficult datasets are:\n");
            for entry in tied {
                out.push_str(&format!(
                    "- {} with an average result of {}.\n",
                    entry.dataset.name,
                    entry.stats.average_label()
                ));
            }
        }
    }

    let failed = ranking.most_failed_datasets();
    match failed.as_slice() {
        [] => {}
        [only] => out.push_str(&format!(
            "The dataset with the most failures is {} with the number of failures being {}.\n",
            only.dataset.name, only.stats.unresolved_count
        )),
        tied => {
            out.push_str("The datasets with the most failures are:\n");
            for entry in tied {
                out.push_str(&format!(
                    "- {} with the number of failures being {}.\n",
                    entry.dataset.name, entry.stats.unresolved_count
                ));
            }
        }
    }
    out
}

pub fn algorithm_information(ranking: &Ranking<'_>) -> String {
    let mut out = format!("\n{}\n", "ALGORITHM INFORMATION".bold());
    out.push_str(
        "| Name Category Year Authors Average Nfail FailDatasets Nongoing Score |\n",
    );

    let mut flagged = false;
    for entry in ranking.algorithms() {
        flagged |= !entry.stats.satisfies_requirements();
        out.push_str(&format!(
            "| {:<12} {:<4} {:<4} {:<20} {:^7.1} {:^5} {:<12} {:^7} {:^5} |\n",
            flagged_name(entry.algorithm, entry.stats),
            entry.algorithm.category.as_str(),
            entry.algorithm.year,
            authors_label(entry.algorithm),
            entry.stats.average,
            entry.stats.hard_failure_count,
            entry.stats.fail_datasets.join(", "),
            entry.stats.ongoing_results,
            entry.stats.score
        ));
    }
    if flagged {
        out.push_str(&format!(
            "{}\n",
            "(!) more hard failures than the category allows".yellow()
        ));
    }
    out
}

/// Best and least failing algorithms; ties are listed comma separated.
pub fn algorithm_summary(ranking: &Ranking<'_>) -> String {
    let mut out = format!("\n{}\n", "ALGORITHM SUMMARY".bold());

    let best = ranking.best_algorithms();
    if let Some(first) = best.first() {
        let names: Vec<&str> = best.iter().map(|e| e.algorithm.name.as_str()).collect();
        out.push_str(&format!(
            "The best algorithm{} {} {} with an average result of {:.1}.\n",
            plural(best.len()),
            verb(best.len()),
            names.join(", "),
            first.stats.average
        ));
    } else {
        out.push_str("No algorithms are recorded.\n");
        return out;
    }

    let least = ranking.least_failing_algorithms();
    if let Some(first) = least.first() {
        let names: Vec<&str> = least.iter().map(|e| e.algorithm.name.as_str()).collect();
        out.push_str(&format!(
            "The algorithm{} with the least failure{} {} {} with the number of failures being {}.\n",
            plural(least.len()),
            plural(least.len()),
            verb(least.len()),
            names.join(", "),
            first.stats.hard_failure_count
        ));
    }
    out
}

fn verb(count: usize) -> &'static str {
    if count == 1 {
        "is"
    } else {
        "are"
    }
}
