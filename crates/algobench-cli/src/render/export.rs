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


//! Categorized report appended by `algobench export`.
//!
//! Datasets are split by type and listed from the highest average down,
//! followed by a failure ranking per type. Algorithms are split by category
//! and listed by score.

use super::{authors_label, dataset_line, DATASET_HEADER};
use algobench_core::{Category, DatasetType, Ranking, Records, Statistics};
use chrono::NaiveDateTime;

/// Timestamp layout of the `Report generated on:` line.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Renders one report block, ready to be appended to the report file.
pub fn render_export(records: &Records, stats: &Statistics, generated_at: NaiveDateTime) -> String {
    let ranking = Ranking::new(records, stats);
    let mut out = format!(
        "Report generated on: {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT)
    );

    for (kind, label) in [(DatasetType::Simple, "Simple"), (DatasetType::Advanced, "Advanced")] {
        out.push_str(&format!("{} Dataset Information\n", label));
        out.push_str(DATASET_HEADER);
        out.push('\n');
        for entry in ranking.datasets_by_difficulty(kind) {
            out.push_str(&dataset_line(entry.dataset, entry.stats));
            out.push('\n');
        }

        out.push_str(&format!("\n{} Dataset Failures\n", label));
        out.push_str("| DatasetID Name Nfail |\n");
        for entry in ranking.datasets_by_failures(kind) {
            out.push_str(&format!(
                "| {} {} {} |\n",
                entry.dataset.id, entry.dataset.name, entry.stats.unresolved_count
            ));
        }
        out.push('\n');
    }

    for category in categories(records) {
        out.push_str(&format!("{} Algorithm Information\n", category));
        out.push_str("| Name         Category Year Authors              Score |\n");
        for entry in ranking.algorithms_by_score(&category) {
            out.push_str(&format!(
                "| {:<12} {:<8} {:<4} {:<20} {:^5} |\n",
                entry.algorithm.name,
                entry.algorithm.category.as_str(),
                entry.algorithm.year,
                authors_label(entry.algorithm),
                entry.stats.score
            ));
        }
        out.push('\n');
    }
    out
}

/// `ML` and `DL` always, then any other category in catalog order.
fn categories(records: &Records) -> Vec<Category> {
    let mut categories = vec![Category::Ml, Category::Dl];
    for algorithm in records.algorithms() {
        if !categories.contains(&algorithm.category) {
            categories.push(algorithm.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::StatsConfig;
    use algobench_test::builders::RecordsBuilder;
    use algobench_test::fixtures::sample_records;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 1))
            .unwrap()
    }

    fn sample_export() -> String {
        let records = sample_records();
        let stats = records.statistics(&StatsConfig::default());
        render_export(&records, &stats, timestamp())
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, haystack))
    }

    #[test]
    fn test_timestamp_line() {
        let report = sample_export();
        assert!(report.starts_with("Report generated on: 07/03/2024 09:05:01\n\n"));
    }

    #[test]
    fn test_datasets_split_and_sorted_by_average() {
        let report = sample_export();
        let simple = position(&report, "Simple Dataset Information");
        let advanced = position(&report, "Advanced Dataset Information");
        let iris = position(&report, "| D01S Iris S");
        let wine = position(&report, "| D02S Wine S");
        let mnist = position(&report, "| D03A MNIST A");
        let cifar = position(&report, "| D04A CIFAR10 A");

        assert!(simple < iris && iris < wine && wine < advanced);
        assert!(advanced < mnist && mnist < cifar);
    }

    #[test]
    fn test_failure_ranking_per_type() {
        let report = sample_export();
        assert!(report.contains("Simple Dataset Failures\n| DatasetID Name Nfail |\n| D02S Wine 2 |\n| D01S Iris 0 |\n"));
        assert!(report.contains("Advanced Dataset Failures\n| DatasetID Name Nfail |\n| D04A CIFAR10 3 |\n| D03A MNIST 0 |\n"));
    }

    #[test]
    fn test_algorithms_by_category_and_score() {
        let report = sample_export();
        let ml = position(&report, "ML Algorithm Information");
        let dl = position(&report, "DL Algorithm Information");
        let svm = position(&report, "| SVM ");
        let knn = position(&report, "| KNN ");
        let cnn = position(&report, "| CNN ");
        let resnet = position(&report, "| ResNet ");

        assert!(ml < svm && svm < knn && knn < dl);
        assert!(dl < cnn && cnn < resnet);
        assert!(report.contains("Cortes-Vapnik"));
    }

    #[test]
    fn test_other_categories_get_their_own_section() {
        let records = RecordsBuilder::new()
            .dataset("D01S", "Only")
            .algorithm("Solver", "RL")
            .build();
        let stats = records.statistics(&StatsConfig::default());
        let report = render_export(&records, &stats, timestamp());

        assert!(report.contains("ML Algorithm Information"));
        assert!(report.contains("DL Algorithm Information"));
        assert!(position(&report, "RL Algorithm Information") < position(&report, "| Solver "));
    }
}
