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

//! Per-dataset and per-algorithm statistics.
//!
//! Statistics are computed in one pure pass over [`Records`] and returned as
//! a separate [`Statistics`] value. Entities are never mutated, so rankings
//! and reports can only be produced from a finished computation.
//!
//! The two failure tallies are deliberately different:
//!
//! - [`DatasetStats::unresolved_count`] counts every cell that is not a
//!   measurement: missing, ongoing and failed.
//! - [`AlgorithmStats::hard_failure_count`] counts failed cells only.

use crate::cell::ResultCell;
use crate::model::{Algorithm, Category, Dataset, DatasetId, DatasetType};
use crate::records::{Records, FAILURE_MARKER};
use crate::scoring::score_algorithm;
use std::fmt;

/// How [`AlgorithmStats::ongoing_results`] is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OngoingPolicy {
    /// Count missing and ongoing cells over the whole table and give every
    /// algorithm the same total. Matches the historical reports.
    #[default]
    Global,
    /// Count missing and ongoing cells in the algorithm's own row only.
    PerRow,
}

/// Options for [`Statistics::compute`].
///
/// # Examples
///
/// ```
/// use algobench_core::{OngoingPolicy, StatsConfig};
///
/// let config = StatsConfig::default();
/// assert_eq!(config.ongoing_policy, OngoingPolicy::Global);
///
/// let strict = StatsConfig {
///     ongoing_policy: OngoingPolicy::PerRow,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatsConfig {
    pub ongoing_policy: OngoingPolicy,
}

/// Smallest and largest measurement, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} - {:.1}", self.min, self.max)
    }
}

/// Aggregates of one dataset over every algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatasetStats {
    pub id: DatasetId,
    pub kind: DatasetType,
    /// Mean measurement rounded to one decimal; `None` when no algorithm has
    /// a measurement ("no data").
    pub average: Option<f64>,
    pub range: Option<ValueRange>,
    /// Missing + ongoing + failed cells in this dataset's column.
    pub unresolved_count: usize,
}

impl DatasetStats {
    /// Average as shown in tables: one decimal, or `-` for no data.
    pub fn average_label(&self) -> String {
        self.average
            .map(|avg| format!("{:.1}", avg))
            .unwrap_or_else(|| NO_DATA.to_string())
    }

    pub fn range_label(&self) -> String {
        self.range
            .map(|range| range.to_string())
            .unwrap_or_else(|| NO_DATA.to_string())
    }
}

/// Placeholder shown for statistics over an empty set of measurements.
pub const NO_DATA: &str = "-";

/// Aggregates of one algorithm over every dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmStats {
    pub name: String,
    pub category: Category,
    /// Mean measurement rounded to one decimal, `0.0` without measurements.
    pub average: f64,
    /// Failed cells in this algorithm's row.
    pub hard_failure_count: usize,
    /// `"<dataset id> (404)"` for each failed cell, in catalog order.
    pub fail_datasets: Vec<String>,
    /// Missing + ongoing cells, scoped per [`OngoingPolicy`].
    pub ongoing_results: usize,
    pub score: u32,
}

impl AlgorithmStats {
    /// Whether the failure budget of the algorithm's category is respected:
    /// at most one hard failure for `ML`, at most two otherwise.
    pub fn satisfies_requirements(&self) -> bool {
        self.hard_failure_count <= self.category.max_hard_failures()
    }
}

/// Computed statistics for a whole [`Records`], in catalog order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    datasets: Vec<DatasetStats>,
    algorithms: Vec<AlgorithmStats>,
}

impl Statistics {
    /// Run the statistics pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench_core::{Algorithm, Dataset, DatasetId, Records, ResultCell, Statistics, StatsConfig};
    ///
    /// let mut records = Records::new();
    /// records.add_dataset(Dataset::new(DatasetId::parse("D01S").unwrap(), "Iris", 1, 150, "UCI"));
    /// records.add_algorithm(Algorithm::new("Alpha", "ML", 2020, vec![]));
    /// records.add_algorithm(Algorithm::new("Beta", "DL", 2021, vec![]));
    /// records.record_result("Alpha", "D01S", ResultCell::Value(90.0));
    /// records.record_result("Beta", "D01S", ResultCell::Failed);
    ///
    /// let stats = Statistics::compute(&records, &StatsConfig::default());
    /// let d01 = stats.dataset("D01S").unwrap();
    /// assert_eq!(d01.average, Some(90.0));
    /// assert_eq!(d01.unresolved_count, 1);
    /// assert_eq!(stats.algorithm("Beta").unwrap().hard_failure_count, 1);
    /// ```
    pub fn compute(records: &Records, config: &StatsConfig) -> Self {
        let datasets = records
            .datasets()
            .iter()
            .map(|dataset| dataset_stats(records, dataset))
            .collect();

        let global_pending = match config.ongoing_policy {
            OngoingPolicy::Global => Some(pending_cells_in_table(records)),
            OngoingPolicy::PerRow => None,
        };

        let algorithms = records
            .algorithms()
            .iter()
            .map(|algorithm| {
                let ongoing = global_pending
                    .unwrap_or_else(|| pending_cells_in_row(records, algorithm));
                algorithm_stats(records, algorithm, ongoing)
            })
            .collect();

        Self {
            datasets,
            algorithms,
        }
    }

    pub fn datasets(&self) -> &[DatasetStats] {
        &self.datasets
    }

    pub fn algorithms(&self) -> &[AlgorithmStats] {
        &self.algorithms
    }

    pub fn dataset(&self, id: &str) -> Option<&DatasetStats> {
        self.datasets.iter().find(|s| s.id.as_str() == id)
    }

    pub fn algorithm(&self, name: &str) -> Option<&AlgorithmStats> {
        self.algorithms.iter().find(|s| s.name == name)
    }
}

fn dataset_stats(records: &Records, dataset: &Dataset) -> DatasetStats {
    let cells: Vec<ResultCell> = records
        .results()
        .column(dataset, records.algorithms())
        .map(|(_, cell)| cell)
        .collect();

    let pending = cells.iter().filter(|c| c.is_pending()).count();
    let failed = cells.iter().filter(|c| c.is_failed()).count();
    let values: Vec<f64> = cells.iter().filter_map(ResultCell::as_value).collect();

    let range = values
        .iter()
        .copied()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map(|(lo, hi)| ValueRange {
            min: round_to_tenth(lo),
            max: round_to_tenth(hi),
        });

    DatasetStats {
        id: dataset.id.clone(),
        kind: dataset.kind(),
        average: rounded_mean(&values),
        range,
        unresolved_count: pending + failed,
    }
}

fn algorithm_stats(records: &Records, algorithm: &Algorithm, ongoing: usize) -> AlgorithmStats {
    let mut values = Vec::new();
    let mut fail_datasets = Vec::new();

    for (dataset, cell) in records.results().row(algorithm, records.datasets()) {
        match cell {
            ResultCell::Value(v) => values.push(v),
            ResultCell::Failed => {
                fail_datasets.push(format!("{} ({})", dataset.id, FAILURE_MARKER))
            }
            ResultCell::Missing | ResultCell::Ongoing => {}
        }
    }

    AlgorithmStats {
        name: algorithm.name.clone(),
        category: algorithm.category.clone(),
        average: rounded_mean(&values).unwrap_or(0.0),
        hard_failure_count: fail_datasets.len(),
        fail_datasets,
        ongoing_results: ongoing,
        score: score_algorithm(records, algorithm),
    }
}

fn pending_cells_in_row(records: &Records, algorithm: &Algorithm) -> usize {
    records
        .results()
        .row(algorithm, records.datasets())
        .filter(|(_, cell)| cell.is_pending())
        .count()
}

fn pending_cells_in_table(records: &Records) -> usize {
    records
        .algorithms()
        .iter()
        .map(|algorithm| pending_cells_in_row(records, algorithm))
        .sum()
}

fn rounded_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round_to_tenth(sum / values.len() as f64))
}

/// Round to one decimal place, exact halves to the even digit.
///
/// `{:.1}` rounds the exact binary value, so `0.35` (stored just below
/// the half) becomes `0.3` and `80.25` becomes `80.2`.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> DatasetId {
        DatasetId::parse(raw).unwrap()
    }

    fn records() -> Records {
        let mut records = Records::new();
        records.add_dataset(Dataset::new(id("D01S"), "one", 1, 100, "uci"));
        records.add_dataset(Dataset::new(id("D02A"), "two", 2, 200, "kaggle"));
        records.add_dataset(Dataset::new(id("D03S"), "three", 3, 300, "uci"));
        records.add_algorithm(Algorithm::new("Alpha", "ML", 2019, vec!["Ann".into()]));
        records.add_algorithm(Algorithm::new("Beta", "DL", 2020, vec!["Bo".into()]));
        records.add_algorithm(Algorithm::new("Gamma", "ML", 2021, vec![]));

        records.record_result("Alpha", "D01S", ResultCell::Value(80.25));
        records.record_result("Alpha", "D02A", ResultCell::Value(60.0));
        records.record_result("Alpha", "D03S", ResultCell::Failed);
        records.record_result("Beta", "D01S", ResultCell::Value(90.0));
        records.record_result("Beta", "D02A", ResultCell::Ongoing);
        records.record_result("Gamma", "D01S", ResultCell::Failed);
        records.record_result("Gamma", "D03S", ResultCell::Failed);
        records
    }

    #[test]
    fn test_dataset_average_and_range() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        let d01 = stats.dataset("D01S").unwrap();
        assert_eq!(d01.average, Some(85.1));
        assert_eq!(d01.range, Some(ValueRange { min: 80.2, max: 90.0 }));
        assert_eq!(d01.range_label(), "80.2 - 90.0");
        assert_eq!(d01.average_label(), "85.1");
        assert_eq!(d01.kind, DatasetType::Simple);
    }

    #[test]
    fn test_dataset_without_measurements_has_no_data() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        let d03 = stats.dataset("D03S").unwrap();
        assert_eq!(d03.average, None);
        assert_eq!(d03.range, None);
        assert_eq!(d03.average_label(), "-");
        assert_eq!(d03.range_label(), "-");
    }

    #[test]
    fn test_dataset_unresolved_merges_missing_ongoing_and_failed() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        // Gamma failed
        assert_eq!(stats.dataset("D01S").unwrap().unresolved_count, 1);
        // Beta ongoing, Gamma missing
        assert_eq!(stats.dataset("D02A").unwrap().unresolved_count, 2);
        // Alpha failed, Beta missing, Gamma failed
        assert_eq!(stats.dataset("D03S").unwrap().unresolved_count, 3);
    }

    #[test]
    fn test_algorithm_hard_failures_only() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        let alpha = stats.algorithm("Alpha").unwrap();
        assert_eq!(alpha.hard_failure_count, 1);
        assert_eq!(alpha.fail_datasets, vec!["D03S (404)".to_string()]);

        let beta = stats.algorithm("Beta").unwrap();
        assert_eq!(beta.hard_failure_count, 0);
        assert!(beta.fail_datasets.is_empty());

        let gamma = stats.algorithm("Gamma").unwrap();
        assert_eq!(gamma.hard_failure_count, 2);
        assert_eq!(
            gamma.fail_datasets,
            vec!["D01S (404)".to_string(), "D03S (404)".to_string()]
        );
    }

    #[test]
    fn test_algorithm_average_defaults_to_zero() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        assert_eq!(stats.algorithm("Alpha").unwrap().average, 70.1);
        assert_eq!(stats.algorithm("Beta").unwrap().average, 90.0);
        assert_eq!(stats.algorithm("Gamma").unwrap().average, 0.0);
    }

    #[test]
    fn test_global_ongoing_policy_assigns_table_total() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        // Beta: D02A ongoing + D03S missing; Gamma: D02A missing
        for algorithm in stats.algorithms() {
            assert_eq!(algorithm.ongoing_results, 3);
        }
    }

    #[test]
    fn test_per_row_ongoing_policy() {
        let config = StatsConfig {
            ongoing_policy: OngoingPolicy::PerRow,
        };
        let stats = Statistics::compute(&records(), &config);
        assert_eq!(stats.algorithm("Alpha").unwrap().ongoing_results, 0);
        assert_eq!(stats.algorithm("Beta").unwrap().ongoing_results, 2);
        assert_eq!(stats.algorithm("Gamma").unwrap().ongoing_results, 1);
    }

    #[test]
    fn test_satisfies_requirements_by_category() {
        let stats = Statistics::compute(&records(), &StatsConfig::default());
        assert!(stats.algorithm("Alpha").unwrap().satisfies_requirements());
        assert!(stats.algorithm("Beta").unwrap().satisfies_requirements());
        // ML with two hard failures
        assert!(!stats.algorithm("Gamma").unwrap().satisfies_requirements());
    }

    #[test]
    fn test_empty_records() {
        let stats = Statistics::compute(&Records::new(), &StatsConfig::default());
        assert!(stats.datasets().is_empty());
        assert!(stats.algorithms().is_empty());
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(85.125), 85.1);
        assert_eq!(round_to_tenth(80.25), 80.2);
        assert_eq!(round_to_tenth(80.75), 80.8);
        assert_eq!(round_to_tenth(0.35), 0.3);
        assert_eq!(round_to_tenth(70.0), 70.0);
    }

    #[test]
    fn test_halfway_average_rounds_to_even() {
        let mut records = Records::new();
        records.add_dataset(Dataset::new(id("D01S"), "one", 1, 100, "uci"));
        records.add_dataset(Dataset::new(id("D02S"), "two", 1, 100, "uci"));
        records.add_algorithm(Algorithm::new("Alpha", "ML", 2019, vec![]));
        records.add_algorithm(Algorithm::new("Beta", "ML", 2019, vec![]));
        records.record_result("Alpha", "D01S", ResultCell::Value(80.0));
        records.record_result("Beta", "D01S", ResultCell::Value(80.5));
        records.record_result("Alpha", "D02S", ResultCell::Value(0.35));

        let stats = Statistics::compute(&records, &StatsConfig::default());
        assert_eq!(stats.dataset("D01S").unwrap().average, Some(80.2));
        let d02 = stats.dataset("D02S").unwrap();
        assert_eq!(d02.average, Some(0.3));
        assert_eq!(d02.range_label(), "0.3 - 0.3");
        // Alpha: (80.0 + 0.35) / 2 = 40.175
        assert_eq!(stats.algorithm("Alpha").unwrap().average, 40.2);
    }
}
