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

//! Difficulty, failure and quality rankings.
//!
//! Every "most"/"least" query returns all entities that share the extreme
//! value, in catalog order. Sorted listings are stable, so ties keep catalog
//! order as well.
//!
//! Datasets without data have no average. They never qualify as the most
//! difficult dataset and they sort below every numeric average.

use crate::model::{Algorithm, Category, Dataset, DatasetType};
use crate::records::Records;
use crate::stats::{AlgorithmStats, DatasetStats, Statistics};
use std::cmp::Ordering;

/// A dataset paired with its statistics.
#[derive(Debug, Clone, Copy)]
pub struct DatasetEntry<'a> {
    pub dataset: &'a Dataset,
    pub stats: &'a DatasetStats,
}

/// An algorithm paired with its statistics.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmEntry<'a> {
    pub algorithm: &'a Algorithm,
    pub stats: &'a AlgorithmStats,
}

/// Ranking queries over records and their computed statistics.
///
/// # Examples
///
/// ```
/// use algobench_core::{Algorithm, Dataset, DatasetId, Ranking, Records, ResultCell, StatsConfig};
///
/// let mut records = Records::new();
/// records.add_dataset(Dataset::new(DatasetId::parse("D01S").unwrap(), "Iris", 1, 150, "UCI"));
/// records.add_dataset(Dataset::new(DatasetId::parse("D02A").unwrap(), "MNIST", 2, 70000, "LeCun"));
/// records.add_algorithm(Algorithm::new("Alpha", "ML", 2020, vec![]));
/// records.record_result("Alpha", "D01S", ResultCell::Value(90.0));
/// records.record_result("Alpha", "D02A", ResultCell::Value(70.0));
///
/// let stats = records.statistics(&StatsConfig::default());
/// let ranking = Ranking::new(&records, &stats);
/// let hardest = ranking.most_difficult_datasets();
/// assert_eq!(hardest.len(), 1);
/// assert_eq!(hardest[0].dataset.name, "MNIST");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ranking<'a> {
    records: &'a Records,
    stats: &'a Statistics,
}

impl<'a> Ranking<'a> {
    /// Pair records with statistics computed from them.
    pub fn new(records: &'a Records, stats: &'a Statistics) -> Self {
        debug_assert_eq!(records.datasets().len(), stats.datasets().len());
        debug_assert_eq!(records.algorithms().len(), stats.algorithms().len());
        Self { records, stats }
    }

    /// Datasets with statistics, in catalog order.
    pub fn datasets(&self) -> Vec<DatasetEntry<'a>> {
        self.records
            .datasets()
            .iter()
            .zip(self.stats.datasets())
            .map(|(dataset, stats)| DatasetEntry { dataset, stats })
            .collect()
    }

    /// Algorithms with statistics, in catalog order.
    pub fn algorithms(&self) -> Vec<AlgorithmEntry<'a>> {
        self.records
            .algorithms()
            .iter()
            .zip(self.stats.algorithms())
            .map(|(algorithm, stats)| AlgorithmEntry { algorithm, stats })
            .collect()
    }

    /// Datasets whose average equals the lowest defined average.
    pub fn most_difficult_datasets(&self) -> Vec<DatasetEntry<'a>> {
        let entries = self.datasets();
        let lowest = entries
            .iter()
            .filter_map(|e| e.stats.average)
            .min_by(f64::total_cmp);
        match lowest {
            Some(lowest) => entries
                .into_iter()
                .filter(|e| e.stats.average == Some(lowest))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Datasets whose unresolved count equals the highest one.
    pub fn most_failed_datasets(&self) -> Vec<DatasetEntry<'a>> {
        let entries = self.datasets();
        let Some(highest) = entries.iter().map(|e| e.stats.unresolved_count).max() else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter(|e| e.stats.unresolved_count == highest)
            .collect()
    }

    /// Datasets of one type, highest average first, "no data" last.
    pub fn datasets_by_difficulty(&self, kind: DatasetType) -> Vec<DatasetEntry<'a>> {
        let mut entries = self.datasets_of(kind);
        entries.sort_by(|a, b| compare_averages(b.stats.average, a.stats.average));
        entries
    }

    /// Datasets of one type, most unresolved cells first.
    pub fn datasets_by_failures(&self, kind: DatasetType) -> Vec<DatasetEntry<'a>> {
        let mut entries = self.datasets_of(kind);
        entries.sort_by(|a, b| b.stats.unresolved_count.cmp(&a.stats.unresolved_count));
        entries
    }

    /// Algorithms whose average equals the highest average.
    pub fn best_algorithms(&self) -> Vec<AlgorithmEntry<'a>> {
        let entries = self.algorithms();
        let Some(best) = entries.iter().map(|e| e.stats.average).max_by(f64::total_cmp) else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter(|e| e.stats.average == best)
            .collect()
    }

    /// Algorithms whose hard failure count equals the lowest one.
    pub fn least_failing_algorithms(&self) -> Vec<AlgorithmEntry<'a>> {
        let entries = self.algorithms();
        let Some(fewest) = entries.iter().map(|e| e.stats.hard_failure_count).min() else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter(|e| e.stats.hard_failure_count == fewest)
            .collect()
    }

    /// Algorithms of one category, in catalog order.
    pub fn algorithms_in_category(&self, category: &Category) -> Vec<AlgorithmEntry<'a>> {
        self.algorithms()
            .into_iter()
            .filter(|e| &e.algorithm.category == category)
            .collect()
    }

    /// Algorithms of one category, highest score first.
    pub fn algorithms_by_score(&self, category: &Category) -> Vec<AlgorithmEntry<'a>> {
        let mut entries = self.algorithms_in_category(category);
        entries.sort_by(|a, b| b.stats.score.cmp(&a.stats.score));
        entries
    }

    fn datasets_of(&self, kind: DatasetType) -> Vec<DatasetEntry<'a>> {
        self.datasets()
            .into_iter()
            .filter(|e| e.stats.kind == kind)
            .collect()
    }
}

/// Total order on optional averages where "no data" is below every number.
pub fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
