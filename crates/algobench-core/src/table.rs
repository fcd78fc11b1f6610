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

//! Sparse algorithm × dataset result table.

use crate::cell::ResultCell;
use crate::model::{Algorithm, Dataset, DatasetId};
use std::collections::BTreeMap;

/// Results keyed by natural key: algorithm name, then dataset identifier.
///
/// Only pairs that a results line reported are stored. Looking up any other
/// pair yields [`ResultCell::Missing`]; absence is a state, not an error.
///
/// # Examples
///
/// ```
/// use algobench_core::{DatasetId, ResultCell, ResultTable};
///
/// let d01 = DatasetId::parse("D01S").unwrap();
/// let mut table = ResultTable::new();
/// table.insert("Alpha", d01.clone(), ResultCell::Value(90.0));
///
/// assert_eq!(table.get("Alpha", &d01), ResultCell::Value(90.0));
/// assert_eq!(table.get("Beta", &d01), ResultCell::Missing);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: BTreeMap<String, BTreeMap<DatasetId, ResultCell>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell, returning the cell it replaced if the pair was already
    /// reported.
    pub fn insert(
        &mut self,
        algorithm: impl Into<String>,
        dataset: DatasetId,
        cell: ResultCell,
    ) -> Option<ResultCell> {
        self.rows
            .entry(algorithm.into())
            .or_default()
            .insert(dataset, cell)
    }

    /// Cell for an algorithm name and dataset identifier.
    pub fn get(&self, algorithm: &str, dataset: &DatasetId) -> ResultCell {
        self.rows
            .get(algorithm)
            .and_then(|row| row.get(dataset))
            .copied()
            .unwrap_or(ResultCell::Missing)
    }

    /// Cell for a catalog pair.
    pub fn lookup(&self, algorithm: &Algorithm, dataset: &Dataset) -> ResultCell {
        self.get(&algorithm.name, &dataset.id)
    }

    /// Cells of one algorithm, in the order of `datasets`.
    pub fn row<'a>(
        &'a self,
        algorithm: &'a Algorithm,
        datasets: &'a [Dataset],
    ) -> impl Iterator<Item = (&'a Dataset, ResultCell)> + 'a {
        datasets.iter().map(move |d| (d, self.lookup(algorithm, d)))
    }

    /// Cells of one dataset, in the order of `algorithms`.
    pub fn column<'a>(
        &'a self,
        dataset: &'a Dataset,
        algorithms: &'a [Algorithm],
    ) -> impl Iterator<Item = (&'a Algorithm, ResultCell)> + 'a {
        algorithms.iter().map(move |a| (a, self.lookup(a, dataset)))
    }

    /// Number of stored (reported) cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count cell states over the full cross product of a catalog.
    pub fn summarize(&self, algorithms: &[Algorithm], datasets: &[Dataset]) -> TableSummary {
        let mut summary = TableSummary {
            algorithms: algorithms.len(),
            datasets: datasets.len(),
            ..TableSummary::default()
        };
        for algorithm in algorithms {
            for (_, cell) in self.row(algorithm, datasets) {
                match cell {
                    ResultCell::Missing => summary.missing += 1,
                    ResultCell::Ongoing => summary.ongoing += 1,
                    ResultCell::Failed => summary.failed += 1,
                    ResultCell::Value(_) => summary.completed += 1,
                }
            }
        }
        summary
    }
}

/// Cell-state counts over every catalog pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableSummary {
    pub algorithms: usize,
    pub datasets: usize,
    /// Pairs no result line mentioned.
    pub missing: usize,
    pub ongoing: usize,
    pub failed: usize,
    pub completed: usize,
}

impl TableSummary {
    pub fn total_cells(&self) -> usize {
        self.algorithms * self.datasets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> DatasetId {
        DatasetId::parse(raw).unwrap()
    }

    #[test]
    fn test_insert_replaces_previous_cell() {
        let mut table = ResultTable::new();
        assert_eq!(table.insert("A", id("D01S"), ResultCell::Ongoing), None);
        assert_eq!(
            table.insert("A", id("D01S"), ResultCell::Value(5.0)),
            Some(ResultCell::Ongoing)
        );
        assert_eq!(table.get("A", &id("D01S")), ResultCell::Value(5.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_absent_pairs_are_missing() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("nobody", &id("D01S")), ResultCell::Missing);
    }

    #[test]
    fn test_summarize_counts_cross_product() {
        let datasets = vec![
            Dataset::new(id("D01S"), "one", 1, 10, "src"),
            Dataset::new(id("D02A"), "two", 1, 10, "src"),
        ];
        let algorithms = vec![
            Algorithm::new("A", "ML", 2020, vec![]),
            Algorithm::new("B", "DL", 2021, vec![]),
        ];
        let mut table = ResultTable::new();
        table.insert("A", id("D01S"), ResultCell::Value(1.0));
        table.insert("A", id("D02A"), ResultCell::Failed);
        table.insert("B", id("D01S"), ResultCell::Ongoing);

        let summary = table.summarize(&algorithms, &datasets);
        assert_eq!(summary.total_cells(), 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.ongoing, 1);
        assert_eq!(summary.missing, 1);
    }
}
