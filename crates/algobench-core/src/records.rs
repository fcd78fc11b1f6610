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

//! The aggregate root owning catalogs and results.

use crate::cell::ResultCell;
use crate::model::{Algorithm, Dataset};
use crate::stats::{Statistics, StatsConfig};
use crate::table::{ResultTable, TableSummary};

/// The literal that marks a failed evaluation in results sources.
pub const FAILURE_MARKER: &str = "404";

/// What happened to a reported result when it was joined to the catalog.
///
/// Unknown keys are tolerated so a results source may mention entities that
/// the current catalogs do not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Stored in the result table.
    Stored,
    /// Replaced an earlier cell for the same pair.
    Replaced,
    /// The dataset slot was the failure marker itself; normalized to
    /// [`ResultCell::Failed`] but there is no dataset to attach it to.
    FailureMarker,
    UnknownAlgorithm,
    UnknownDataset,
}

impl JoinOutcome {
    /// `true` if the result did not end up in the table.
    pub fn is_dropped(self) -> bool {
        !matches!(self, Self::Stored | Self::Replaced)
    }
}

/// Datasets, algorithms and their results for one run.
///
/// Catalog order is insertion order and is the order every report and
/// tie-returning ranking uses.
#[derive(Debug, Clone, Default)]
pub struct Records {
    datasets: Vec<Dataset>,
    algorithms: Vec<Algorithm>,
    results: ResultTable,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn add_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithms.push(algorithm);
    }

    /// Join one reported result onto the catalog.
    ///
    /// `dataset_key` is the raw identifier text from the results source, so
    /// the failure marker and identifiers absent from the catalog can be
    /// recognised without validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench_core::{Algorithm, Dataset, DatasetId, JoinOutcome, Records, ResultCell};
    ///
    /// let mut records = Records::new();
    /// records.add_dataset(Dataset::new(DatasetId::parse("D01S").unwrap(), "Iris", 1, 150, "UCI"));
    /// records.add_algorithm(Algorithm::new("Alpha", "ML", 2020, vec![]));
    ///
    /// assert_eq!(records.record_result("Alpha", "D01S", ResultCell::Value(90.0)), JoinOutcome::Stored);
    /// assert_eq!(records.record_result("Gamma", "D01S", ResultCell::Value(50.0)), JoinOutcome::UnknownAlgorithm);
    /// assert_eq!(records.record_result("Alpha", "D09A", ResultCell::Value(50.0)), JoinOutcome::UnknownDataset);
    /// assert_eq!(records.results().len(), 1);
    /// ```
    pub fn record_result(
        &mut self,
        algorithm_name: &str,
        dataset_key: &str,
        cell: ResultCell,
    ) -> JoinOutcome {
        if dataset_key == FAILURE_MARKER {
            return JoinOutcome::FailureMarker;
        }
        if self.algorithm(algorithm_name).is_none() {
            return JoinOutcome::UnknownAlgorithm;
        }
        let Some(dataset) = self.datasets.iter().find(|d| d.id.as_str() == dataset_key) else {
            return JoinOutcome::UnknownDataset;
        };
        match self.results.insert(algorithm_name, dataset.id.clone(), cell) {
            Some(_) => JoinOutcome::Replaced,
            None => JoinOutcome::Stored,
        }
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn results(&self) -> &ResultTable {
        &self.results
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id.as_str() == id)
    }

    pub fn algorithm(&self, name: &str) -> Option<&Algorithm> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    /// Cell for a catalog pair.
    pub fn lookup(&self, algorithm: &Algorithm, dataset: &Dataset) -> ResultCell {
        self.results.lookup(algorithm, dataset)
    }

    pub fn summary(&self) -> TableSummary {
        self.results.summarize(&self.algorithms, &self.datasets)
    }

    /// Compute per-dataset and per-algorithm statistics.
    pub fn statistics(&self, config: &StatsConfig) -> Statistics {
        Statistics::compute(self, config)
    }
}
