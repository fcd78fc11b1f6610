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

use algobench_core::{Algorithm, Dataset, DatasetId, Records, ResultCell};

/// Builder for [`Records`] that takes identifiers as plain text.
///
/// Invalid dataset identifiers panic; this type is for tests only.
#[derive(Debug, Default)]
pub struct RecordsBuilder {
    records: Records,
}

impl RecordsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset with weight 1, size 100 and source `test`.
    pub fn dataset(self, id: &str, name: &str) -> Self {
        self.dataset_with(id, name, 1, 100, "test")
    }

    pub fn dataset_with(mut self, id: &str, name: &str, weight: i64, size: i64, source: &str) -> Self {
        let id = DatasetId::parse(id).unwrap_or_else(|e| panic!("fixture dataset ID: {}", e));
        self.records
            .add_dataset(Dataset::new(id, name, weight, size, source));
        self
    }

    /// Add an algorithm from 2020 without authors.
    pub fn algorithm(self, name: &str, category: &str) -> Self {
        self.algorithm_with(name, category, 2020, &[])
    }

    pub fn algorithm_with(mut self, name: &str, category: &str, year: i32, authors: &[&str]) -> Self {
        let authors = authors.iter().map(|a| a.to_string()).collect();
        self.records
            .add_algorithm(Algorithm::new(name, category, year, authors));
        self
    }

    /// Record a result. Keys unknown to the catalog are dropped silently,
    /// exactly as a results source would be.
    pub fn result(mut self, algorithm: &str, dataset: &str, cell: ResultCell) -> Self {
        self.records.record_result(algorithm, dataset, cell);
        self
    }

    pub fn build(self) -> Records {
        self.records
    }
}
