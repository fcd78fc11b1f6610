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

//! AlgoBench core: benchmark records and the statistics engine.
//!
//! This crate holds the data model for algorithm benchmarking runs and the
//! computations derived from it:
//!
//! - **Catalogs**: [`Dataset`] and [`Algorithm`] entities, joined by natural
//!   keys (dataset identifier, algorithm name)
//! - **Results**: a sparse [`ResultTable`] of [`ResultCell`]s owned by the
//!   [`Records`] aggregate root
//! - **Statistics**: [`Statistics::compute`] derives averages, ranges and
//!   failure tallies for every entity without mutating it
//! - **Ranking**: [`Ranking`] answers most-difficult / best / least-failing
//!   queries, returning every tied entity
//! - **Scoring**: [`score_values`] implements the top-three rubric
//!
//! Reading the text sources lives in `algobench-text`; rendering lives in
//! the `algobench` binary.
//!
//! # Examples
//!
//! ```
//! use algobench_core::{Algorithm, Dataset, DatasetId, Ranking, Records, ResultCell, StatsConfig};
//!
//! let mut records = Records::new();
//! records.add_dataset(Dataset::new(DatasetId::parse("D01S").unwrap(), "Iris", 1, 150, "UCI"));
//! records.add_dataset(Dataset::new(DatasetId::parse("D02A").unwrap(), "MNIST", 3, 70000, "LeCun"));
//! records.add_algorithm(Algorithm::new("Alpha", "ML", 2018, vec!["Ada".to_string()]));
//! records.add_algorithm(Algorithm::new("Beta", "DL", 2021, vec!["Bob".to_string()]));
//!
//! records.record_result("Alpha", "D01S", ResultCell::Value(90.0));
//! records.record_result("Alpha", "D02A", ResultCell::Value(70.0));
//! records.record_result("Beta", "D01S", ResultCell::Failed);
//!
//! let stats = records.statistics(&StatsConfig::default());
//! assert_eq!(stats.dataset("D01S").unwrap().average, Some(90.0));
//!
//! let beta = stats.algorithm("Beta").unwrap();
//! assert_eq!(beta.hard_failure_count, 1);
//! assert!(beta.satisfies_requirements());
//!
//! let ranking = Ranking::new(&records, &stats);
//! assert_eq!(ranking.most_difficult_datasets()[0].dataset.id.as_str(), "D02A");
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: derive `Serialize` for entities, cells and statistics

mod cell;
mod error;
mod model;
mod ranking;
mod records;
mod scoring;
mod stats;
mod table;

pub use cell::ResultCell;
pub use error::DatasetIdError;
pub use model::{Algorithm, Category, Dataset, DatasetId, DatasetType};
pub use ranking::{compare_averages, AlgorithmEntry, DatasetEntry, Ranking};
pub use records::{JoinOutcome, Records, FAILURE_MARKER};
pub use scoring::{score_algorithm, score_values, PLACE_WEIGHTS};
pub use stats::{
    AlgorithmStats, DatasetStats, OngoingPolicy, Statistics, StatsConfig, ValueRange, NO_DATA,
};
pub use table::{ResultTable, TableSummary};
