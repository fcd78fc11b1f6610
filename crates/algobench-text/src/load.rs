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

//! Assemble [`Records`] from the three sources.

use crate::error::Result;
use crate::parse::{parse_algorithms, parse_datasets, parse_results};
use crate::source::{read_source, ParseConfig};
use algobench_core::{JoinOutcome, Records};
use std::path::PathBuf;
use tracing::debug;

/// Locations of the three input sources.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub results: PathBuf,
    pub datasets: PathBuf,
    pub algorithms: PathBuf,
}

impl SourcePaths {
    pub fn new(
        results: impl Into<PathBuf>,
        datasets: impl Into<PathBuf>,
        algorithms: impl Into<PathBuf>,
    ) -> Self {
        Self {
            results: results.into(),
            datasets: datasets.into(),
            algorithms: algorithms.into(),
        }
    }
}

/// A result entry that did not make it into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedResult {
    /// Line in the results source.
    pub line: usize,
    pub algorithm: String,
    pub dataset_key: String,
    pub outcome: JoinOutcome,
}

/// Records plus the entries the join dropped.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    pub records: Records,
    pub dropped: Vec<DroppedResult>,
}

/// Parse all three sources and join the results onto the catalogs.
///
/// # Examples
///
/// ```
/// use algobench_text::{build_records, ParseConfig};
///
/// let loaded = build_records(
///     "D01S, Iris, 1, 150, UCI\n",
///     "KNN, ML, 1967, Cover\n",
///     "KNN, D01S: 95.5, D09A: 10\nSVM, D01S: 80\n",
///     &ParseConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(loaded.records.results().len(), 1);
/// assert_eq!(loaded.dropped.len(), 2);
/// ```
pub fn build_records(
    datasets: &str,
    algorithms: &str,
    results: &str,
    config: &ParseConfig,
) -> Result<LoadedRecords> {
    let mut records = Records::new();

    let datasets = parse_datasets(datasets, config)?;
    debug!("parsed {} datasets", datasets.len());
    for dataset in datasets {
        records.add_dataset(dataset);
    }

    let algorithms = parse_algorithms(algorithms, config)?;
    debug!("parsed {} algorithms", algorithms.len());
    for algorithm in algorithms {
        records.add_algorithm(algorithm);
    }

    let lines = parse_results(results, config)?;
    debug!("parsed {} result lines", lines.len());

    let mut dropped = Vec::new();
    for line in lines {
        for entry in line.entries {
            let outcome = records.record_result(&line.algorithm, &entry.dataset_key, entry.cell);
            if outcome.is_dropped() {
                debug!(
                    line = line.line,
                    algorithm = %line.algorithm,
                    dataset = %entry.dataset_key,
                    ?outcome,
                    "result entry dropped"
                );
                dropped.push(DroppedResult {
                    line: line.line,
                    algorithm: line.algorithm.clone(),
                    dataset_key: entry.dataset_key,
                    outcome,
                });
            }
        }
    }

    Ok(LoadedRecords { records, dropped })
}

/// Read the three source files and build records from them.
///
/// Sources are read in the order datasets, algorithms, results, so the
/// first missing file in that order is the one reported.
pub fn load_records(
    paths: &SourcePaths,
    config: &ParseConfig,
    max_file_size: u64,
) -> Result<LoadedRecords> {
    let datasets = read_source(&paths.datasets, max_file_size)?;
    let algorithms = read_source(&paths.algorithms, max_file_size)?;
    let results = read_source(&paths.results, max_file_size)?;
    debug!(
        datasets = %paths.datasets.display(),
        algorithms = %paths.algorithms.display(),
        results = %paths.results.display(),
        "sources read"
    );
    build_records(&datasets, &algorithms, &results, config)
}
