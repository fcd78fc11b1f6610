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


//! JSON rendering for `algobench report --format json`.

use crate::error::CliError;
use algobench_core::{
    Algorithm, AlgorithmStats, Dataset, DatasetStats, Ranking, Records, ResultCell, Statistics,
    TableSummary,
};
use serde::Serialize;

/// The whole report as one JSON document.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub summary: TableSummary,
    pub datasets: Vec<DatasetReport<'a>>,
    pub algorithms: Vec<AlgorithmReport<'a>>,
    pub results: Vec<ResultRow<'a>>,
    pub rankings: Rankings<'a>,
}

#[derive(Debug, Serialize)]
pub struct DatasetReport<'a> {
    pub dataset: &'a Dataset,
    pub statistics: &'a DatasetStats,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmReport<'a> {
    pub algorithm: &'a Algorithm,
    pub statistics: &'a AlgorithmStats,
    pub satisfies_requirements: bool,
}

/// One matrix row, cells in catalog order.
#[derive(Debug, Serialize)]
pub struct ResultRow<'a> {
    pub algorithm: &'a str,
    pub cells: Vec<ResultEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ResultEntry<'a> {
    pub dataset: &'a str,
    pub result: ResultCell,
}

/// Names of the entities that win each ranking; ties keep every member.
#[derive(Debug, Serialize)]
pub struct Rankings<'a> {
    pub most_difficult_datasets: Vec<&'a str>,
    pub most_failed_datasets: Vec<&'a str>,
    pub best_algorithms: Vec<&'a str>,
    pub least_failing_algorithms: Vec<&'a str>,
}

impl<'a> ReportDocument<'a> {
    pub fn new(records: &'a Records, stats: &'a Statistics) -> Self {
        let ranking = Ranking::new(records, stats);

        let datasets = ranking
            .datasets()
            .into_iter()
            .map(|e| DatasetReport {
                dataset: e.dataset,
                statistics: e.stats,
            })
            .collect();

        let algorithms = ranking
            .algorithms()
            .into_iter()
            .map(|e| AlgorithmReport {
                algorithm: e.algorithm,
                statistics: e.stats,
                satisfies_requirements: e.stats.satisfies_requirements(),
            })
            .collect();

        let results = records
            .algorithms()
            .iter()
            .map(|algorithm| ResultRow {
                algorithm: &algorithm.name,
                cells: records
                    .results()
                    .row(algorithm, records.datasets())
                    .map(|(dataset, result)| ResultEntry {
                        dataset: dataset.id.as_str(),
                        result,
                    })
                    .collect(),
            })
            .collect();

        let rankings = Rankings {
            most_difficult_datasets: ranking
                .most_difficult_datasets()
                .iter()
                .map(|e| e.dataset.id.as_str())
                .collect(),
            most_failed_datasets: ranking
                .most_failed_datasets()
                .iter()
                .map(|e| e.dataset.id.as_str())
                .collect(),
            best_algorithms: ranking
                .best_algorithms()
                .iter()
                .map(|e| e.algorithm.name.as_str())
                .collect(),
            least_failing_algorithms: ranking
                .least_failing_algorithms()
                .iter()
                .map(|e| e.algorithm.name.as_str())
                .collect(),
        };

        Self {
            summary: records.summary(),
            datasets,
            algorithms,
            results,
            rankings,
        }
    }
}

/// Pretty-printed JSON report.
pub fn render_json(records: &Records, stats: &Statistics) -> Result<String, CliError> {
    let document = ReportDocument::new(records, stats);
    Ok(serde_json::to_string_pretty(&document)?)
}
