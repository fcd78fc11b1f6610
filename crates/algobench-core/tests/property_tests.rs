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

//! Property-based tests for the statistics and scoring engines.
//!
//! Random result tables are generated over a fixed catalog and checked
//! against the invariants the reports depend on.

use algobench_core::{score_values, Ranking, ResultCell, StatsConfig};
use algobench_test::builders::RecordsBuilder;
use proptest::prelude::*;

const DATASET_IDS: [&str; 4] = ["D01S", "D02A", "D03S", "D04A"];
const ALGORITHMS: [&str; 3] = ["Alpha", "Beta", "Gamma"];

/// Any cell state, with measurements on a tenth-of-a-point grid.
fn cell() -> impl Strategy<Value = ResultCell> {
    prop_oneof![
        Just(ResultCell::Missing),
        Just(ResultCell::Failed),
        Just(ResultCell::Ongoing),
        (0u32..1000).prop_map(|tenths| ResultCell::Value(tenths as f64 / 10.0)),
    ]
}

fn table() -> impl Strategy<Value = Vec<ResultCell>> {
    prop::collection::vec(cell(), DATASET_IDS.len() * ALGORITHMS.len())
}

fn build(cells: &[ResultCell]) -> algobench_core::Records {
    let mut builder = RecordsBuilder::new();
    for id in DATASET_IDS {
        builder = builder.dataset(id, id);
    }
    for (i, name) in ALGORITHMS.iter().enumerate() {
        builder = builder.algorithm(name, if i == 0 { "ML" } else { "DL" });
    }
    for (a, name) in ALGORITHMS.iter().enumerate() {
        for (d, id) in DATASET_IDS.iter().enumerate() {
            let cell = cells[a * DATASET_IDS.len() + d];
            if cell != ResultCell::Missing {
                builder = builder.result(name, id, cell);
            }
        }
    }
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a dataset average is "no data" or lies inside its range.
    #[test]
    fn prop_average_within_range(cells in table()) {
        let records = build(&cells);
        let stats = records.statistics(&StatsConfig::default());
        for dataset in stats.datasets() {
            match (dataset.average, dataset.range) {
                (None, None) => {}
                (Some(avg), Some(range)) => {
                    prop_assert!(
                        range.contains(avg),
                        "{} average {} outside {}", dataset.id, avg, range
                    );
                }
                other => {
                    prop_assert!(false, "inconsistent stats {:?}", other);
                }
            }
        }
    }

    /// Property: algorithm hard failures count failed cells and nothing else.
    #[test]
    fn prop_hard_failures_count_failed_only(cells in table()) {
        let records = build(&cells);
        let stats = records.statistics(&StatsConfig::default());
        for (a, algorithm) in stats.algorithms().iter().enumerate() {
            let row = &cells[a * DATASET_IDS.len()..(a + 1) * DATASET_IDS.len()];
            let failed = row.iter().filter(|c| c.is_failed()).count();
            prop_assert_eq!(algorithm.hard_failure_count, failed);
            prop_assert_eq!(algorithm.fail_datasets.len(), failed);
        }
    }

    /// Property: dataset unresolved counts cover every non-measurement.
    #[test]
    fn prop_unresolved_counts_everything_else(cells in table()) {
        let records = build(&cells);
        let stats = records.statistics(&StatsConfig::default());
        for (d, dataset) in stats.datasets().iter().enumerate() {
            let unresolved = (0..ALGORITHMS.len())
                .filter(|a| cells[a * DATASET_IDS.len() + d].is_unresolved())
                .count();
            prop_assert_eq!(dataset.unresolved_count, unresolved);
        }
    }

    /// Property: tied extremes are all returned.
    #[test]
    fn prop_most_difficult_returns_every_minimum(cells in table()) {
        let records = build(&cells);
        let stats = records.statistics(&StatsConfig::default());
        let ranking = Ranking::new(&records, &stats);

        let lowest = stats
            .datasets()
            .iter()
            .filter_map(|d| d.average)
            .fold(f64::INFINITY, f64::min);
        let expected = stats
            .datasets()
            .iter()
            .filter(|d| d.average == Some(lowest))
            .count();
        prop_assert_eq!(ranking.most_difficult_datasets().len(), expected);

        let highest = stats.datasets().iter().map(|d| d.unresolved_count).max().unwrap_or(0);
        let expected = stats
            .datasets()
            .iter()
            .filter(|d| d.unresolved_count == highest)
            .count();
        prop_assert_eq!(ranking.most_failed_datasets().len(), expected);
    }

    /// Property: scoring ignores the order of the per-dataset values.
    #[test]
    fn prop_score_is_order_independent(
        values in prop::collection::vec((0u32..50).prop_map(|v| v as f64), 0..10),
        seed in any::<u64>()
    ) {
        let mut shuffled = values.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }
        prop_assert_eq!(score_values(&values), score_values(&shuffled));
    }

    /// Property: a score never exceeds six points per value.
    #[test]
    fn prop_score_bounded(
        values in prop::collection::vec((0u32..5).prop_map(|v| v as f64), 0..10)
    ) {
        prop_assert!(score_values(&values) <= 6 * values.len() as u32);
    }
}
