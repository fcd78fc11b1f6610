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

//! Top-three competitive score.
//!
//! Each algorithm's per-dataset values are sorted in descending order, with
//! missing, ongoing and failed cells counted as `0`. The values at sorted
//! positions 0, 1 and 2 are the first, second and third place values, and
//!
//! ```text
//! score = 3 × count(first) + 2 × count(second) + 1 × count(third)
//! ```
//!
//! Duplicates of a place value all earn that place's weight, so ties are
//! rewarded. With fewer than three datasets the absent places weigh nothing.

use crate::model::Algorithm;
use crate::records::Records;

/// Weights of the first, second and third place values.
pub const PLACE_WEIGHTS: [u32; 3] = [3, 2, 1];

/// Score a list of per-dataset values. Order of `values` does not matter.
///
/// # Examples
///
/// ```
/// use algobench_core::score_values;
///
/// assert_eq!(score_values(&[70.0, 90.0, 80.0]), 6);
/// // The tie at first place counts twice for both first and second place.
/// assert_eq!(score_values(&[90.0, 90.0, 70.0]), 11);
/// assert_eq!(score_values(&[42.0]), 3);
/// assert_eq!(score_values(&[]), 0);
/// ```
pub fn score_values(values: &[f64]) -> u32 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    sorted
        .iter()
        .zip(PLACE_WEIGHTS)
        .map(|(place_value, weight)| {
            let count = sorted.iter().filter(|v| *v == place_value).count() as u32;
            weight * count
        })
        .sum()
}

/// Score one algorithm over every catalog dataset.
pub fn score_algorithm(records: &Records, algorithm: &Algorithm) -> u32 {
    let values: Vec<f64> = records
        .results()
        .row(algorithm, records.datasets())
        .map(|(_, cell)| cell.as_value().unwrap_or(0.0))
        .collect();
    score_values(&values)
}
