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


//! Report rendering.
//!
//! Every renderer returns a `String`; the commands decide where it goes.
//!
//! - [`console`]: the interactive report (results matrix, summaries and
//!   information tables)
//! - [`export`]: the categorized report appended to the report file
//! - [`json`]: the machine-readable report

pub mod console;
pub mod export;
pub mod json;

pub use console::render_report;
pub use export::render_export;
pub use json::render_json;

use algobench_core::{Algorithm, AlgorithmStats, Dataset, DatasetStats};

/// Column header shared by every dataset information table.
pub const DATASET_HEADER: &str = "| DatasetID Name Type Weight Ndata Source Average Range Nfail |";

/// One row of a dataset information table.
pub fn dataset_line(dataset: &Dataset, stats: &DatasetStats) -> String {
    format!(
        "| {} {} {} {} {} {} {} {} {} |",
        dataset.id,
        dataset.name,
        dataset.kind().code(),
        dataset.weight,
        dataset.size,
        dataset.source,
        stats.average_label(),
        stats.range_label(),
        stats.unresolved_count
    )
}

/// Authors joined the way the tables show them.
pub fn authors_label(algorithm: &Algorithm) -> String {
    algorithm.authors.join("-")
}

/// Algorithm name, flagged with `(!)` when its failure budget is exceeded.
pub fn flagged_name(algorithm: &Algorithm, stats: &AlgorithmStats) -> String {
    if stats.satisfies_requirements() {
        algorithm.name.clone()
    } else {
        format!("{} (!)", algorithm.name)
    }
}

/// `"s"` unless exactly one item is described.
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
