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

//! Line-oriented text sources → AlgoBench records.
//!
//! This crate reads the three comma-space delimited sources of a benchmark
//! run and joins them into [`algobench_core::Records`]:
//!
//! - **Datasets**: `datasetID, name, weight, size, source`
//! - **Algorithms**: `name, category, year, author1, author2, ...`
//! - **Results**: `algorithmName, datasetID: value, datasetID: value, ...`
//!
//! Two input-shape checks are enforced: dataset identifiers must be `D`, two
//! digits and `S`/`A`, and result values must be decimal numbers or one of
//! the sentinels (`404` failed, `XX` or empty for ongoing). Violations abort
//! with a [`TextError`] carrying the offending line. Result entries that name
//! an algorithm or dataset outside the catalogs are dropped, not rejected.
//!
//! # Examples
//!
//! ```no_run
//! use algobench_text::{load_records, ParseConfig, SourcePaths, DEFAULT_MAX_FILE_SIZE};
//!
//! let paths = SourcePaths::new("results.txt", "datasets.txt", "algorithms.txt");
//! let loaded = load_records(&paths, &ParseConfig::default(), DEFAULT_MAX_FILE_SIZE)?;
//! println!("{} datasets", loaded.records.datasets().len());
//! # Ok::<(), algobench_text::TextError>(())
//! ```

mod error;
mod load;
mod parse;
mod source;

pub use error::{Result, SourceKind, TextError};
pub use load::{build_records, load_records, DroppedResult, LoadedRecords, SourcePaths};
pub use parse::{
    parse_algorithms, parse_datasets, parse_result_value, parse_results, ResultEntry, ResultLine,
    ONGOING_MARKER,
};
pub use source::{
    read_source, ParseConfig, DEFAULT_DELIMITER, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_LINES,
};
