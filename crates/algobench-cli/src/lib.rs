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


//! AlgoBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! Every command takes the three sources as positional arguments in
//! `<RESULTS> <DATASETS> <ALGORITHMS>` order.
//!
//! - **report**: print the results matrix, the results/dataset/algorithm
//!   summaries and the information tables (`--format json` for a JSON
//!   document)
//! - **export**: append a timestamped categorized report to `reports.txt`
//!   (or `--report-file`)
//! - **validate**: parse and join only, listing skipped result entries
//!
//! # Examples
//!
//! ```no_run
//! use algobench_cli::commands::{report, ReportFormat};
//! use algobench_text::SourcePaths;
//!
//! # fn main() -> Result<(), algobench_cli::error::CliError> {
//! let paths = SourcePaths::new("results.txt", "datasets.txt", "algorithms.txt");
//! report(&paths, ReportFormat::Text, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Source files larger than 100 MB are rejected before reading; the limit
//! is configurable via `ALGOBENCH_MAX_FILE_SIZE` (bytes).

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
