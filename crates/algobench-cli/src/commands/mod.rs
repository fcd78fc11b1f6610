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


//! CLI command implementations

mod export;
mod report;
mod validate;

pub use export::{export, DEFAULT_REPORT_FILE};
pub use report::{report, ReportFormat};
pub use validate::validate;

use crate::error::CliError;
use algobench_core::OngoingPolicy;
use algobench_text::{load_records, LoadedRecords, ParseConfig, SourcePaths};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum source file size (100 MB).
/// Can be overridden via ALGOBENCH_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = algobench_text::DEFAULT_MAX_FILE_SIZE;

/// Get the maximum file size from environment or use default.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] if `ALGOBENCH_MAX_FILE_SIZE` is set
/// but is not a byte count.
fn get_max_file_size() -> Result<u64, CliError> {
    parse_max_file_size(std::env::var("ALGOBENCH_MAX_FILE_SIZE").ok().as_deref())
}

fn parse_max_file_size(value: Option<&str>) -> Result<u64, CliError> {
    match value {
        None => Ok(DEFAULT_MAX_FILE_SIZE),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            CliError::InvalidInput(format!(
                "ALGOBENCH_MAX_FILE_SIZE must be a size in bytes, got '{}'",
                raw
            ))
        }),
    }
}

/// Load the three sources with the configured size limit.
///
/// Entries the join drops are logged, never fatal.
pub fn load(paths: &SourcePaths) -> Result<LoadedRecords, CliError> {
    let loaded = load_records(paths, &ParseConfig::default(), get_max_file_size()?)?;
    for dropped in &loaded.dropped {
        tracing::info!(
            line = dropped.line,
            algorithm = %dropped.algorithm,
            dataset = %dropped.dataset_key,
            outcome = ?dropped.outcome,
            "skipped result entry"
        );
    }
    Ok(loaded)
}

/// Map the `--per-row-ongoing` flag to a policy.
pub fn ongoing_policy(per_row: bool) -> OngoingPolicy {
    if per_row {
        OngoingPolicy::PerRow
    } else {
        OngoingPolicy::Global
    }
}

/// Write content to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}

/// Append content to a file, creating it if needed.
pub fn append_file(path: &Path, content: &str) -> Result<(), CliError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::io_error(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| CliError::io_error(path, e))
}
