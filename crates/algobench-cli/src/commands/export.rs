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


//! Export command - append the categorized report to a file

use super::{append_file, load, ongoing_policy};
use crate::error::CliError;
use crate::render;
use algobench_core::StatsConfig;
use algobench_text::SourcePaths;
use chrono::Local;
use std::path::Path;

/// Report file used when `--report-file` is not given.
pub const DEFAULT_REPORT_FILE: &str = "reports.txt";

/// Append a timestamped categorized report to `report_file`.
///
/// Previous reports in the file are kept.
pub fn export(
    paths: &SourcePaths,
    report_file: &Path,
    per_row_ongoing: bool,
) -> Result<(), CliError> {
    let loaded = load(paths)?;
    let config = StatsConfig {
        ongoing_policy: ongoing_policy(per_row_ongoing),
    };
    let stats = loaded.records.statistics(&config);

    let block = render::render_export(&loaded.records, &stats, Local::now().naive_local());
    append_file(report_file, &block)?;
    tracing::info!(path = %report_file.display(), "report appended");

    println!("Report generated successfully.");
    Ok(())
}
