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


//! Report command - console or JSON report

use super::{load, ongoing_policy, write_output};
use crate::error::CliError;
use crate::render;
use algobench_core::StatsConfig;
use algobench_text::SourcePaths;
use clap::ValueEnum;

/// Output format of `algobench report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Load the sources and print the full report.
///
/// # Arguments
///
/// * `paths` - The results, datasets and algorithms sources
/// * `format` - Console text or pretty JSON
/// * `per_row_ongoing` - Count pending cells per algorithm row instead of
///   over the whole table
///
/// # Errors
///
/// Returns `Err` if a source cannot be read or parsed, or stdout fails.
pub fn report(
    paths: &SourcePaths,
    format: ReportFormat,
    per_row_ongoing: bool,
) -> Result<(), CliError> {
    let loaded = load(paths)?;
    let config = StatsConfig {
        ongoing_policy: ongoing_policy(per_row_ongoing),
    };
    let stats = loaded.records.statistics(&config);

    let output = match format {
        ReportFormat::Text => render::render_report(&loaded.records, &stats),
        ReportFormat::Json => {
            let mut json = render::render_json(&loaded.records, &stats)?;
            json.push('\n');
            json
        }
    };
    write_output(&output)?;
    tracing::info!(?format, "report written");
    Ok(())
}
