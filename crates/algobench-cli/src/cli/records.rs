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


//! Commands that read the results, datasets and algorithms sources.

use crate::commands::{self, ReportFormat, DEFAULT_REPORT_FILE};
use crate::error::CliError;
use algobench_text::SourcePaths;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// The three positional sources, in `<RESULTS> <DATASETS> <ALGORITHMS>` order.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Results file (`name, DnnT: value, ...` per line)
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,

    /// Datasets file (`id, name, weight, size, source` per line)
    #[arg(value_name = "DATASETS")]
    pub datasets: PathBuf,

    /// Algorithms file (`name, category, year, author...` per line)
    #[arg(value_name = "ALGORITHMS")]
    pub algorithms: PathBuf,
}

impl SourceArgs {
    pub fn paths(&self) -> SourcePaths {
        SourcePaths::new(&self.results, &self.datasets, &self.algorithms)
    }
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// Print the results matrix, summaries and information tables
    Report {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Count pending results per algorithm instead of over the whole table
        #[arg(long)]
        per_row_ongoing: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Append the categorized report to the report file
    Export {
        #[command(flatten)]
        sources: SourceArgs,

        /// Report file to append to
        #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT_FILE)]
        report_file: PathBuf,

        /// Count pending results per algorithm instead of over the whole table
        #[arg(long)]
        per_row_ongoing: bool,
    },

    /// Parse the sources and list skipped result entries
    Validate {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

impl RecordCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            RecordCommands::Report {
                sources,
                format,
                per_row_ongoing,
                no_color,
            } => {
                if no_color {
                    colored::control::set_override(false);
                }
                commands::report(&sources.paths(), format, per_row_ongoing)
            }
            RecordCommands::Export {
                sources,
                report_file,
                per_row_ongoing,
            } => commands::export(&sources.paths(), &report_file, per_row_ongoing),
            RecordCommands::Validate { sources } => commands::validate(&sources.paths()),
        }
    }
}
