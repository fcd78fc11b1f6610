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


//! CLI command definitions and argument parsing.
//!
//! - [`records`]: commands that load the three sources (report, export,
//!   validate)

mod records;

use crate::error::CliError;
use clap::Subcommand;

pub use records::{RecordCommands, SourceArgs};

/// Top-level CLI commands enum.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use algobench_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Record commands - flattened to appear at top level
    #[command(flatten)]
    Records(RecordCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a source cannot be read or parsed, or output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Records(cmd) => cmd.execute(),
        }
    }
}
