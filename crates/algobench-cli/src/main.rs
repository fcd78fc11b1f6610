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


//! AlgoBench Command Line Interface

use algobench_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// AlgoBench - algorithm benchmark records
///
/// Joins benchmark results onto dataset and algorithm catalogs and reports
/// per-dataset difficulty, per-algorithm performance and rankings.
///
/// # Examples
///
/// ```bash
/// # Print the console report
/// algobench report results.txt datasets.txt algorithms.txt
///
/// # Same report as JSON
/// algobench report results.txt datasets.txt algorithms.txt --format json
///
/// # Append a categorized report to reports.txt
/// algobench export results.txt datasets.txt algorithms.txt
/// ```
#[derive(Parser)]
#[command(name = "algobench")]
#[command(author, version, about = "AlgoBench - algorithm benchmark records", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "algobench_cli=debug,algobench_text=debug,algobench_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
