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


//! Validate command - parse and join the sources without reporting

use super::load;
use crate::error::CliError;
use algobench_text::SourcePaths;
use colored::Colorize;

/// Parse all three sources and print what was loaded.
///
/// # Output
///
/// - Dataset, algorithm and stored result counts
/// - Every result entry the join skipped, with its line
///
/// # Errors
///
/// Returns `Err` with the first source error; a `✗` marker is printed first.
pub fn validate(paths: &SourcePaths) -> Result<(), CliError> {
    let loaded = match load(paths) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), paths.results.display());
            return Err(e);
        }
    };

    let records = &loaded.records;
    println!("{} {}", "✓".green().bold(), paths.results.display());
    println!("  Datasets: {}", records.datasets().len());
    println!("  Algorithms: {}", records.algorithms().len());
    println!("  Results: {}", records.results().len());
    println!("  Dropped: {}", loaded.dropped.len());
    for dropped in &loaded.dropped {
        println!(
            "    line {}: {} {} ({:?})",
            dropped.line, dropped.algorithm, dropped.dataset_key, dropped.outcome
        );
    }
    Ok(())
}
