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

use crate::builders::RecordsBuilder;
use algobench_core::{Records, ResultCell};
use algobench_text::{build_records, ParseConfig, SourcePaths};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample dataset source: two simple, two advanced.
pub const DATASETS: &str = "\
D01S, Iris, 1, 150, UCI
D02S, Wine, 1, 178, UCI
D03A, MNIST, 3, 70000, LeCun
D04A, CIFAR10, 4, 60000, Krizhevsky
";

/// Sample algorithm source: two ML, two DL.
pub const ALGORITHMS: &str = "\
KNN, ML, 1967, Cover, Hart
SVM, ML, 1995, Cortes, Vapnik
CNN, DL, 1989, LeCun
ResNet, DL, 2015, He, Zhang, Ren, Sun
";

/// Sample result source.
///
/// Covers every cell state: SVM fails twice, CNN never reports `D02S` and
/// is still running on `D04A`, and `Transformer` is not in the catalog.
pub const RESULTS: &str = "\
KNN, D01S: 96.0, D02S: 91.5, D03A: 97.0, D04A: 404
SVM, D01S: 98.0, D02S: 404, D03A: 98.5, D04A: 404
CNN, D01S: 95.0, D03A: 99.2, D04A: XX
ResNet, D01S: 97.0, D02S: 93.0, D03A: 99.6, D04A: 96.4
Transformer, D01S: 99.0
";

/// Records parsed from [`DATASETS`], [`ALGORITHMS`] and [`RESULTS`].
pub fn sample_records() -> Records {
    match build_records(DATASETS, ALGORITHMS, RESULTS, &ParseConfig::default()) {
        Ok(loaded) => loaded.records,
        Err(e) => panic!("sample sources must parse: {}", e),
    }
}

/// Two datasets, Alpha measured on both, Beta (DL) failed on `D01S`.
pub fn alpha_beta() -> Records {
    RecordsBuilder::new()
        .dataset("D01S", "Simple Set")
        .dataset("D02A", "Advanced Set")
        .algorithm("Alpha", "ML")
        .algorithm("Beta", "DL")
        .result("Alpha", "D01S", ResultCell::Value(90.0))
        .result("Alpha", "D02A", ResultCell::Value(70.0))
        .result("Beta", "D01S", ResultCell::Failed)
        .build()
}

/// The three sources written to a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct SourceFiles {
    dir: TempDir,
    pub paths: SourcePaths,
}

impl SourceFiles {
    /// Write the sample sources.
    pub fn sample() -> Self {
        Self::write(DATASETS, ALGORITHMS, RESULTS)
    }

    /// Write custom sources as `datasets.txt`, `algorithms.txt` and
    /// `results.txt`.
    pub fn write(datasets: &str, algorithms: &str, results: &str) -> Self {
        let dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("failed to create temp dir: {}", e),
        };
        let write = |name: &str, content: &str| -> PathBuf {
            let path = dir.path().join(name);
            if let Err(e) = fs::write(&path, content) {
                panic!("failed to write {}: {}", path.display(), e);
            }
            path
        };
        let paths = SourcePaths {
            datasets: write("datasets.txt", datasets),
            algorithms: write("algorithms.txt", algorithms),
            results: write("results.txt", results),
        };
        Self { dir, paths }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Positional CLI arguments in `<RESULTS> <DATASETS> <ALGORITHMS>` order.
    pub fn args(&self) -> [&Path; 3] {
        [
            self.paths.results.as_path(),
            self.paths.datasets.as_path(),
            self.paths.algorithms.as_path(),
        ]
    }
}
