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

//! Shared test fixtures and builders for AlgoBench crates.
//!
//! # Quick Start
//!
//! ```rust
//! use algobench_core::ResultCell;
//! use algobench_test::builders::RecordsBuilder;
//! use algobench_test::fixtures;
//!
//! // The four-dataset, four-algorithm sample run
//! let records = fixtures::sample_records();
//! assert_eq!(records.datasets().len(), 4);
//!
//! // A custom run
//! let records = RecordsBuilder::new()
//!     .dataset("D01S", "Iris")
//!     .algorithm("KNN", "ML")
//!     .result("KNN", "D01S", ResultCell::Value(96.0))
//!     .build();
//! assert_eq!(records.results().len(), 1);
//! ```

/// Fluent construction of records.
pub mod builders;

/// Canonical sample sources and records.
pub mod fixtures;

pub use fixtures::SourceFiles;
