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

//! Error types for the AlgoBench data model.
//!
//! The statistics, ranking and scoring engines never fail; the only fallible
//! operation in this crate is constructing a [`DatasetId`](crate::DatasetId)
//! from untrusted text.

use thiserror::Error;

/// Reasons a dataset identifier is rejected.
///
/// A valid identifier is `D`, exactly two ASCII digits, then `S` (simple) or
/// `A` (advanced), e.g. `D07S` or `D12A`.
///
/// # Examples
///
/// ```
/// use algobench_core::{DatasetId, DatasetIdError};
///
/// let err = DatasetId::parse("X01S").unwrap_err();
/// assert_eq!(err, DatasetIdError::MissingPrefix("X01S".to_string()));
/// assert_eq!(err.to_string(), "dataset ID 'X01S' must start with 'D'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetIdError {
    /// Identifier does not start with `D`.
    #[error("dataset ID '{0}' must start with 'D'")]
    MissingPrefix(String),

    /// The part between prefix and suffix is not exactly two digits.
    #[error("dataset ID '{0}' must have exactly two digits after 'D'")]
    BadNumber(String),

    /// The identifier does not end with a type suffix.
    #[error("dataset ID '{0}' must end with 'S' or 'A'")]
    BadSuffix(String),
}

impl DatasetIdError {
    /// The rejected identifier text.
    pub fn id(&self) -> &str {
        match self {
            Self::MissingPrefix(id) | Self::BadNumber(id) | Self::BadSuffix(id) => id,
        }
    }
}
