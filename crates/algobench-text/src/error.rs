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

//! Error types for reading AlgoBench text sources.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three input sources a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Datasets,
    Algorithms,
    Results,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datasets => write!(f, "dataset"),
            Self::Algorithms => write!(f, "algorithm"),
            Self::Results => write!(f, "result"),
        }
    }
}

/// Errors raised while reading and parsing the input sources.
///
/// Every variant is fatal for a run. Result rows that name algorithms or
/// datasets missing from the catalogs are not errors; see
/// [`algobench_core::JoinOutcome`].
///
/// # Examples
///
/// ```
/// use algobench_text::TextError;
///
/// let err = TextError::InvalidResultValue {
///     line: 3,
///     value: "abc".to_string(),
/// };
/// assert_eq!(err.to_string(), "line 3: invalid result value 'abc'");
/// ```
#[derive(Debug, Error)]
pub enum TextError {
    /// An input path does not exist.
    #[error("File not found: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
    },

    /// An input exists but could not be read.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes", .path.display())]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
    },

    /// Wrong field count or a non-numeric integer field.
    #[error("line {line}: malformed {kind} record: {message}")]
    MalformedRecord {
        kind: SourceKind,
        /// Line number (1-based).
        line: usize,
        message: String,
    },

    /// Dataset identifier fails the `D` + two digits + `S`/`A` check.
    #[error("line {line}: invalid dataset ID: {id}")]
    InvalidIdentifier {
        line: usize,
        id: String,
    },

    /// A result value is neither a decimal number nor a sentinel.
    #[error("line {line}: invalid result value '{value}'")]
    InvalidResultValue {
        line: usize,
        value: String,
    },

    /// A result line names an algorithm but carries no entries.
    #[error("line {line}: result record has no dataset entries")]
    EmptyResultRecord {
        line: usize,
    },

    /// Input has more records than the configured maximum.
    #[error("Security limit exceeded: more than {limit} lines")]
    TooManyLines {
        limit: usize,
    },
}

impl TextError {
    pub(crate) fn malformed(kind: SourceKind, line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Line number the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::InvalidIdentifier { line, .. }
            | Self::InvalidResultValue { line, .. }
            | Self::EmptyResultRecord { line } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for text source operations.
pub type Result<T> = std::result::Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TextError::SourceNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err = TextError::malformed(SourceKind::Datasets, 2, "expected 5 fields, got 4");
        assert_eq!(
            err.to_string(),
            "line 2: malformed dataset record: expected 5 fields, got 4"
        );
        assert_eq!(err.line(), Some(2));

        let err = TextError::InvalidIdentifier {
            line: 1,
            id: "X01S".to_string(),
        };
        assert_eq!(err.to_string(), "line 1: invalid dataset ID: X01S");
    }

    #[test]
    fn test_line_is_absent_for_file_errors() {
        let err = TextError::TooManyLines { limit: 10 };
        assert_eq!(err.line(), None);
    }
}
