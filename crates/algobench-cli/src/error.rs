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

//! Structured error types for the AlgoBench CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure status.

use algobench_text::TextError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for AlgoBench CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use algobench_cli::error::CliError;
///
/// fn append(path: &str) -> Result<(), CliError> {
///     std::fs::write(path, "report").map_err(|e| CliError::io_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or parsing one of the three sources failed.
    #[error(transparent)]
    Source(#[from] TextError),

    /// Writing output (stdout or the report file) failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid configuration provided by the user, such as a malformed
    /// `ALGOBENCH_MAX_FILE_SIZE`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a JSON formatting error.
    pub fn json_format(message: impl Into<String>) -> Self {
        Self::JsonFormat {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_format(err.to_string())
    }
}
