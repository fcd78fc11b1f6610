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

//! Source configuration, line splitting and file reading.

use crate::error::{Result, TextError};
use std::fs;
use std::io;
use std::path::Path;

/// Default maximum number of records per source.
pub const DEFAULT_MAX_LINES: usize = 1_000_000;

/// Default maximum source file size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Field separator used by every source.
pub const DEFAULT_DELIMITER: &str = ", ";

/// Configuration for parsing the text sources.
///
/// # Examples
///
/// ```
/// use algobench_text::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert_eq!(config.delimiter, ", ");
/// assert_eq!(config.max_lines, 1_000_000);
///
/// let small = ParseConfig {
///     max_lines: 100,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Separator between fields of a record (default: `", "`).
    pub delimiter: String,

    /// Maximum number of non-blank lines per source (default: 1,000,000).
    pub max_lines: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// One non-blank source line split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// 1-based line number in the source.
    pub number: usize,
    pub fields: Vec<&'a str>,
}

/// Split a source into records. Blank lines are skipped and surrounding
/// whitespace is trimmed before splitting.
pub(crate) fn split_lines<'a>(input: &'a str, config: &ParseConfig) -> Result<Vec<Line<'a>>> {
    let mut lines = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if lines.len() == config.max_lines {
            return Err(TextError::TooManyLines {
                limit: config.max_lines,
            });
        }
        lines.push(Line {
            number: idx + 1,
            fields: trimmed.split(config.delimiter.as_str()).collect(),
        });
    }
    Ok(lines)
}

/// Read a source file into memory, refusing files over `max_size` bytes.
///
/// A path that does not exist is reported as [`TextError::SourceNotFound`].
pub fn read_source(path: impl AsRef<Path>, max_size: u64) -> Result<String> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(TextError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_size,
        });
    }

    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, err: io::Error) -> TextError {
    if err.kind() == io::ErrorKind::NotFound {
        TextError::SourceNotFound {
            path: path.to_path_buf(),
        }
    } else {
        TextError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
