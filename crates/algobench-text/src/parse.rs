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

//! Parsers for the dataset, algorithm and result sources.
//!
//! ```text
//! datasets:    D01S, Iris, 1, 150, UCI
//! algorithms:  KNN, ML, 1967, Cover, Hart
//! results:     KNN, D01S: 95.3, D02A: 404, D03S: XX
//! ```

use crate::error::{Result, SourceKind, TextError};
use crate::source::{split_lines, ParseConfig};
use algobench_core::{Algorithm, Dataset, DatasetId, ResultCell, FAILURE_MARKER};

/// Placeholder some sources write for a pending evaluation.
pub const ONGOING_MARKER: &str = "XX";

/// Field count of a dataset record.
const DATASET_FIELDS: usize = 5;

/// Minimum field count of an algorithm record (name, category, year).
const ALGORITHM_MIN_FIELDS: usize = 3;

/// One `datasetID: value` entry of a result line.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    /// Dataset identifier exactly as written; may be unknown to the catalog.
    pub dataset_key: String,
    pub cell: ResultCell,
}

/// A parsed result line: one algorithm and its reported entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLine {
    /// 1-based line number in the results source.
    pub line: usize,
    pub algorithm: String,
    pub entries: Vec<ResultEntry>,
}

/// Parse the dataset source.
///
/// # Errors
///
/// - [`TextError::MalformedRecord`] for a field count other than five or a
///   non-integer weight or size
/// - [`TextError::InvalidIdentifier`] for an identifier that is not `D`,
///   two digits, then `S` or `A`
///
/// # Examples
///
/// ```
/// use algobench_text::{parse_datasets, ParseConfig};
///
/// let datasets = parse_datasets("D01S, Iris, 1, 150, UCI\n", &ParseConfig::default()).unwrap();
/// assert_eq!(datasets[0].name, "Iris");
/// assert_eq!(datasets[0].size, 150);
/// ```
pub fn parse_datasets(input: &str, config: &ParseConfig) -> Result<Vec<Dataset>> {
    split_lines(input, config)?
        .into_iter()
        .map(|line| {
            let number = line.number;
            let &[id, name, weight, size, source] = &line.fields[..] else {
                return Err(TextError::malformed(
                    SourceKind::Datasets,
                    number,
                    format!(
                        "expected {} fields, got {}",
                        DATASET_FIELDS,
                        line.fields.len()
                    ),
                ));
            };
            let id = DatasetId::parse(id).map_err(|e| TextError::InvalidIdentifier {
                line: number,
                id: e.id().to_string(),
            })?;
            let weight = parse_int(SourceKind::Datasets, number, "weight", weight)?;
            let size = parse_int(SourceKind::Datasets, number, "size", size)?;
            Ok(Dataset::new(id, name, weight, size, source))
        })
        .collect()
}

/// Parse the algorithm source. Every field after the year is an author.
///
/// # Examples
///
/// ```
/// use algobench_core::Category;
/// use algobench_text::{parse_algorithms, ParseConfig};
///
/// let algorithms = parse_algorithms("CNN, DL, 1989, LeCun, Bengio\n", &ParseConfig::default()).unwrap();
/// assert_eq!(algorithms[0].category, Category::Dl);
/// assert_eq!(algorithms[0].authors, vec!["LeCun", "Bengio"]);
/// ```
pub fn parse_algorithms(input: &str, config: &ParseConfig) -> Result<Vec<Algorithm>> {
    split_lines(input, config)?
        .into_iter()
        .map(|line| {
            let number = line.number;
            let [name, category, year, authors @ ..] = &line.fields[..] else {
                return Err(TextError::malformed(
                    SourceKind::Algorithms,
                    number,
                    format!(
                        "expected at least {} fields, got {}",
                        ALGORITHM_MIN_FIELDS,
                        line.fields.len()
                    ),
                ));
            };
            let year: i32 = year.parse().map_err(|_| {
                TextError::malformed(
                    SourceKind::Algorithms,
                    number,
                    format!("year '{}' is not an integer", year),
                )
            })?;
            let authors = authors.iter().map(|a| a.to_string()).collect();
            Ok(Algorithm::new(*name, *category, year, authors))
        })
        .collect()
}

/// Parse the result source without consulting any catalog.
///
/// Dataset keys are kept as written so that the join can drop keys the
/// catalog does not know about. An entry whose key is the failure marker is
/// recorded as failed whatever its value.
///
/// # Errors
///
/// - [`TextError::EmptyResultRecord`] for a line with an algorithm name only
/// - [`TextError::MalformedRecord`] for an entry without a `:` separator
/// - [`TextError::InvalidResultValue`] for a value that is neither a decimal
///   number, `404`, `XX` nor empty
///
/// # Examples
///
/// ```
/// use algobench_core::ResultCell;
/// use algobench_text::{parse_results, ParseConfig};
///
/// let lines = parse_results("KNN, D01S: 95.5, D02A: 404\n", &ParseConfig::default()).unwrap();
/// assert_eq!(lines[0].algorithm, "KNN");
/// assert_eq!(lines[0].entries[0].cell, ResultCell::Value(95.5));
/// assert_eq!(lines[0].entries[1].cell, ResultCell::Failed);
/// ```
pub fn parse_results(input: &str, config: &ParseConfig) -> Result<Vec<ResultLine>> {
    split_lines(input, config)?
        .into_iter()
        .map(|line| {
            let number = line.number;
            let Some((algorithm, entries)) = line.fields.split_first() else {
                return Err(TextError::EmptyResultRecord { line: number });
            };
            if entries.is_empty() {
                return Err(TextError::EmptyResultRecord { line: number });
            }
            let entries = entries
                .iter()
                .map(|entry| parse_entry(number, entry))
                .collect::<Result<Vec<_>>>()?;
            Ok(ResultLine {
                line: number,
                algorithm: algorithm.to_string(),
                entries,
            })
        })
        .collect()
}

fn parse_entry(line: usize, entry: &str) -> Result<ResultEntry> {
    let Some((key, value)) = entry.split_once(':') else {
        return Err(TextError::malformed(
            SourceKind::Results,
            line,
            format!("entry '{}' is not 'datasetID: value'", entry),
        ));
    };
    let key = key.trim();
    let cell = if key == FAILURE_MARKER {
        ResultCell::Failed
    } else {
        parse_result_value(line, value.trim())?
    };
    Ok(ResultEntry {
        dataset_key: key.to_string(),
        cell,
    })
}

/// Interpret one result value.
///
/// | Value | Cell |
/// |-------|------|
/// | decimal with at most one `.` | [`ResultCell::Value`] |
/// | `404` | [`ResultCell::Failed`] |
/// | empty or `XX` | [`ResultCell::Ongoing`] |
pub fn parse_result_value(line: usize, value: &str) -> Result<ResultCell> {
    if value == FAILURE_MARKER {
        return Ok(ResultCell::Failed);
    }
    if value.is_empty() || value == ONGOING_MARKER {
        return Ok(ResultCell::Ongoing);
    }
    let invalid = || TextError::InvalidResultValue {
        line,
        value: value.to_string(),
    };
    if !is_plain_decimal(value) {
        return Err(invalid());
    }
    value.parse::<f64>().map(ResultCell::Value).map_err(|_| invalid())
}

/// Digits with at most one decimal point and at least one digit.
fn is_plain_decimal(value: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for b in value.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

fn parse_int(kind: SourceKind, line: usize, field: &str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        TextError::malformed(kind, line, format!("{} '{}' is not an integer", field, raw))
    })
}
