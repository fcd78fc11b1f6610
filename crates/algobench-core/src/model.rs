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

//! Catalog entities: datasets and algorithms.

use crate::error::DatasetIdError;
use std::fmt;

/// Validated dataset identifier such as `D01S` or `D12A`.
///
/// The identifier is the natural join key between the dataset catalog and
/// the results source. Its last character fixes the dataset type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DatasetId(String);

impl DatasetId {
    /// Parse and validate an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench_core::{DatasetId, DatasetType};
    ///
    /// let id = DatasetId::parse("D03A").unwrap();
    /// assert_eq!(id.kind(), DatasetType::Advanced);
    /// assert!(DatasetId::parse("D3A").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DatasetIdError> {
        let Some(rest) = raw.strip_prefix('D') else {
            return Err(DatasetIdError::MissingPrefix(raw.to_string()));
        };
        let Some(digits) = rest.strip_suffix(|c: char| c == 'S' || c == 'A') else {
            return Err(DatasetIdError::BadSuffix(raw.to_string()));
        };
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DatasetIdError::BadNumber(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dataset type, decided solely by the trailing character.
    pub fn kind(&self) -> DatasetType {
        if self.0.ends_with('S') {
            DatasetType::Simple
        } else {
            DatasetType::Advanced
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DatasetId {
    type Err = DatasetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Simple (`S`) or advanced (`A`) benchmark task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DatasetType {
    Simple,
    Advanced,
}

impl DatasetType {
    /// Single-letter code used in tables.
    pub fn code(self) -> char {
        match self {
            Self::Simple => 'S',
            Self::Advanced => 'A',
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A benchmark task descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dataset {
    pub id: DatasetId,
    pub name: String,
    pub weight: i64,
    pub size: i64,
    pub source: String,
}

impl Dataset {
    pub fn new(
        id: DatasetId,
        name: impl Into<String>,
        weight: i64,
        size: i64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            size,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> DatasetType {
        self.id.kind()
    }
}

/// Algorithm family.
///
/// `ML` and `DL` are the two families the reports split on; any other label
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Ml,
    Dl,
    Other(String),
}

impl Category {
    /// Largest number of hard failures an algorithm of this category may
    /// have and still satisfy the benchmark requirements.
    pub fn max_hard_failures(&self) -> usize {
        match self {
            Self::Ml => 1,
            _ => 2,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ml => "ML",
            Self::Dl => "DL",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "ML" => Self::Ml,
            "DL" => Self::Dl,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A benchmark participant. `name` is the join key into the results table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Algorithm {
    pub name: String,
    pub category: Category,
    pub year: i32,
    pub authors: Vec<String>,
}

impl Algorithm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<Category>,
        year: i32,
        authors: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            year,
            authors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        for raw in ["D00S", "D01S", "D99A", "D42A"] {
            let id = DatasetId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(
            DatasetId::parse("X01S"),
            Err(DatasetIdError::MissingPrefix("X01S".to_string()))
        );
        assert_eq!(
            DatasetId::parse("D01X"),
            Err(DatasetIdError::BadSuffix("D01X".to_string()))
        );
        assert_eq!(
            DatasetId::parse("D1S"),
            Err(DatasetIdError::BadNumber("D1S".to_string()))
        );
        assert_eq!(
            DatasetId::parse("D001S"),
            Err(DatasetIdError::BadNumber("D001S".to_string()))
        );
        assert_eq!(
            DatasetId::parse("DabS"),
            Err(DatasetIdError::BadNumber("DabS".to_string()))
        );
        assert!(DatasetId::parse("").is_err());
        assert!(DatasetId::parse("d01S").is_err());
    }

    #[test]
    fn test_kind_follows_suffix() {
        assert_eq!(DatasetId::parse("D01S").unwrap().kind(), DatasetType::Simple);
        assert_eq!(DatasetId::parse("D01A").unwrap().kind(), DatasetType::Advanced);
        assert_eq!(DatasetType::Simple.to_string(), "S");
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(Category::from("ML"), Category::Ml);
        assert_eq!(Category::from("DL"), Category::Dl);
        assert_eq!(Category::from("RL"), Category::Other("RL".to_string()));
        assert_eq!(Category::Ml.max_hard_failures(), 1);
        assert_eq!(Category::Dl.max_hard_failures(), 2);
        assert_eq!(Category::from("RL").max_hard_failures(), 2);
        assert_eq!(Category::from("RL").to_string(), "RL");
    }
}
