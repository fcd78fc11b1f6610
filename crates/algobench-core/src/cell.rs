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

//! The value stored at one (algorithm, dataset) pair.

use std::fmt;

/// State of a single algorithm-vs-dataset evaluation.
///
/// Only [`ResultCell::Value`] carries a measurement. The other three states
/// are the sentinels the reports distinguish:
///
/// | State | Meaning | Rendered |
/// |-------|---------|----------|
/// | `Missing` | no result line mentioned the pair | `XX` |
/// | `Ongoing` | mentioned, but with a placeholder value | `XX` |
/// | `Failed` | marked with the `404` sentinel | `--` |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "state", content = "value", rename_all = "snake_case")
)]
pub enum ResultCell {
    #[default]
    Missing,
    Failed,
    Ongoing,
    Value(f64),
}

impl ResultCell {
    /// The measurement, if this cell is a completed result.
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// `true` for the hard-failure state only.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// `true` for cells that are not yet measured: missing or ongoing.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Missing | Self::Ongoing)
    }

    /// `true` for anything that is not a completed measurement.
    pub fn is_unresolved(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

impl fmt::Display for ResultCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing | Self::Ongoing => f.write_str("XX"),
            Self::Failed => f.write_str("--"),
            // Whole numbers keep one decimal, as the sources write them.
            Self::Value(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}
