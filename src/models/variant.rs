// SPDX-License-Identifier: MIT

//! Peak-list variants and their completion rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Completion rule-set for a peak list.
///
/// The variant decides both how an ascent qualifies and how many ascents a
/// single mountain requires: one for `Standard`/`Winter`, one per season
/// for `FourSeason`, one per calendar month for `Grid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListVariant {
    Standard,
    Winter,
    FourSeason,
    Grid,
}

impl ListVariant {
    /// Wire name used by stored lists and the API layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Winter => "winter",
            Self::FourSeason => "fourSeason",
            Self::Grid => "grid",
        }
    }

    /// Display label (list pages show e.g. "Mt. Washington: Winter").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Winter => "Winter",
            Self::FourSeason => "4-Season",
            Self::Grid => "Grid",
        }
    }

    /// Number of qualifying ascents one mountain requires.
    pub fn required_per_mountain(&self) -> usize {
        match self {
            Self::Standard | Self::Winter => 1,
            Self::FourSeason => 4,
            Self::Grid => 12,
        }
    }
}

impl fmt::Display for ListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variant string from the wire that matches no known variant.
///
/// This is a programming or data error on the caller's side, not user
/// input; callers are expected to propagate it rather than default.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid peak list variant: {0}")]
pub struct InvalidVariant(pub String);

impl FromStr for ListVariant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "winter" => Ok(Self::Winter),
            "fourSeason" => Ok(Self::FourSeason),
            "grid" => Ok(Self::Grid),
            other => Err(InvalidVariant(other.to_string())),
        }
    }
}
