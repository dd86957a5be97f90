// SPDX-License-Identifier: MIT

//! Partially-specified ascent dates and the canonical storage format.
//!
//! Ascents are persisted as `YYYY-MM-DD-HH-MM` strings where any field may
//! be the placeholder `XX` (`XXXX` for the year). A user can report "I
//! climbed this on March 15, 2019", "sometime in 2019", or just "I climbed
//! this" — every component is independently optional.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for an unknown month/day/hour/minute field.
pub const UNKNOWN_FIELD: &str = "XX";
/// Placeholder for an unknown year field.
pub const UNKNOWN_YEAR: &str = "XXXX";

/// An ascent date with independently-optional components.
///
/// Ordering is lexicographic over `(year, month, day, hour, minute)` with
/// an unknown field sorting before any known value (the natural `Option`
/// ordering). This gives partially-known dates a documented total order:
/// "March 2019" sorts before "March 15, 2019", and a fully-unknown date
/// sorts before everything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StructuredDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl StructuredDate {
    /// Decode a canonical `YYYY-MM-DD-HH-MM` string.
    ///
    /// Any field that is not a plain integer (placeholders included)
    /// decodes to `None`. This never fails: short or mangled strings
    /// simply yield more unknown fields.
    pub fn decode(date_string: &str) -> Self {
        let mut fields = date_string.split('-');
        let year = fields.next().and_then(|f| f.parse::<i32>().ok());
        let mut next = || fields.next().and_then(|f| f.parse::<u32>().ok());
        let month = next();
        let day = next();
        let hour = next();
        let minute = next();

        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Decode a batch of canonical date strings, sorted ascending.
    ///
    /// The sort is stable, so dates with identical components keep their
    /// original relative order.
    pub fn decode_all(date_strings: &[String]) -> Vec<Self> {
        let mut dates: Vec<Self> = date_strings.iter().map(|s| Self::decode(s)).collect();
        dates.sort();
        dates
    }

    /// True when year, month, and day are all known.
    pub fn is_fully_known(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Re-encode to the canonical `YYYY-MM-DD-HH-MM` string.
    pub fn to_canonical(&self) -> String {
        let year = match self.year {
            Some(y) => format!("{:04}", y),
            None => UNKNOWN_YEAR.to_string(),
        };
        let field = |v: Option<u32>| match v {
            Some(n) => format!("{:02}", n),
            None => UNKNOWN_FIELD.to_string(),
        };
        format!(
            "{}-{}-{}-{}-{}",
            year,
            field(self.month),
            field(self.day),
            field(self.hour),
            field(self.minute)
        )
    }

    fn month_abbrev(month: u32) -> Option<&'static str> {
        let name = chrono::Month::try_from(month as u8).ok()?.name();
        Some(&name[..3])
    }
}

impl fmt::Display for StructuredDate {
    /// Human-readable rendering that degrades with missing components:
    /// "Mar 15, 2019", "Mar 2019", "2019", "Mar 15", or "unknown date".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.and_then(Self::month_abbrev);
        match (self.year, month, self.day) {
            (Some(y), Some(m), Some(d)) => write!(f, "{} {}, {}", m, d, y),
            (Some(y), Some(m), None) => write!(f, "{} {}", m, y),
            (Some(y), None, _) => write!(f, "{}", y),
            (None, Some(m), Some(d)) => write!(f, "{} {}", m, d),
            (None, Some(m), None) => write!(f, "{}", m),
            (None, None, _) => write!(f, "unknown date"),
        }
    }
}
