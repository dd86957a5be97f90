// SPDX-License-Identifier: MIT

//! Season and calendar-month classification of ascent dates.
//!
//! Seasons are astronomical: an ascent is "winter" from the December
//! solstice through the day before the March equinox, and so on around the
//! year. The solstice/equinox dates for a given year come from a
//! [`SeasonBoundaries`] provider so callers can swap in a precise
//! ephemeris table if they need one.

use crate::models::date::StructuredDate;
use crate::models::season::Season;

/// The four season-start dates of one calendar year, as (month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBoundaries {
    /// March equinox (spring starts)
    pub spring: (u32, u32),
    /// June solstice (summer starts)
    pub summer: (u32, u32),
    /// September equinox (fall starts)
    pub fall: (u32, u32),
    /// December solstice (winter starts)
    pub winter: (u32, u32),
}

/// Source of solstice/equinox dates per year.
pub trait SeasonBoundaries {
    fn boundaries_for(&self, year: i32) -> YearBoundaries;
}

/// UTC boundary days for 2015-2030. Each entry is the day-of-month of the
/// March equinox, June solstice, September equinox, December solstice.
const BOUNDARY_TABLE: &[(i32, [u32; 4])] = &[
    (2015, [20, 21, 23, 22]),
    (2016, [20, 20, 22, 21]),
    (2017, [20, 21, 22, 21]),
    (2018, [20, 21, 23, 21]),
    (2019, [20, 21, 23, 22]),
    (2020, [20, 20, 22, 21]),
    (2021, [20, 21, 22, 21]),
    (2022, [20, 21, 23, 21]),
    (2023, [20, 21, 23, 22]),
    (2024, [20, 20, 22, 21]),
    (2025, [20, 21, 22, 21]),
    (2026, [20, 21, 23, 21]),
    (2027, [20, 21, 23, 22]),
    (2028, [20, 20, 22, 21]),
    (2029, [20, 21, 22, 21]),
    (2030, [20, 21, 22, 21]),
];

/// Northern-hemisphere boundary dates: exact UTC dates where tabulated,
/// otherwise the fixed dates Mar 20 / Jun 21 / Sep 22 / Dec 21 (never off
/// by more than a day for 1900-2100).
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthernBoundaries;

impl SeasonBoundaries for NorthernBoundaries {
    fn boundaries_for(&self, year: i32) -> YearBoundaries {
        let days = BOUNDARY_TABLE
            .iter()
            .find(|(y, _)| *y == year)
            .map_or([20, 21, 22, 21], |(_, days)| *days);

        YearBoundaries {
            spring: (3, days[0]),
            summer: (6, days[1]),
            fall: (9, days[2]),
            winter: (12, days[3]),
        }
    }
}

/// Classify a date into its astronomical season.
///
/// Returns `None` when the year, month, or day is unknown — a date that
/// cannot be placed in a season never satisfies a season-matched variant.
pub fn classify_season(
    date: &StructuredDate,
    boundaries: &impl SeasonBoundaries,
) -> Option<Season> {
    let year = date.year?;
    let month_day = (date.month?, date.day?);
    let bounds = boundaries.boundaries_for(year);

    let season = if month_day < bounds.spring {
        Season::Winter
    } else if month_day < bounds.summer {
        Season::Spring
    } else if month_day < bounds.fall {
        Season::Summer
    } else if month_day < bounds.winter {
        Season::Fall
    } else {
        Season::Winter
    };
    Some(season)
}

/// True iff the date is fully known and falls in the given calendar month.
pub fn is_date_in_month(date: &StructuredDate, month: u32) -> bool {
    date.is_fully_known() && date.month == Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_of(s: &str) -> Option<Season> {
        classify_season(&StructuredDate::decode(s), &NorthernBoundaries)
    }

    #[test]
    fn test_midseason_dates() {
        assert_eq!(season_of("2020-01-10-XX-XX"), Some(Season::Winter));
        assert_eq!(season_of("2020-04-15-XX-XX"), Some(Season::Spring));
        assert_eq!(season_of("2020-07-04-XX-XX"), Some(Season::Summer));
        assert_eq!(season_of("2020-10-20-XX-XX"), Some(Season::Fall));
    }

    #[test]
    fn test_boundary_day_starts_season() {
        // 2020 boundaries: Mar 20 / Jun 20 / Sep 22 / Dec 21
        assert_eq!(season_of("2020-03-19-XX-XX"), Some(Season::Winter));
        assert_eq!(season_of("2020-03-20-XX-XX"), Some(Season::Spring));
        assert_eq!(season_of("2020-06-20-XX-XX"), Some(Season::Summer));
        assert_eq!(season_of("2020-09-22-XX-XX"), Some(Season::Fall));
        assert_eq!(season_of("2020-12-21-XX-XX"), Some(Season::Winter));
        assert_eq!(season_of("2020-12-31-XX-XX"), Some(Season::Winter));
    }

    #[test]
    fn test_table_year_differences() {
        // 2019's June solstice is the 21st, 2020's is the 20th
        assert_eq!(season_of("2019-06-20-XX-XX"), Some(Season::Spring));
        assert_eq!(season_of("2020-06-20-XX-XX"), Some(Season::Summer));
    }

    #[test]
    fn test_fallback_outside_table() {
        assert_eq!(season_of("1998-03-20-XX-XX"), Some(Season::Spring));
        assert_eq!(season_of("1998-12-20-XX-XX"), Some(Season::Fall));
    }

    #[test]
    fn test_unknown_fields_never_classify() {
        assert_eq!(season_of("XXXX-01-10-XX-XX"), None);
        assert_eq!(season_of("2020-XX-10-XX-XX"), None);
        assert_eq!(season_of("2020-01-XX-XX-XX"), None);
    }

    #[test]
    fn test_is_date_in_month() {
        let date = StructuredDate::decode("2020-07-04-XX-XX");
        assert!(is_date_in_month(&date, 7));
        assert!(!is_date_in_month(&date, 6));
        assert!(!is_date_in_month(&StructuredDate::decode("XXXX-07-04-XX-XX"), 7));
        assert!(!is_date_in_month(&StructuredDate::decode("2020-07-XX-XX-XX"), 7));
    }
}
