// SPDX-License-Identifier: MIT

//! Validation of free-form ascent date form fields.
//!
//! The completion modal submits day/month/year as free text; each field may
//! be left blank to mean "unknown". Valid input encodes to the canonical
//! `YYYY-MM-DD-HH-MM` storage string. The hour/minute fields are reserved
//! for a future time-of-day extension and always encode as placeholders.

use chrono::{Datelike, Utc};

use crate::models::date::{UNKNOWN_FIELD, UNKNOWN_YEAR};

/// Rejected date field input. The messages are shown verbatim in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateInputError {
    #[error("Invalid year")]
    InvalidYear,
    #[error("Invalid month")]
    InvalidMonth,
    #[error("Invalid day")]
    InvalidDay,
}

/// Validate day/month/year input and encode the canonical date-string.
///
/// Empty fields encode as placeholders. Years must be 4 digits and not in
/// the future; days are checked against the month length, including the
/// Gregorian leap rule for February.
pub fn parse_date_input(day: &str, month: &str, year: &str) -> Result<String, DateInputError> {
    parse_date_input_at(day, month, year, Utc::now().year())
}

/// `parse_date_input` with an injected "current year" for deterministic tests.
pub(crate) fn parse_date_input_at(
    day: &str,
    month: &str,
    year: &str,
    current_year: i32,
) -> Result<String, DateInputError> {
    let year = parse_year(year.trim(), current_year)?;
    let month = parse_month(month.trim())?;
    let day = parse_day(day.trim(), month, year)?;

    let encode = |v: Option<u32>| match v {
        Some(n) => format!("{:02}", n),
        None => UNKNOWN_FIELD.to_string(),
    };
    let year_field = match year {
        Some(y) => format!("{:04}", y),
        None => UNKNOWN_YEAR.to_string(),
    };

    Ok(format!(
        "{}-{}-{}-{}-{}",
        year_field,
        encode(month),
        encode(day),
        UNKNOWN_FIELD,
        UNKNOWN_FIELD
    ))
}

fn parse_year(field: &str, current_year: i32) -> Result<Option<i32>, DateInputError> {
    if field.is_empty() {
        return Ok(None);
    }
    if field.len() != 4 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateInputError::InvalidYear);
    }
    let year: i32 = field.parse().map_err(|_| DateInputError::InvalidYear)?;
    if year > current_year {
        return Err(DateInputError::InvalidYear);
    }
    Ok(Some(year))
}

fn parse_month(field: &str) -> Result<Option<u32>, DateInputError> {
    if field.is_empty() {
        return Ok(None);
    }
    match field.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Ok(Some(m)),
        _ => Err(DateInputError::InvalidMonth),
    }
}

fn parse_day(
    field: &str,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Option<u32>, DateInputError> {
    if field.is_empty() {
        return Ok(None);
    }
    // A day is only meaningful relative to a month.
    let Some(month) = month else {
        return Err(DateInputError::InvalidDay);
    };
    match field.parse::<u32>() {
        Ok(d) if d >= 1 && d <= days_in_month(month, year) => Ok(Some(d)),
        _ => Err(DateInputError::InvalidDay),
    }
}

/// Length of a month. With an unknown year, February is given the benefit
/// of the doubt (29 days).
fn days_in_month(month: u32, year: Option<i32>) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => match year {
            Some(y) if !is_leap_year(y) => 28,
            _ => 29,
        },
        _ => unreachable!("month already validated"),
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date_encodes_canonical() {
        let date = parse_date_input_at("15", "3", "2019", 2026).unwrap();
        assert_eq!(date, "2019-03-15-XX-XX");
    }

    #[test]
    fn test_all_blank_is_unknown_date() {
        let date = parse_date_input_at("", "", "", 2026).unwrap();
        assert_eq!(date, "XXXX-XX-XX-XX-XX");
    }

    #[test]
    fn test_future_year_rejected() {
        assert_eq!(
            parse_date_input_at("1", "1", "2027", 2026),
            Err(DateInputError::InvalidYear)
        );
        // Current year is fine
        assert!(parse_date_input_at("1", "1", "2026", 2026).is_ok());
    }

    #[test]
    fn test_year_must_be_four_digits() {
        for bad in ["99", "20191", "20a9", "-201"] {
            assert_eq!(
                parse_date_input_at("", "", bad, 2026),
                Err(DateInputError::InvalidYear),
                "year {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            parse_date_input_at("", "0", "", 2026),
            Err(DateInputError::InvalidMonth)
        );
        assert_eq!(
            parse_date_input_at("", "13", "", 2026),
            Err(DateInputError::InvalidMonth)
        );
        assert_eq!(parse_date_input_at("", "12", "", 2026).unwrap(), "XXXX-12-XX-XX-XX");
    }

    #[test]
    fn test_leap_year_rule() {
        // Divisible by 400: leap
        assert!(parse_date_input_at("29", "2", "2000", 2026).is_ok());
        // Divisible by 100 but not 400: not leap
        assert_eq!(
            parse_date_input_at("29", "2", "1900", 2026),
            Err(DateInputError::InvalidDay)
        );
        // Divisible by 4: leap
        assert!(parse_date_input_at("29", "2", "2024", 2026).is_ok());
        // Common year
        assert_eq!(
            parse_date_input_at("29", "2", "2023", 2026),
            Err(DateInputError::InvalidDay)
        );
    }

    #[test]
    fn test_month_lengths() {
        for short in ["4", "6", "9", "11"] {
            assert_eq!(
                parse_date_input_at("31", short, "2020", 2026),
                Err(DateInputError::InvalidDay),
                "month {} has no day 31",
                short
            );
        }
        assert!(parse_date_input_at("31", "1", "2020", 2026).is_ok());
    }

    #[test]
    fn test_day_without_month_rejected() {
        assert_eq!(
            parse_date_input_at("15", "", "2019", 2026),
            Err(DateInputError::InvalidDay)
        );
    }

    #[test]
    fn test_feb_29_allowed_when_year_unknown() {
        assert_eq!(
            parse_date_input_at("29", "2", "", 2026).unwrap(),
            "XXXX-02-29-XX-XX"
        );
    }
}
