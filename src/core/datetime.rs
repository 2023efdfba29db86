//! Calendar date parsing for dated entries.
//!
//! A dated line starts with a date token in one of three shapes, tried in
//! this order:
//! - `2012-03-25` (ISO)
//! - `25.3.2012` (day.month.year)
//! - `25.3` (day.month, year supplied by the caller)

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Year used for `D.M` tokens unless configured otherwise.
///
/// The file format documents `D.M` as "current year", but historically every
/// short date landed in 2012. The fixed year stays the default so existing
/// calendar files render the same; `dates.short_year: current` opts into the
/// documented behavior.
pub const DEFAULT_SHORT_YEAR: i32 = 2012;

static ISO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap_or_else(|e| panic!("Invalid ISO date regex: {e}"))
});

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$")
        .unwrap_or_else(|e| panic!("Invalid day.month.year regex: {e}"))
});

static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})$").unwrap_or_else(|e| panic!("Invalid day.month regex: {e}"))
});

/// A token that is not a date in any accepted format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date: {0:?}")]
pub struct DateParseError(pub String);

/// Parse a date token from a calendar line.
///
/// `short_year` fills in the year for `D.M` tokens.
///
/// # Errors
///
/// Returns `DateParseError` if the token matches none of the accepted
/// formats or names a day that does not exist (e.g. `31.2.2024`).
pub fn parse_entry_date(token: &str, short_year: i32) -> Result<NaiveDate, DateParseError> {
    if let Some(caps) = ISO.captures(token) {
        return ymd(&caps[1], &caps[2], &caps[3]).ok_or_else(|| DateParseError(token.to_string()));
    }

    if let Some(caps) = DAY_MONTH_YEAR.captures(token) {
        return ymd(&caps[3], &caps[2], &caps[1]).ok_or_else(|| DateParseError(token.to_string()));
    }

    if let Some(caps) = DAY_MONTH.captures(token) {
        let day: u32 = caps[1].parse().map_err(|_| DateParseError(token.to_string()))?;
        let month: u32 = caps[2].parse().map_err(|_| DateParseError(token.to_string()))?;
        return NaiveDate::from_ymd_opt(short_year, month, day)
            .ok_or_else(|| DateParseError(token.to_string()));
    }

    Err(DateParseError(token.to_string()))
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_entry_date("2012-03-25", DEFAULT_SHORT_YEAR), Ok(date(2012, 3, 25)));
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(parse_entry_date("25.3.2012", DEFAULT_SHORT_YEAR), Ok(date(2012, 3, 25)));
        assert_eq!(parse_entry_date("05.03.2012", DEFAULT_SHORT_YEAR), Ok(date(2012, 3, 5)));
    }

    #[test]
    fn test_both_long_formats_agree() {
        for (iso, dotted) in [
            ("2024-01-01", "1.1.2024"),
            ("2024-02-29", "29.2.2024"),
            ("2025-12-31", "31.12.2025"),
        ] {
            assert_eq!(
                parse_entry_date(iso, DEFAULT_SHORT_YEAR),
                parse_entry_date(dotted, DEFAULT_SHORT_YEAR),
                "{iso} vs {dotted}"
            );
        }
    }

    #[test]
    fn test_short_date_uses_fixed_year_by_default() {
        assert_eq!(parse_entry_date("25.3", DEFAULT_SHORT_YEAR), Ok(date(2012, 3, 25)));
        assert_eq!(parse_entry_date("1.12", DEFAULT_SHORT_YEAR), Ok(date(2012, 12, 1)));
    }

    #[test]
    fn test_short_date_with_supplied_year() {
        assert_eq!(parse_entry_date("25.3", 2026), Ok(date(2026, 3, 25)));
    }

    #[test]
    fn test_short_date_leap_day_depends_on_year() {
        assert!(parse_entry_date("29.2", 2012).is_ok());
        assert!(parse_entry_date("29.2", 2026).is_err());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(parse_entry_date("2024-02-30", DEFAULT_SHORT_YEAR).is_err());
        assert!(parse_entry_date("31.4.2024", DEFAULT_SHORT_YEAR).is_err());
        assert!(parse_entry_date("13.13", DEFAULT_SHORT_YEAR).is_err());
    }

    #[test]
    fn test_rejects_unpadded_iso() {
        for token in ["2024-1-4", "2024-01-4", "24-01-04", "+2024-01-04", "02024-01-04"] {
            assert_eq!(
                parse_entry_date(token, DEFAULT_SHORT_YEAR),
                Err(DateParseError(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_rejects_non_dates() {
        for token in ["", "hello", "#", "2024", "1.2.3", "25.3.", "3/25/2024", "every"] {
            assert_eq!(
                parse_entry_date(token, DEFAULT_SHORT_YEAR),
                Err(DateParseError(token.to_string())),
                "{token:?}"
            );
        }
    }
}
