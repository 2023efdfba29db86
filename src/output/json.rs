//! JSON output formatting for sevendays.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use serde_json::json;

use crate::error::SevenDaysError;
use crate::schedule::{Entry, Week};

#[derive(Serialize)]
struct DayView<'a> {
    weekday: &'static str,
    is_today: bool,
    entries: &'a [Entry],
}

/// Format the week as JSON, days ordered from `start`.
///
/// # Errors
///
/// Returns `SevenDaysError::Parse` if JSON serialization fails.
pub fn format_week_json(week: &Week, today: NaiveDate, start: Weekday) -> Result<String, SevenDaysError> {
    let days: Vec<DayView<'_>> = week
        .days_from(start)
        .map(|day| DayView {
            weekday: day.name(),
            is_today: day.weekday() == today.weekday(),
            entries: day.entries(),
        })
        .collect();

    let output = json!({
        "today": today.format("%Y-%m-%d").to_string(),
        "days": days,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_SHORT_YEAR;
    use crate::schedule::build_week;

    #[test]
    fn test_json_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let week = build_week("every monday Standup\n2024-01-04 Dentist", today, DEFAULT_SHORT_YEAR);
        let output = format_week_json(&week, today, Weekday::Wed).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["today"], "2024-01-03");
        let days = value["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["weekday"], "Wednesday");
        assert_eq!(days[0]["is_today"], true);
        assert_eq!(days[1]["entries"][0]["text"], "Dentist ");
        assert_eq!(days[1]["entries"][0]["tier"], "imminent");
        assert_eq!(days[5]["weekday"], "Monday");
        assert_eq!(days[5]["entries"][0]["tier"], "weekly");
    }
}
