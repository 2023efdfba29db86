//! Weekday name resolution for recurring entries.

use chrono::Weekday;

/// Index returned by [`weekday_index`] for a token that names no weekday.
///
/// Callers must treat it as "skip this line".
pub const UNKNOWN_WEEKDAY: u32 = 7;

/// Resolve a full English weekday name, ignoring case.
///
/// Only full names are accepted: `Monday` and `FRIDAY` resolve, `mon` and
/// `fri` do not.
#[must_use]
pub fn resolve_weekday(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Sunday-based index (Sunday = 0 .. Saturday = 6) of a weekday name.
///
/// Returns [`UNKNOWN_WEEKDAY`] for anything that is not a weekday name.
#[must_use]
pub fn weekday_index(name: &str) -> u32 {
    resolve_weekday(name).map_or(UNKNOWN_WEEKDAY, |day| day.num_days_from_sunday())
}

/// English name of a weekday, as shown in day headers.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_start_at_sunday() {
        assert_eq!(weekday_index("sunday"), 0);
        assert_eq!(weekday_index("monday"), 1);
        assert_eq!(weekday_index("tuesday"), 2);
        assert_eq!(weekday_index("wednesday"), 3);
        assert_eq!(weekday_index("thursday"), 4);
        assert_eq!(weekday_index("friday"), 5);
        assert_eq!(weekday_index("saturday"), 6);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_weekday("Monday"), Some(Weekday::Mon));
        assert_eq!(resolve_weekday("FRIDAY"), Some(Weekday::Fri));
        assert_eq!(resolve_weekday("sAtUrDaY"), Some(Weekday::Sat));
    }

    #[test]
    fn test_unknown_maps_to_sentinel() {
        for token in ["", "mon", "fri", "someday", "2024-01-01", "mondays", " monday"] {
            assert_eq!(weekday_index(token), UNKNOWN_WEEKDAY, "{token:?}");
            assert_eq!(resolve_weekday(token), None);
        }
    }

    #[test]
    fn test_names_resolve_back() {
        let week = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        for (index, day) in (0u32..).zip(week) {
            assert_eq!(weekday_index(weekday_name(day)), index);
        }
    }
}
