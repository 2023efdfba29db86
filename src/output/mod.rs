//! Output formatting for sevendays.
//!
//! Pretty layouts (linear list, bordered grid) share one tier-to-style
//! mapping; the JSON view carries the same data for scripting.

mod json;
mod pretty;
mod style;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::cli::args::{Layout, OutputFormat, WeekStart};
use crate::error::SevenDaysError;
use crate::schedule::Week;

pub use json::format_week_json;
pub use pretty::{format_week_grid, format_week_linear, GridOptions};
pub use style::{apply_color_setting, tier_style, today_style, Style};

/// How a week should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Pretty or JSON.
    pub format: OutputFormat,
    /// List or grid, for pretty output.
    pub layout: Layout,
    /// First day of the list and JSON views.
    pub start: WeekStart,
    /// Grid geometry.
    pub grid: GridOptions,
}

impl WeekStart {
    /// First weekday shown for the given date.
    #[must_use]
    pub fn first_day(self, today: NaiveDate) -> Weekday {
        match self {
            Self::Today => today.weekday(),
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// Format a week based on render options.
///
/// # Errors
///
/// Returns `SevenDaysError::Parse` if JSON serialization fails.
pub fn format_week(week: &Week, today: NaiveDate, options: &RenderOptions) -> Result<String, SevenDaysError> {
    let start = options.start.first_day(today);
    match (options.format, options.layout) {
        (OutputFormat::Json, _) => format_week_json(week, today, start),
        (OutputFormat::Pretty, Layout::Linear) => Ok(format_week_linear(week, today.weekday(), start)),
        (OutputFormat::Pretty, Layout::Grid) => Ok(format_week_grid(week, today.weekday(), options.grid)),
    }
}
