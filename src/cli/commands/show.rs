//! The `show` command: read a calendar file and render the coming week.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::args::{Cli, Layout, WeekStart};
use crate::config::Config;
use crate::error::SevenDaysError;
use crate::output::{format_week, RenderOptions};
use crate::schedule::build_week;

/// Resolve render options from flags, falling back to config.
///
/// # Errors
///
/// Returns `SevenDaysError::Config` if the configured grid geometry is invalid.
pub fn render_options(cli: &Cli, config: &Config) -> Result<RenderOptions, SevenDaysError> {
    let layout = if cli.grid {
        Layout::Grid
    } else {
        config.display.layout
    };
    let start = if cli.from_sunday {
        WeekStart::Sunday
    } else {
        config.display.start
    };

    Ok(RenderOptions {
        format: cli.output,
        layout,
        start,
        grid: config.display.grid_options()?,
    })
}

/// Read a calendar file, lossily decoding any invalid UTF-8.
///
/// # Errors
///
/// Returns `SevenDaysError::Io` if the file cannot be read.
pub fn read_calendar(path: &Path) -> Result<String, SevenDaysError> {
    let bytes = std::fs::read(path).map_err(|e| SevenDaysError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Execute the show command
///
/// # Errors
///
/// Returns an error if no calendar file is configured, the file cannot be
/// read, or output formatting fails.
pub fn show(cli: &Cli, config: &Config, today: NaiveDate) -> Result<String, SevenDaysError> {
    let path = cli
        .file
        .as_deref()
        .or(config.general.file.as_deref())
        .ok_or_else(|| {
            SevenDaysError::InvalidArgument(
                "no calendar file given (use --file or set general.file in the config)".to_string(),
            )
        })?;

    let contents = read_calendar(path)?;
    debug!(path = %path.display(), lines = contents.lines().count(), "loaded calendar");

    let week = build_week(&contents, today, config.dates.short_year_for(today));
    debug!(entries = week.entry_count(), %today, "built week");

    format_week(&week, today, &render_options(cli, config)?)
}
