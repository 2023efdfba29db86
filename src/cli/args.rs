use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "sevendays")]
#[command(about = "Show the next seven days from a plaintext calendar file")]
#[command(long_about = "sevendays - the next seven days, from a plaintext file

Reads a calendar file and shows what happens in the coming week, starting
today. Only two kinds of lines matter; everything else is ignored, so the
file can hold any other notes as well.

FILE FORMAT:
  each|every <weekday> <description>    Recurring, shown every week
  <date> <description>                  One-off, shown when less than a week away

  Dates may be written as 2012-03-25, 25.3.2012 or 25.3

COLORS:
  green    weekly entries
  plain    four to six days away
  red      today to three days away

EXAMPLES:
  sevendays --file ~/calendar.txt
  sevendays -file ~/calendar.txt        (single-dash spelling also accepted)
  sevendays -f ~/calendar.txt --grid
  sevendays -f ~/calendar.txt -o json")]
#[command(version)]
pub struct Cli {
    /// Calendar file to read
    ///
    /// Falls back to `general.file` from the config file.
    #[arg(short, long, value_name = "PATH", env = "SEVENDAYS_FILE")]
    pub file: Option<PathBuf>,

    /// Show the week as a Sunday-to-Saturday table
    #[arg(long, conflicts_with = "from_sunday")]
    pub grid: bool,

    /// List the week from Sunday instead of from today
    #[arg(long)]
    pub from_sunday: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// Evaluate the calendar as if today were this date
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// When to color output
    #[arg(long, value_enum)]
    pub color: Option<ColorSetting>,

    /// Config file to use instead of ~/.sevendays/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log skipped and scheduled lines to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format for the rendered week.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Pretty layout of the week.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One day after another.
    #[default]
    Linear,
    /// Bordered seven-column table.
    Grid,
}

/// First day of the listed week.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Start at the current weekday.
    #[default]
    Today,
    /// Start at Sunday.
    Sunday,
}

/// Color output setting.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Rewrite the single-dash `-file` spelling to `--file`.
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if after_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    arg
                },
                Some("-file") => OsString::from("--file"),
                Some(s) if s.starts_with("-file=") => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

impl Cli {
    /// Parse process arguments, accepting `-file` as well as `--file`.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
