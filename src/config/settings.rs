//! Configuration settings for sevendays.
//!
//! Settings are loaded from `~/.sevendays/config.yaml`. Every field is
//! optional; command-line flags override what is set here.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cli::args::{ColorSetting, Layout, WeekStart};
use crate::config::Paths;
use crate::core::DEFAULT_SHORT_YEAR;
use crate::error::SevenDaysError;
use crate::output::GridOptions;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Display settings.
    pub display: DisplayConfig,
    /// Date parsing settings.
    pub dates: DatesConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Calendar file used when `--file` is not given.
    pub file: Option<PathBuf>,
    /// Color output setting.
    pub color: ColorSetting,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default pretty layout.
    pub layout: Layout,
    /// First day of the listed week.
    pub start: WeekStart,
    /// Grid cell width in characters.
    #[serde(default = "default_column_width")]
    pub column_width: usize,
    /// Grid entry rows per day.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

/// Which year a `D.M` date token gets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShortYear {
    /// Always `dates.fixed_year`.
    #[default]
    Fixed,
    /// The year of the evaluation date.
    Current,
}

/// Date parsing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatesConfig {
    /// Year policy for `D.M` tokens.
    pub short_year: ShortYear,
    /// Year used by the `fixed` policy.
    #[serde(default = "default_fixed_year")]
    pub fixed_year: i32,
}

const fn default_column_width() -> usize {
    9
}

const fn default_max_rows() -> usize {
    5
}

const fn default_fixed_year() -> i32 {
    DEFAULT_SHORT_YEAR
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            start: WeekStart::default(),
            column_width: default_column_width(),
            max_rows: default_max_rows(),
        }
    }
}

impl DisplayConfig {
    /// Grid geometry from these settings.
    ///
    /// # Errors
    ///
    /// Returns `SevenDaysError::Config` if the column width is zero.
    pub fn grid_options(&self) -> Result<GridOptions, SevenDaysError> {
        if self.column_width == 0 {
            return Err(SevenDaysError::Config(
                "display.column_width must be at least 1".to_string(),
            ));
        }
        Ok(GridOptions {
            column_width: self.column_width,
            max_rows: self.max_rows,
        })
    }
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            short_year: ShortYear::default(),
            fixed_year: default_fixed_year(),
        }
    }
}

impl DatesConfig {
    /// Year to give `D.M` tokens when evaluating on `today`.
    #[must_use]
    pub fn short_year_for(&self, today: NaiveDate) -> i32 {
        match self.short_year {
            ShortYear::Fixed => self.fixed_year,
            ShortYear::Current => today.year(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, SevenDaysError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SevenDaysError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SevenDaysError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            SevenDaysError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
