//! Configuration management for sevendays.
//!
//! This module handles loading configuration from `~/.sevendays/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, DatesConfig, DisplayConfig, GeneralConfig, ShortYear};
