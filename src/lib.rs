//! sevendays - the next seven days from a plaintext calendar file
//!
//! Reads lines of the form `each|every <weekday> <description>` and
//! `<date> <description>`, places them into a Sunday-to-Saturday week with an
//! urgency tier, and renders that week as a list or a grid.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod schedule;

pub use cli::args::{Cli, OutputFormat};
pub use error::SevenDaysError;
pub use schedule::{build_week, Tier, Week};
