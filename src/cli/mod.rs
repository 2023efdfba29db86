//! Command-line interface for sevendays.

pub mod args;
pub mod commands;
