//! Core parsing for sevendays.
//!
//! Turns raw calendar lines into directives: date tokens, weekday names and
//! the line classifier that chooses between them.

mod classify;
mod datetime;
mod weekday;

pub use classify::{classify, classify_line, Directive, Skip};
pub use datetime::{parse_entry_date, DateParseError, DEFAULT_SHORT_YEAR};
pub use weekday::{resolve_weekday, weekday_index, weekday_name, UNKNOWN_WEEKDAY};
