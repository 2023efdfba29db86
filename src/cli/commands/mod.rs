//! Command implementations for sevendays.

mod completions;
mod show;

pub use completions::completions;
pub use show::{read_calendar, render_options, show};
