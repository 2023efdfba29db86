//! Scheduling of calendar entries into a seven-day week.

mod scheduler;
mod types;

pub use scheduler::{build_week, days_until, Placement, Scheduler};
pub use types::{Day, Entry, Tier, Week};
