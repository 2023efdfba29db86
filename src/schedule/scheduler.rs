//! Placing directives into the week.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use super::types::{Entry, Tier, Week};
use crate::core::{classify, Directive};

/// What happened to a directive handed to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Added to the given weekday with the given tier.
    Placed {
        /// Bucket the entry went into.
        weekday: Weekday,
        /// Assigned tier.
        tier: Tier,
    },
    /// Dated entry before today; never shown.
    Past,
    /// Dated entry seven or more days out.
    BeyondHorizon,
}

/// Whole days from `today` until `date`. Negative for past dates.
#[must_use]
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Builds a [`Week`] relative to a fixed "today".
#[derive(Debug, Clone)]
pub struct Scheduler {
    today: NaiveDate,
    week: Week,
}

impl Scheduler {
    /// A scheduler with an empty week, evaluated against `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            week: Week::new(),
        }
    }

    /// The date dated entries are measured from.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Place one directive.
    ///
    /// Recurring directives always land on their weekday as [`Tier::Weekly`].
    /// Dated directives land on their date's weekday when they fall within
    /// the coming seven days, counting today.
    pub fn schedule(&mut self, directive: Directive) -> Placement {
        let (weekday, text, tier) = match directive {
            Directive::Recurring { weekday, text } => (weekday, text, Tier::Weekly),
            Directive::Dated { date, text } => {
                let days = days_until(date, self.today);
                match Tier::for_days_until(days) {
                    Some(tier) => (date.weekday(), text, tier),
                    None if days < 0 => return Placement::Past,
                    None => return Placement::BeyondHorizon,
                }
            },
        };

        self.week.day_mut(weekday).push(Entry::new(text, tier));
        Placement::Placed { weekday, tier }
    }

    /// Hand over the populated week.
    #[must_use]
    pub fn finish(self) -> Week {
        self.week
    }
}

/// Classify and schedule every line of a calendar file.
///
/// Lines that are not entries, and dated entries outside the window, are
/// dropped silently (logged at debug level).
#[must_use]
pub fn build_week(contents: &str, today: NaiveDate, short_year: i32) -> Week {
    let mut scheduler = Scheduler::new(today);

    for (number, line) in contents.lines().enumerate() {
        let directive = match classify(line, short_year) {
            Ok(directive) => directive,
            Err(reason) => {
                debug!(line = number + 1, %reason, "skipping line");
                continue;
            },
        };

        match scheduler.schedule(directive) {
            Placement::Placed { weekday, tier } => {
                debug!(line = number + 1, %weekday, %tier, "scheduled entry");
            },
            Placement::Past => debug!(line = number + 1, "skipping past entry"),
            Placement::BeyondHorizon => debug!(line = number + 1, "skipping entry beyond this week"),
        }
    }

    scheduler.finish()
}
