//! The in-memory week: tiers, entries, days.

use chrono::Weekday;
use serde::Serialize;

use crate::core::weekday_name;

/// How urgently an entry should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Recurring entry, shown every week.
    Weekly,
    /// Dated entry four to six days out.
    Soon,
    /// Dated entry zero to three days out.
    Imminent,
}

impl Tier {
    /// Tier of a dated entry `days` days from today.
    ///
    /// Returns `None` for past dates and for dates a week or more away.
    #[must_use]
    pub const fn for_days_until(days: i64) -> Option<Self> {
        match days {
            0..=3 => Some(Self::Imminent),
            4..=6 => Some(Self::Soon),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Weekly => "weekly",
            Self::Soon => "soon",
            Self::Imminent => "imminent",
        })
    }
}

/// A single calendar entry placed on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    text: String,
    tier: Tier,
}

impl Entry {
    /// Create an entry.
    #[must_use]
    pub const fn new(text: String, tier: Tier) -> Self {
        Self { text, tier }
    }

    /// Description text, including its trailing space.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Urgency tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }
}

/// One weekday bucket. Entries keep the order they were read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    weekday: Weekday,
    entries: Vec<Entry>,
}

impl Day {
    fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            entries: Vec::with_capacity(5),
        }
    }

    /// Weekday of this bucket.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Sunday-based index, 0..=6.
    #[must_use]
    pub fn index(&self) -> usize {
        self.weekday.num_days_from_sunday() as usize
    }

    /// English weekday name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// Exactly seven days, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: [Day; 7],
}

impl Default for Week {
    fn default() -> Self {
        Self::new()
    }
}

impl Week {
    /// An empty week.
    #[must_use]
    pub fn new() -> Self {
        Self {
            days: std::array::from_fn(|i| Day::new(nth_weekday_after(Weekday::Sun, i))),
        }
    }

    /// The bucket for a weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[weekday.num_days_from_sunday() as usize]
    }

    pub(crate) fn day_mut(&mut self, weekday: Weekday) -> &mut Day {
        &mut self.days[weekday.num_days_from_sunday() as usize]
    }

    /// Days from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = &Day> {
        self.days.iter()
    }

    /// All seven days starting at `start`, wrapping past Saturday.
    pub fn days_from(&self, start: Weekday) -> impl Iterator<Item = &Day> {
        let offset = start.num_days_from_sunday() as usize;
        (0..7).map(move |i| &self.days[(offset + i) % 7])
    }

    /// Number of entries across all days.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }
}

fn nth_weekday_after(start: Weekday, n: usize) -> Weekday {
    (0..n).fold(start, |day, _| day.succ())
}
