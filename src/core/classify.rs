//! Line classification.
//!
//! Every line of a calendar file is either a recurring directive
//! (`each|every <weekday> <description>`), a dated directive
//! (`<date> <description>`), or noise. Noise is dropped without complaint so
//! the file can hold anything else its owner wants to keep there.

use chrono::{NaiveDate, Weekday};

use super::datetime::parse_entry_date;
use super::weekday::resolve_weekday;

/// A calendar line that survived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Repeats on the given weekday every week.
    Recurring {
        /// Weekday the entry belongs to.
        weekday: Weekday,
        /// Description text.
        text: String,
    },
    /// Happens on one calendar date.
    Dated {
        /// Date of the entry.
        date: NaiveDate,
        /// Description text.
        text: String,
    },
}

/// Why a line produced no directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Fewer than two whitespace-separated tokens.
    TooShort,
    /// `each`/`every` followed by something that is not a weekday.
    UnknownWeekday,
    /// First token is not a date in any accepted format.
    NotADate,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TooShort => "too few tokens",
            Self::UnknownWeekday => "unknown weekday",
            Self::NotADate => "unparseable date",
        })
    }
}

/// Classify one line, reporting why it was dropped.
///
/// `short_year` is the year given to `D.M` date tokens.
///
/// # Errors
///
/// Returns the [`Skip`] reason when the line is not a calendar entry. This is
/// never fatal; callers drop the line.
pub fn classify(line: &str, short_year: i32) -> Result<Directive, Skip> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Skip::TooShort);
    }

    let head = tokens[0].to_lowercase();
    if head == "each" || head == "every" {
        let weekday = resolve_weekday(tokens[1]).ok_or(Skip::UnknownWeekday)?;
        return Ok(Directive::Recurring {
            weekday,
            text: description(&tokens[2..]),
        });
    }

    let date = parse_entry_date(tokens[0], short_year).map_err(|_| Skip::NotADate)?;
    Ok(Directive::Dated {
        date,
        text: description(&tokens[1..]),
    })
}

/// Classify one line, discarding anything that is not a calendar entry.
#[must_use]
pub fn classify_line(line: &str, short_year: i32) -> Option<Directive> {
    classify(line, short_year).ok()
}

/// Join description words, each followed by a single space.
///
/// The trailing space is part of the rendered entry text.
fn description(words: &[&str]) -> String {
    words.iter().fold(String::new(), |mut text, word| {
        text.push_str(word);
        text.push(' ');
        text
    })
}
