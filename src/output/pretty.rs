use chrono::Weekday;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::{tier_style, today_style, Style};
use crate::schedule::{Day, Week};

/// Column geometry for the grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Display columns per cell; longer text is cut.
    pub column_width: usize,
    /// Entry rows per day; later entries are left out.
    pub max_rows: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            column_width: 9,
            max_rows: 5,
        }
    }
}

/// Render the week as a list, one day after another, starting at `start`.
///
/// The `today` header is highlighted. Every entry is shown.
pub fn format_week_linear(week: &Week, today: Weekday, start: Weekday) -> String {
    week.days_from(start)
        .map(|day| format_day(day, today))
        .collect()
}

fn format_day(day: &Day, today: Weekday) -> String {
    let header = if day.weekday() == today {
        today_style().paint(day.name()).to_string()
    } else {
        day.name().to_string()
    };

    let mut output = format!("{header}:\n");
    for entry in day.entries() {
        let line = format!(" {}", entry.text());
        output.push_str(&tier_style(entry.tier()).paint(&line).to_string());
        output.push('\n');
    }
    output
}

/// Render the week as a bordered Sunday-to-Saturday table.
///
/// Cells are padded or cut to `column_width` before coloring so borders line
/// up regardless of escape codes.
pub fn format_week_grid(week: &Week, today: Weekday, options: GridOptions) -> String {
    let width = options.column_width;
    let rows = week
        .iter()
        .map(|day| day.entries().len())
        .max()
        .unwrap_or(0)
        .min(options.max_rows);

    let mut output = border('┌', '┬', '┐', width);

    let headers: Vec<String> = week
        .iter()
        .map(|day| {
            let style = if day.weekday() == today {
                today_style()
            } else {
                Style::PLAIN
            };
            cell(day.name(), width, style)
        })
        .collect();
    output.push_str(&row_line(&headers));

    output.push_str(&border('├', '┼', '┤', width));

    for row in 0..rows {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day.entries().get(row) {
                Some(entry) => cell(entry.text(), width, tier_style(entry.tier())),
                None => " ".repeat(width),
            })
            .collect();
        output.push_str(&row_line(&cells));
    }

    output.push_str(&border('└', '┴', '┘', width));
    output
}

fn border(left: char, join: char, right: char, width: usize) -> String {
    let segment = "─".repeat(width);
    let mut line = String::new();
    line.push(left);
    line.push_str(&vec![segment; 7].join(&join.to_string()));
    line.push(right);
    line.push('\n');
    line
}

fn row_line(cells: &[String]) -> String {
    format!("│{}│\n", cells.join("│"))
}

fn cell(text: &str, width: usize, style: Style) -> String {
    let mut cut = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        cut.push(c);
        used += char_width;
    }
    let padding = " ".repeat(width.saturating_sub(cut.width()));
    style.paint(&format!("{cut}{padding}")).to_string()
}
