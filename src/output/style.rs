//! Terminal styles shared by every pretty layout.

use colored::{Color, ColoredString, Colorize};

use crate::cli::args::ColorSetting;
use crate::schedule::Tier;

/// Foreground color plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color, `None` for the terminal default.
    pub color: Option<Color>,
    /// Bold weight.
    pub bold: bool,
}

impl Style {
    /// No styling at all.
    pub const PLAIN: Self = Self {
        color: None,
        bold: false,
    };

    /// Apply this style to `text`.
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.color {
            painted = painted.color(color);
        }
        if self.bold {
            painted = painted.bold();
        }
        painted
    }
}

/// Style for entries of a tier.
#[must_use]
pub const fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::Weekly => Style {
            color: Some(Color::Green),
            bold: true,
        },
        Tier::Soon => Style::PLAIN,
        Tier::Imminent => Style {
            color: Some(Color::Red),
            bold: true,
        },
    }
}

/// Style for the current day's header.
#[must_use]
pub const fn today_style() -> Style {
    Style {
        color: Some(Color::White),
        bold: true,
    }
}

/// Force colors on or off; `Auto` leaves terminal detection in charge.
pub fn apply_color_setting(setting: ColorSetting) {
    match setting {
        ColorSetting::Auto => colored::control::unset_override(),
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
    }
}
