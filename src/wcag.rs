//! Contrast thresholds defined by WCAG 2.1.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::color::Component;

/// AA compliance for normal text.
pub const AA_NORMAL: Component = 4.5;
/// AA compliance for large text.
pub const AA_LARGE: Component = 3.0;
/// AAA compliance for normal text.
pub const AAA_NORMAL: Component = 7.1;
/// AAA compliance for large text.
pub const AAA_LARGE: Component = 4.5;

/// A WCAG conformance level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// Level AA.
    #[default]
    AA,
    /// Level AAA.
    AAA,
}

/// The size class of the text being tested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSize {
    /// Body text.
    #[default]
    Normal,
    /// At least 18pt, or 14pt bold.
    Large,
}

impl Level {
    /// All levels, weakest first.
    pub const ALL: [Level; 2] = [Level::AA, Level::AAA];

    /// The minimum contrast ratio for text of the given size at this level.
    pub fn threshold(self, size: TextSize) -> Component {
        match (self, size) {
            (Level::AA, TextSize::Normal) => AA_NORMAL,
            (Level::AA, TextSize::Large) => AA_LARGE,
            (Level::AAA, TextSize::Normal) => AAA_NORMAL,
            (Level::AAA, TextSize::Large) => AAA_LARGE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::AA => "AA",
            Level::AAA => "AAA",
        })
    }
}

/// Returned when a string names no WCAG level.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown WCAG level {0:?}, expected AA or AAA")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aa" => Ok(Level::AA),
            "aaa" => Ok(Level::AAA),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextSize::Normal => "normal",
            TextSize::Large => "large",
        })
    }
}
