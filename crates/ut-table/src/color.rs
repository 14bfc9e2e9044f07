//! Color tiers and the opposed-roll requirement ladder.
//!
//! A roll lands in one of four ordered tiers, White < Green < Yellow < Red.
//! An opposed roll additionally needs a [`Required`] tier, which can also be
//! the non-roll values Automatic and Impossible.

use serde::{Deserialize, Serialize};

use crate::catalog::Rank;
use crate::error::{TableError, TableResult};

/// The outcome tier reached by a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No success.
    White,
    /// Basic success.
    Green,
    /// Good success.
    Yellow,
    /// Best success.
    Red,
}

impl Color {
    /// All tiers from easiest to hardest.
    pub fn all() -> &'static [Self] {
        &[Self::White, Self::Green, Self::Yellow, Self::Red]
    }

    /// Parse a color name, ignoring case.
    pub fn parse(s: &str) -> TableResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(Self::White),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            _ => Err(TableError::UnknownColor(s.to_string())),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Green => write!(f, "Green"),
            Self::Yellow => write!(f, "Yellow"),
            Self::Red => write!(f, "Red"),
        }
    }
}

/// The tier an opposed roll must reach to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Required {
    /// Succeeds regardless of the roll.
    Automatic,
    /// Needs Green or better.
    Green,
    /// Needs Yellow or better.
    Yellow,
    /// Needs Red.
    Red,
    /// Fails regardless of the roll.
    Impossible,
}

impl Required {
    /// The requirement for an acting rank `distance` columns above the intensity.
    pub fn for_distance(distance: i64) -> Self {
        match distance {
            d if d > 2 => Self::Automatic,
            1 | 2 => Self::Green,
            0 => Self::Yellow,
            -1 => Self::Red,
            _ => Self::Impossible,
        }
    }
}

impl std::fmt::Display for Required {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automatic => write!(f, "Automatic"),
            Self::Green => write!(f, "Green"),
            Self::Yellow => write!(f, "Yellow"),
            Self::Red => write!(f, "Red"),
            Self::Impossible => write!(f, "Impossible"),
        }
    }
}

/// Determine the tier a roll reaches against a rank's thresholds.
///
/// Thresholds are checked hardest first; the first one the roll meets wins.
pub fn color_for_roll(roll: u32, rank: &Rank) -> Color {
    if roll >= rank.red {
        Color::Red
    } else if roll >= rank.yellow {
        Color::Yellow
    } else if roll >= rank.green {
        Color::Green
    } else {
        Color::White
    }
}

/// Whether an achieved tier satisfies a requirement.
pub fn is_success(achieved: Color, required: Required) -> bool {
    match required {
        Required::Automatic => true,
        Required::Impossible => false,
        Required::Green => achieved >= Color::Green,
        Required::Yellow => achieved >= Color::Yellow,
        Required::Red => achieved == Color::Red,
    }
}
