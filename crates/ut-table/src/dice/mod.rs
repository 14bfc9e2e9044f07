//! Dice and the random source behind percentile rolls.
//!
//! Resolution never rolls on its own: it takes a pre-rolled value. The
//! [`RollSource`] trait is the single seam through which a roll is drawn.

pub mod roll;

pub use roll::{EntropySource, RollSource, draw_roll};

use serde::{Deserialize, Serialize};

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Ten-sided die.
    D10,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Returns true if `value` is a face of this die.
    pub fn has_face(self, value: u32) -> bool {
        (1..=self.sides()).contains(&value)
    }
}
