//! Drawing rolls from an entropy source or a seeded generator.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, TryRngCore};

use super::Die;
use crate::error::{TableError, TableResult};

/// Something that can produce a roll of a die.
pub trait RollSource {
    /// Draw a value uniformly from `1..=die.sides()`.
    fn draw(&mut self, die: Die) -> TableResult<u32>;
}

/// Draws from the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl RollSource for EntropySource {
    fn draw(&mut self, die: Die) -> TableResult<u32> {
        draw_roll(die)
    }
}

impl RollSource for StdRng {
    fn draw(&mut self, die: Die) -> TableResult<u32> {
        Ok(self.random_range(1..=die.sides().max(1)))
    }
}

/// Draw a single roll of `die` from OS entropy.
///
/// Values in the biased tail of the `u32` range are rejected and redrawn, so
/// every face is equally likely. Entropy failures are returned, never masked.
pub fn draw_roll(die: Die) -> TableResult<u32> {
    let sides = die.sides().max(1);
    let limit = u32::MAX - (u32::MAX % sides);
    let mut os = OsRng;
    loop {
        let value = os
            .try_next_u32()
            .map_err(|e| TableError::Entropy(e.to_string()))?;
        if value < limit {
            return Ok(value % sides + 1);
        }
    }
}
