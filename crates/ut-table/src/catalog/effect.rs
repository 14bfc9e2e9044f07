//! Effects: situational columns with narrative text per color.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A situational modifier with outcome text for each color tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Unique name (e.g. "Slam").
    pub name: String,
    /// Unique short code.
    pub abbreviation: String,
    /// Which ability the effect is rolled against.
    pub ability: String,
    /// Text for a White result.
    pub white: String,
    /// Text for a Green result.
    pub green: String,
    /// Text for a Yellow result.
    pub yellow: String,
    /// Text for a Red result.
    pub red: String,
}

impl Effect {
    /// The outcome text for `color`. Empty strings are valid text.
    pub fn text(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Green => &self.green,
            Color::Yellow => &self.yellow,
            Color::Red => &self.red,
        }
    }
}

/// A reference to an effect: a lookup key or an effect already in hand.
#[derive(Debug, Clone, Copy)]
pub enum EffectRef<'a> {
    /// A name or abbreviation.
    Key(&'a str),
    /// A resolved effect, passed through unchanged.
    Effect(&'a Effect),
}

impl<'a> From<&'a str> for EffectRef<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a String> for EffectRef<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a Effect> for EffectRef<'a> {
    fn from(effect: &'a Effect) -> Self {
        Self::Effect(effect)
    }
}
