//! Ranks: the columns of the table.

use serde::{Deserialize, Serialize};

/// A difficulty tier with roll thresholds for each color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Unique name (e.g. "Remarkable").
    pub name: String,
    /// Unique short code (e.g. "Rm").
    pub abbreviation: String,
    /// Lowest raw value the rank covers. Ranks are ordered by this.
    pub minimum: i64,
    /// Representative value for the rank.
    pub standard: i64,
    /// Minimum roll for a Green result.
    pub green: u32,
    /// Minimum roll for a Yellow result.
    pub yellow: u32,
    /// Minimum roll for a Red result.
    pub red: u32,
}

impl Rank {
    /// Returns true if `key` is this rank's name or abbreviation.
    pub fn answers_to(&self, key: &str) -> bool {
        self.name == key || self.abbreviation == key
    }
}

/// A reference to a rank: a lookup key, a raw number, or a rank already in hand.
#[derive(Debug, Clone, Copy)]
pub enum RankRef<'a> {
    /// A name or abbreviation. Strings naming no rank but holding an integer
    /// are treated like [`RankRef::Number`].
    Key(&'a str),
    /// A raw rank number.
    Number(i64),
    /// A resolved rank, passed through unchanged.
    Rank(&'a Rank),
}

impl<'a> From<&'a str> for RankRef<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a String> for RankRef<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(key)
    }
}

impl From<i64> for RankRef<'_> {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl<'a> From<&'a Rank> for RankRef<'a> {
    fn from(rank: &'a Rank) -> Self {
        Self::Rank(rank)
    }
}

impl std::fmt::Display for RankRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Rank(rank) => write!(f, "{}", rank.name),
        }
    }
}
