//! The rank/effect catalog.
//!
//! A [`Catalog`] is built once from a table document and never mutated. It
//! owns the ranks sorted by `minimum` and answers lookups by name,
//! abbreviation, or (for ranks) raw number. Names and abbreviations of ranks
//! and effects share a single namespace.

pub mod effect;
pub mod rank;
mod schema;

pub use effect::{Effect, EffectRef};
pub use rank::{Rank, RankRef};

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde_json::Value;

use crate::error::{TableError, TableResult};

/// Name of the table read when none is given.
pub const DEFAULT_TABLE: &str = "Universal Table";

/// Immutable lookup structure over a table's ranks and effects.
#[derive(Debug, Clone)]
pub struct Catalog {
    ranks: Vec<Rank>,
    effects: Vec<Effect>,
    rank_keys: HashMap<String, usize>,
    effect_keys: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from the table named `table` in a parsed document.
    ///
    /// Every entry is validated before anything is returned; the first bad
    /// entry aborts construction.
    pub fn from_document(document: &Value, table: &str) -> TableResult<Self> {
        let table_value = document
            .get(table)
            .ok_or_else(|| TableError::MissingTable(table.to_string()))?;

        let rank_section = section(table_value, table, "Rank")?;
        let effect_section = section(table_value, table, "Effect")?;

        let mut ranks = rank_section
            .iter()
            .map(|(key, value)| schema::parse_rank(key, value))
            .collect::<TableResult<Vec<_>>>()?;
        if ranks.is_empty() {
            return Err(TableError::EmptyRanks);
        }
        // Stable: equal minimums keep document order.
        ranks.sort_by_key(|r| r.minimum);
        tracing::debug!(count = ranks.len(), "validated rank section");

        let effects = effect_section
            .iter()
            .map(|(key, value)| schema::parse_effect(key, value))
            .collect::<TableResult<Vec<_>>>()?;
        tracing::debug!(count = effects.len(), "validated effect section");

        let mut taken = HashSet::new();
        let rank_keys = index_keys(
            ranks.iter().map(|r| (r.name.as_str(), r.abbreviation.as_str())),
            &mut taken,
        )?;
        let effect_keys = index_keys(
            effects
                .iter()
                .map(|e| (e.name.as_str(), e.abbreviation.as_str())),
            &mut taken,
        )?;

        tracing::info!(
            table,
            ranks = ranks.len(),
            effects = effects.len(),
            "catalog built"
        );

        Ok(Self {
            ranks,
            effects,
            rank_keys,
            effect_keys,
        })
    }

    /// Parse a JSON document and build the catalog for `table`.
    pub fn from_json_str(json: &str, table: &str) -> TableResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_document(&document, table)
    }

    /// Read a JSON document from disk and build the catalog for `table`.
    pub fn load(path: &Path, table: &str) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_json_str(&json, table)?)
    }

    /// All ranks, sorted by `minimum` ascending.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// All effects, in document order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Look up a rank by name or abbreviation.
    pub fn rank(&self, key: &str) -> Option<&Rank> {
        self.rank_keys.get(key).map(|&i| &self.ranks[i])
    }

    /// Look up an effect by name or abbreviation.
    pub fn effect(&self, key: &str) -> Option<&Effect> {
        self.effect_keys.get(key).map(|&i| &self.effects[i])
    }

    /// The rank covering a raw number.
    ///
    /// An exact `standard` match wins; otherwise the rank with the greatest
    /// `minimum` not above `n`.
    pub fn rank_for_number(&self, n: i64) -> Option<&Rank> {
        if let Some(rank) = self.ranks.iter().find(|r| r.standard == n) {
            return Some(rank);
        }
        let covering = self.ranks.partition_point(|r| r.minimum <= n);
        covering.checked_sub(1).map(|i| &self.ranks[i])
    }

    /// Position of a rank in the sorted rank list.
    pub fn index_of(&self, rank: &Rank) -> Option<usize> {
        self.rank_keys
            .get(&rank.name)
            .copied()
            .filter(|&i| self.ranks[i] == *rank)
    }

    /// The raw number a reference carries, if it is numeric.
    ///
    /// A key naming a rank is never numeric, even if it looks like one.
    pub fn numeric_value(&self, reference: RankRef<'_>) -> Option<i64> {
        match reference {
            RankRef::Number(n) => Some(n),
            RankRef::Key(key) if self.rank(key).is_none() => key.trim().parse().ok(),
            _ => None,
        }
    }

    /// Resolve a rank reference.
    pub fn resolve_rank<'a>(&'a self, reference: RankRef<'a>) -> TableResult<&'a Rank> {
        let resolved = match reference {
            RankRef::Rank(rank) => return Ok(rank),
            RankRef::Key(key) => self.rank(key).or_else(|| {
                self.numeric_value(reference)
                    .and_then(|n| self.rank_for_number(n))
            }),
            RankRef::Number(n) => self.rank_for_number(n),
        };
        resolved.ok_or_else(|| TableError::UnknownRank(reference.to_string()))
    }

    /// Resolve an effect reference.
    pub fn resolve_effect<'a>(&'a self, reference: EffectRef<'a>) -> TableResult<&'a Effect> {
        match reference {
            EffectRef::Effect(effect) => Ok(effect),
            EffectRef::Key(key) => self
                .effect(key)
                .ok_or_else(|| TableError::UnknownEffect(key.to_string())),
        }
    }
}

/// Failure to read or build a catalog from a file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file contents are not a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}

fn section<'a>(
    table_value: &'a Value,
    table: &str,
    name: &'static str,
) -> TableResult<&'a serde_json::Map<String, Value>> {
    table_value
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| TableError::MissingSection {
            table: table.to_string(),
            section: name,
        })
}

/// Index entries by name and abbreviation, rejecting keys already `taken`.
fn index_keys<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    taken: &mut HashSet<String>,
) -> TableResult<HashMap<String, usize>> {
    let mut keys = HashMap::new();
    for (i, (name, abbreviation)) in entries.enumerate() {
        for key in [name, abbreviation] {
            if keys.get(key) == Some(&i) {
                continue;
            }
            if !taken.insert(key.to_string()) {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
            keys.insert(key.to_string(), i);
        }
    }
    Ok(keys)
}
