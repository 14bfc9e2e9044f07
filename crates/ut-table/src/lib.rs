//! Universal table resolution engine.
//!
//! Provides the rank/effect catalog built from a table document, column
//! shifts, color-tier determination, opposed rolls against an intensity,
//! and effect lookups. Rolls come from a [`RollSource`]; every evaluation
//! also accepts a pre-rolled value so it stays deterministic.

pub mod catalog;
pub mod color;
pub mod dice;
pub mod error;
pub mod resolve;
pub mod shift;

pub use catalog::{Catalog, DEFAULT_TABLE, Effect, EffectRef, LoadError, Rank, RankRef};
pub use color::{Color, Required, color_for_roll, is_success};
pub use dice::{Die, EntropySource, RollSource, draw_roll};
pub use error::{ErrorKind, RecordKind, TableError, TableResult};
pub use resolve::{Outcome, Resolver, RollRequest};
pub use shift::{apply_shift, parse_shift};
