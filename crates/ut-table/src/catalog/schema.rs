//! Record schemas for the input document.
//!
//! Each entry of the `Rank` and `Effect` sections is deserialized into a typed
//! record. Field names are accepted in lower case or in the capitalized form
//! used by existing table files (`Minimum`, `Abbreviation`, ...).

use serde::Deserialize;
use serde_json::Value;

use super::effect::Effect;
use super::rank::Rank;
use crate::error::{RecordKind, TableError, TableResult};

/// Required fields of a rank entry.
#[derive(Debug, Deserialize)]
struct RankRecord {
    #[serde(alias = "Abbreviation")]
    abbreviation: String,
    #[serde(alias = "Minimum")]
    minimum: i64,
    #[serde(alias = "Standard")]
    standard: i64,
    #[serde(alias = "Green")]
    green: u32,
    #[serde(alias = "Yellow")]
    yellow: u32,
    #[serde(alias = "Red")]
    red: u32,
}

/// Required fields of an effect entry.
#[derive(Debug, Deserialize)]
struct EffectRecord {
    #[serde(alias = "Abbreviation")]
    abbreviation: String,
    #[serde(alias = "Ability")]
    ability: String,
    #[serde(alias = "White")]
    white: String,
    #[serde(alias = "Green")]
    green: String,
    #[serde(alias = "Yellow")]
    yellow: String,
    #[serde(alias = "Red")]
    red: String,
}

fn invalid(kind: RecordKind, key: &str, reason: impl ToString) -> TableError {
    TableError::InvalidRecord {
        kind,
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a rank entry and build a [`Rank`] named `key`.
pub(crate) fn parse_rank(key: &str, value: &Value) -> TableResult<Rank> {
    if !value.is_object() {
        return Err(invalid(RecordKind::Rank, key, "expected an object"));
    }
    let record = RankRecord::deserialize(value).map_err(|e| invalid(RecordKind::Rank, key, e))?;

    if record.abbreviation.is_empty() {
        return Err(invalid(RecordKind::Rank, key, "abbreviation is empty"));
    }
    if !(record.green <= record.yellow && record.yellow <= record.red) {
        return Err(TableError::ThresholdOrder(key.to_string()));
    }

    Ok(Rank {
        name: key.to_string(),
        abbreviation: record.abbreviation,
        minimum: record.minimum,
        standard: record.standard,
        green: record.green,
        yellow: record.yellow,
        red: record.red,
    })
}

/// Validate an effect entry and build an [`Effect`] named `key`.
pub(crate) fn parse_effect(key: &str, value: &Value) -> TableResult<Effect> {
    if !value.is_object() {
        return Err(invalid(RecordKind::Effect, key, "expected an object"));
    }
    let record =
        EffectRecord::deserialize(value).map_err(|e| invalid(RecordKind::Effect, key, e))?;

    if record.abbreviation.is_empty() {
        return Err(invalid(RecordKind::Effect, key, "abbreviation is empty"));
    }

    Ok(Effect {
        name: key.to_string(),
        abbreviation: record.abbreviation,
        ability: record.ability,
        white: record.white,
        green: record.green,
        yellow: record.yellow,
        red: record.red,
    })
}
