//! The roll evaluation pipeline.
//!
//! A [`Resolver`] borrows an immutable [`Catalog`] and turns a rank reference,
//! a rolled value, and optional modifiers into an [`Outcome`]. The `evaluate*`
//! methods take the roll as an argument and are pure; the `roll*` methods
//! draw it from a [`RollSource`] first.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EffectRef, Rank, RankRef};
use crate::color::{Color, Required, color_for_roll, is_success};
use crate::dice::{Die, RollSource};
use crate::error::{TableError, TableResult};
use crate::shift::apply_shift;

/// The result of evaluating one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The raw roll evaluated.
    pub roll: u32,
    /// Name of the rank after the column shift.
    pub rank: String,
    /// The rank number reported for the roll.
    pub number: i64,
    /// Color tier the roll reached.
    pub result: Color,
    /// Tier needed to beat the opposing intensity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Required>,
    /// Whether the roll beat the opposing intensity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Name of the effect column consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Effect text for the tier reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

/// Plain roll parameters as an adapter receives them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollRequest {
    /// Rank name, abbreviation, or number.
    pub rank: String,
    /// Pre-rolled value; drawn from the roll source when absent.
    pub roll: Option<u32>,
    /// Column shift applied to the rank.
    pub shift: i64,
    /// Opposing intensity rank.
    pub intensity: Option<String>,
    /// Column shift applied to the intensity.
    pub intensity_shift: i64,
    /// Effect column to read the result from.
    pub effect: Option<String>,
}

/// Resolves rolls against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
    die: Die,
}

impl<'c> Resolver<'c> {
    /// A resolver for percentile rolls against `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            die: Die::D100,
        }
    }

    /// The catalog being resolved against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Resolve a rank reference and apply a column shift to it.
    pub fn final_rank<'a>(&'a self, reference: RankRef<'a>, shift: i64) -> TableResult<&'a Rank> {
        let rank = self.catalog.resolve_rank(reference)?;
        apply_shift(self.catalog, rank, shift)
    }

    /// The tier an acting rank needs against an opposing intensity rank.
    pub fn required_tier(&self, rank: &Rank, intensity: &Rank) -> TableResult<Required> {
        let rank_index = self.index(rank)?;
        let intensity_index = self.index(intensity)?;
        Ok(Required::for_distance(rank_index - intensity_index))
    }

    /// The text an effect gives for a color.
    pub fn effect_text<'a>(&'a self, effect: EffectRef<'a>, color: Color) -> TableResult<&'a str> {
        Ok(self.catalog.resolve_effect(effect)?.text(color))
    }

    /// The text an effect gives for a color named by the caller.
    pub fn effect_text_for<'a>(&'a self, effect: EffectRef<'a>, color: &str) -> TableResult<&'a str> {
        let color = Color::parse(color)?;
        self.effect_text(effect, color)
    }

    /// Evaluate a roll against a shifted rank.
    pub fn evaluate(&self, base: RankRef<'_>, roll: u32, shift: i64) -> TableResult<Outcome> {
        self.evaluate_rank(base, roll, shift).map(|(outcome, _)| outcome)
    }

    /// Evaluate a roll and compare it against an opposing intensity.
    pub fn evaluate_vs_intensity(
        &self,
        base: RankRef<'_>,
        roll: u32,
        shift: i64,
        intensity: RankRef<'_>,
        intensity_shift: i64,
    ) -> TableResult<Outcome> {
        let (mut outcome, rank) = self.evaluate_rank(base, roll, shift)?;
        self.attach_intensity(&mut outcome, rank, intensity, intensity_shift)?;
        Ok(outcome)
    }

    /// Evaluate a roll and read the result from an effect column.
    pub fn evaluate_with_effect(
        &self,
        base: RankRef<'_>,
        roll: u32,
        shift: i64,
        effect: Option<EffectRef<'_>>,
    ) -> TableResult<Outcome> {
        let mut outcome = self.evaluate(base, roll, shift)?;
        if let Some(effect) = effect {
            self.attach_effect(&mut outcome, effect)?;
        }
        Ok(outcome)
    }

    /// Draw a roll and evaluate it.
    pub fn roll(
        &self,
        source: &mut impl RollSource,
        base: RankRef<'_>,
        shift: i64,
    ) -> TableResult<Outcome> {
        let roll = source.draw(self.die)?;
        self.evaluate(base, roll, shift)
    }

    /// Draw a roll and compare it against an opposing intensity.
    pub fn roll_vs_intensity(
        &self,
        source: &mut impl RollSource,
        base: RankRef<'_>,
        shift: i64,
        intensity: RankRef<'_>,
        intensity_shift: i64,
    ) -> TableResult<Outcome> {
        let roll = source.draw(self.die)?;
        self.evaluate_vs_intensity(base, roll, shift, intensity, intensity_shift)
    }

    /// Draw a roll and read the result from an effect column.
    pub fn roll_for_effect(
        &self,
        source: &mut impl RollSource,
        base: RankRef<'_>,
        shift: i64,
        effect: Option<EffectRef<'_>>,
    ) -> TableResult<Outcome> {
        let roll = source.draw(self.die)?;
        self.evaluate_with_effect(base, roll, shift, effect)
    }

    /// Resolve a full request: intensity and effect are both optional and
    /// may be combined. The roll is drawn only if the request lacks one.
    pub fn resolve(&self, request: &RollRequest, source: &mut impl RollSource) -> TableResult<Outcome> {
        let roll = match request.roll {
            Some(roll) => roll,
            None => source.draw(self.die)?,
        };
        let (mut outcome, rank) =
            self.evaluate_rank(RankRef::Key(&request.rank), roll, request.shift)?;
        if let Some(intensity) = &request.intensity {
            self.attach_intensity(
                &mut outcome,
                rank,
                RankRef::Key(intensity),
                request.intensity_shift,
            )?;
        }
        if let Some(effect) = &request.effect {
            self.attach_effect(&mut outcome, EffectRef::Key(effect))?;
        }
        Ok(outcome)
    }

    fn evaluate_rank<'a>(
        &'a self,
        base: RankRef<'a>,
        roll: u32,
        shift: i64,
    ) -> TableResult<(Outcome, &'a Rank)> {
        if !self.die.has_face(roll) {
            return Err(TableError::RollOutOfRange {
                roll,
                sides: self.die.sides(),
            });
        }
        let rank = self.final_rank(base, shift)?;
        let number = match self.catalog.numeric_value(base) {
            Some(n) if shift == 0 => n,
            _ => rank.standard,
        };
        let outcome = Outcome {
            roll,
            rank: rank.name.clone(),
            number,
            result: color_for_roll(roll, rank),
            required: None,
            success: None,
            column: None,
            effect: None,
        };
        Ok((outcome, rank))
    }

    fn attach_intensity(
        &self,
        outcome: &mut Outcome,
        rank: &Rank,
        intensity: RankRef<'_>,
        intensity_shift: i64,
    ) -> TableResult<()> {
        let intensity = self.final_rank(intensity, intensity_shift)?;
        let required = self.required_tier(rank, intensity)?;
        outcome.required = Some(required);
        outcome.success = Some(is_success(outcome.result, required));
        Ok(())
    }

    fn attach_effect(&self, outcome: &mut Outcome, effect: EffectRef<'_>) -> TableResult<()> {
        let effect = self.catalog.resolve_effect(effect)?;
        outcome.column = Some(effect.name.clone());
        outcome.effect = Some(effect.text(outcome.result).to_string());
        Ok(())
    }

    fn index(&self, rank: &Rank) -> TableResult<i64> {
        self.catalog
            .index_of(rank)
            .and_then(|i| i64::try_from(i).ok())
            .ok_or_else(|| TableError::UnknownRank(rank.name.clone()))
    }
}
