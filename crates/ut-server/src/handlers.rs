//! Route handlers.
//!
//! Handlers translate path and query parameters into resolver calls; all
//! domain decisions happen in `ut_table`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use ut_table::{
    Effect, EffectRef, EntropySource, Outcome, Rank, RankRef, Resolver, RollRequest, parse_shift,
};

use crate::AppState;
use crate::error::ApiError;

/// Optional modifiers accepted by the roll routes.
#[derive(Debug, Default, Deserialize)]
pub struct RollQuery {
    /// Column shift for the rank.
    pub cs: Option<String>,
    /// Opposing intensity rank.
    pub intensity: Option<String>,
    /// Column shift for the intensity.
    pub is: Option<String>,
    /// Effect column to consult.
    pub effect: Option<String>,
}

impl RollQuery {
    fn into_request(self, rank: String, roll: Option<u32>) -> RollRequest {
        RollRequest {
            rank,
            roll,
            shift: self.cs.as_deref().map_or(0, parse_shift),
            intensity: self.intensity,
            intensity_shift: self.is.as_deref().map_or(0, parse_shift),
            effect: self.effect,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub(crate) async fn root() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

pub(crate) async fn list_ranks(State(state): State<Arc<AppState>>) -> Json<Vec<Rank>> {
    Json(state.catalog.ranks().to_vec())
}

pub(crate) async fn get_rank(
    State(state): State<Arc<AppState>>,
    Path(rank): Path<String>,
) -> Result<Json<Rank>, ApiError> {
    let rank = state.catalog.resolve_rank(RankRef::Key(&rank))?;
    Ok(Json(rank.clone()))
}

pub(crate) async fn list_effects(State(state): State<Arc<AppState>>) -> Json<Vec<Effect>> {
    Json(state.catalog.effects().to_vec())
}

pub(crate) async fn get_effect(
    State(state): State<Arc<AppState>>,
    Path(effect): Path<String>,
) -> Result<Json<Effect>, ApiError> {
    let effect = state.catalog.resolve_effect(EffectRef::Key(&effect))?;
    Ok(Json(effect.clone()))
}

pub(crate) async fn get_effect_text(
    State(state): State<Arc<AppState>>,
    Path((effect, color)): Path<(String, String)>,
) -> Result<Json<String>, ApiError> {
    let resolver = Resolver::new(&state.catalog);
    let text = resolver.effect_text_for(EffectRef::Key(&effect), &color)?;
    Ok(Json(text.to_string()))
}

pub(crate) async fn roll(
    State(state): State<Arc<AppState>>,
    Path(rank): Path<String>,
    Query(query): Query<RollQuery>,
) -> Result<Json<Outcome>, ApiError> {
    let request = query.into_request(rank, None);
    let outcome = Resolver::new(&state.catalog).resolve(&request, &mut EntropySource)?;
    Ok(Json(outcome))
}

pub(crate) async fn roll_with_value(
    State(state): State<Arc<AppState>>,
    Path((rank, roll)): Path<(String, String)>,
    Query(query): Query<RollQuery>,
) -> Result<Json<Outcome>, ApiError> {
    let roll = roll
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidRoll(roll.clone()))?;
    let request = query.into_request(rank, Some(roll));
    let outcome = Resolver::new(&state.catalog).resolve(&request, &mut EntropySource)?;
    Ok(Json(outcome))
}
