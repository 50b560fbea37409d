use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Body of `POST /mutant`. Both the array and its rows are nullable so a
/// null anywhere becomes a validation error rather than a decode error.
#[derive(Deserialize, Debug)]
pub struct DnaRequest {
    #[serde(default)]
    pub dna: Option<Vec<Option<String>>>,
}

/// 200 for a mutant, 403 for a human, 400 for anything that is not a
/// valid NxN matrix over A/T/C/G.
pub async fn check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DnaRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(req) = payload?;

    let eval = state.service.evaluate(req.dna.as_deref()).await?;
    debug!(
        "DNA {} -> mutant={} cached={}",
        eval.fingerprint.short(12),
        eval.is_mutant,
        eval.cached
    );

    Ok(if eval.is_mutant {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    })
}
