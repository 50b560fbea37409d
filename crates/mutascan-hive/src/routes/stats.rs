use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use mutascan_core::StatsSnapshot;
use std::sync::Arc;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> AppResult<Json<StatsSnapshot>> {
    Ok(Json(state.service.stats().await?))
}
