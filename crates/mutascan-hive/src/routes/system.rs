use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub records: u64,
}

pub async fn root() -> &'static str {
    "Mutascan Hive API v0.1"
}

pub async fn health(State(state): State<Arc<AppState>>) -> AppResult<Json<StatusResponse>> {
    let records = state.service.cache().store().total().await?;
    Ok(Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
    }))
}
