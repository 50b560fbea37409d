pub mod mutant;
pub mod stats;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn mutant_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mutant", axum::routing::post(mutant::check))
        .route("/stats", axum::routing::get(stats::get_stats))
}
