pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>, body_limit: usize) -> Router {
    routes::system_routes()
        .merge(routes::mutant_routes())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
