//! Axum router wiring.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommendations", get(api::recommendations::recommendations))
        .route("/profiling-report", get(api::profiling::profiling_report))
        .route("/profiling-reset", post(api::profiling::profiling_reset))
        .route("/health", get(ops::health))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track::track_requests,
        ))
        .with_state(state)
}
