//! Per-route request counting (`hotspot_http_requests_total`).

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let res = next.run(req).await;

    let status = res.status().as_u16().to_string();
    state
        .metrics()
        .http_requests
        .inc(&[("route", route.as_str()), ("status", status.as_str())]);
    res
}
