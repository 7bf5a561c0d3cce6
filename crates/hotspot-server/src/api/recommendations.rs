use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use hotspot_core::catalog::Record;
use hotspot_core::error::HotspotError;
use hotspot_core::recorder::Variant;

use super::{round_to, ApiError};
use crate::app_state::AppState;

const DEFAULT_MODE: &str = "optimized";

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub genre: Option<String>,
    pub limit: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationBody {
    pub genre: String,
    pub limit: i64,
    pub mode: String,
    pub result: Vec<Record>,
    pub response_time_ms: f64,
    pub allocated_mb: f64,
    pub count: usize,
    pub details: BTreeMap<&'static str, &'static str>,
}

/// Parse `limit`; present-but-malformed is a client error, never a silent default.
pub fn parse_limit(raw: Option<&str>, default: u32) -> Result<i64, HotspotError> {
    match raw {
        None => Ok(i64::from(default)),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| HotspotError::BadRequest(format!("limit must be an integer, got {s:?}"))),
    }
}

pub async fn recommendations(
    State(state): State<AppState>,
    params: Result<Query<RecommendationParams>, QueryRejection>,
) -> Result<Json<RecommendationBody>, ApiError> {
    let metrics = state.metrics();

    let Query(params) = params.map_err(|e| {
        metrics.bad_requests.inc(&[("reason", "query")]);
        HotspotError::BadRequest(format!("invalid query string: {e}"))
    })?;

    let defaults = &state.cfg().recommendations;
    let limit = parse_limit(params.limit.as_deref(), defaults.default_limit).inspect_err(|_| {
        metrics.bad_requests.inc(&[("reason", "limit")]);
    })?;
    let genre = params.genre.unwrap_or_else(|| defaults.default_genre.clone());
    let mode = params.mode.unwrap_or_else(|| DEFAULT_MODE.to_string());
    let variant = Variant::from_mode(&mode);

    let served = state.serve(variant, &genre, limit)?;

    tracing::info!(
        mode = %variant,
        %genre,
        limit,
        elapsed_ms = round_to(served.elapsed_ms, 2),
        memory_mb = round_to(served.memory_delta_mb, 2),
        count = served.records.len(),
        "recommendation served"
    );

    Ok(Json(RecommendationBody {
        genre,
        limit,
        mode,
        count: served.records.len(),
        result: served.records,
        response_time_ms: round_to(served.elapsed_ms, 2),
        allocated_mb: round_to(served.memory_delta_mb, 2),
        details: served.details.iter().copied().collect(),
    }))
}
