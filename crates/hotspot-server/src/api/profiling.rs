use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{json, Value};

use hotspot_core::report::{build_report, Report, VariantSummary};

use super::round_to;
use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ReportBody {
    pub summary: SummaryBody,
    pub inefficient: VariantBody,
    pub optimized: VariantBody,
    pub improvement: ImprovementBody,
}

#[derive(Debug, Serialize)]
pub struct SummaryBody {
    pub timestamp: String,
    pub profiling_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct VariantBody {
    pub calls: u64,
    pub avg_response_time_ms: f64,
    pub total_allocations_mb: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
}

impl From<&VariantSummary> for VariantBody {
    fn from(s: &VariantSummary) -> Self {
        Self {
            calls: s.calls,
            avg_response_time_ms: round_to(s.avg_elapsed_ms, 2),
            total_allocations_mb: round_to(s.total_memory_mb, 2),
            min_time_ms: round_to(s.min_elapsed_ms, 2),
            max_time_ms: round_to(s.max_elapsed_ms, 2),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImprovementBody {
    pub response_time_improvement_percent: f64,
    pub estimated_speedup: f64,
    pub estimated_memory_improvement_percent: f64,
}

impl From<&Report> for ReportBody {
    fn from(r: &Report) -> Self {
        Self {
            summary: SummaryBody {
                timestamp: r.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                profiling_enabled: true,
            },
            inefficient: VariantBody::from(&r.inefficient),
            optimized: VariantBody::from(&r.optimized),
            improvement: ImprovementBody {
                response_time_improvement_percent: round_to(r.improvement.response_time_percent, 1),
                estimated_speedup: round_to(r.improvement.estimated_speedup, 1),
                estimated_memory_improvement_percent: round_to(r.improvement.memory_percent, 1),
            },
        }
    }
}

pub async fn profiling_report(State(state): State<AppState>) -> Json<ReportBody> {
    let report = build_report(&state.recorder());
    Json(ReportBody::from(&report))
}

pub async fn profiling_reset(State(state): State<AppState>) -> Json<Value> {
    state.recorder().reset();
    state.metrics().profiling_resets.inc(&[]);
    tracing::info!("profiling data reset");
    Json(json!({ "status": "profiling data reset" }))
}
