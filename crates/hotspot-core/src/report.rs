//! Report aggregator: averages, extremes and relative improvement.
//!
//! Pure function of the recorder's current state; nothing is mutated.
//! Values are unrounded here, the HTTP layer rounds for display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::recorder::{MetricRecorder, VariantStats};

/// Floor applied to the optimized average before dividing (ms).
pub const SPEEDUP_FLOOR_MS: f64 = 0.001;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantSummary {
    pub calls: u64,
    pub avg_elapsed_ms: f64,
    pub min_elapsed_ms: f64,
    pub max_elapsed_ms: f64,
    pub total_memory_mb: f64,
}

impl From<&VariantStats> for VariantSummary {
    fn from(s: &VariantStats) -> Self {
        Self {
            calls: s.call_count,
            avg_elapsed_ms: s.average_elapsed_ms(),
            min_elapsed_ms: s.min_elapsed_ms(),
            max_elapsed_ms: s.max_elapsed_ms(),
            total_memory_mb: s.cumulative_memory_mb,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Improvement {
    /// `(avg_inefficient - avg_optimized) / avg_inefficient * 100`, 0 without inefficient data.
    pub response_time_percent: f64,
    /// `avg_inefficient / max(avg_optimized, floor)`, 0 without optimized calls.
    pub estimated_speedup: f64,
    /// `(mem_inefficient - mem_optimized) / max(mem_inefficient, 1) * 100`.
    pub memory_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub inefficient: VariantSummary,
    pub optimized: VariantSummary,
    pub improvement: Improvement,
}

pub fn build_report(recorder: &MetricRecorder) -> Report {
    let (slow, fast) = recorder.snapshot_all();
    let inefficient = VariantSummary::from(&slow);
    let optimized = VariantSummary::from(&fast);
    let improvement = compare(&inefficient, &optimized);

    Report {
        generated_at: Utc::now(),
        inefficient,
        optimized,
        improvement,
    }
}

pub fn compare(inefficient: &VariantSummary, optimized: &VariantSummary) -> Improvement {
    let slow_avg = inefficient.avg_elapsed_ms;
    let fast_avg = optimized.avg_elapsed_ms;

    let response_time_percent = if slow_avg > 0.0 {
        (slow_avg - fast_avg) / slow_avg * 100.0
    } else {
        0.0
    };

    let estimated_speedup = if optimized.calls == 0 {
        0.0
    } else {
        (slow_avg / fast_avg.max(SPEEDUP_FLOOR_MS)).max(0.0)
    };

    let memory_percent = (inefficient.total_memory_mb - optimized.total_memory_mb)
        / inefficient.total_memory_mb.max(1.0)
        * 100.0;

    Improvement {
        response_time_percent,
        estimated_speedup,
        memory_percent,
    }
}
