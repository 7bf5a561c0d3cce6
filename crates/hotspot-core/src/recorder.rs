//! Per-variant latency/memory accumulator.
//!
//! One `MetricRecorder` is created at startup and shared by every request
//! handler. Both variants sit behind a single mutex so `record` and `reset`
//! are atomic relative to each other, and a snapshot of both variants is
//! taken under the same lock.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which query implementation a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Inefficient,
    Optimized,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Inefficient, Variant::Optimized];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Inefficient => "inefficient",
            Variant::Optimized => "optimized",
        }
    }

    /// `"inefficient"` selects the hot-spot query; anything else is optimized.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "inefficient" {
            Variant::Inefficient
        } else {
            Variant::Optimized
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One traced call.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub elapsed_ms: f64,
    pub memory_delta_mb: f64,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate state for one variant.
///
/// `call_count == samples.len()` and `cumulative_elapsed_ms` is the sum of
/// sample times; only `MetricRecorder` mutates it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariantStats {
    pub call_count: u64,
    pub cumulative_elapsed_ms: f64,
    pub cumulative_memory_mb: f64,
    pub samples: Vec<Sample>,
}

impl VariantStats {
    fn push(&mut self, sample: Sample) {
        self.call_count += 1;
        self.cumulative_elapsed_ms += sample.elapsed_ms;
        self.cumulative_memory_mb += sample.memory_delta_mb;
        self.samples.push(sample);
    }

    pub fn average_elapsed_ms(&self) -> f64 {
        if self.call_count == 0 {
            0.0
        } else {
            self.cumulative_elapsed_ms / self.call_count as f64
        }
    }

    pub fn min_elapsed_ms(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.elapsed_ms)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn max_elapsed_ms(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.elapsed_ms)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Default)]
struct Slots {
    inefficient: VariantStats,
    optimized: VariantStats,
}

impl Slots {
    fn get(&self, variant: Variant) -> &VariantStats {
        match variant {
            Variant::Inefficient => &self.inefficient,
            Variant::Optimized => &self.optimized,
        }
    }

    fn get_mut(&mut self, variant: Variant) -> &mut VariantStats {
        match variant {
            Variant::Inefficient => &mut self.inefficient,
            Variant::Optimized => &mut self.optimized,
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricRecorder {
    inner: Mutex<Slots>,
}

impl MetricRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoned guard is reused: no code path panics mid-update.
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append one sample. Always succeeds.
    pub fn record(&self, variant: Variant, elapsed_ms: f64, memory_delta_mb: f64) {
        let sample = Sample {
            elapsed_ms,
            memory_delta_mb,
            timestamp: Utc::now(),
        };
        self.lock().get_mut(variant).push(sample);
    }

    /// Clear every variant in one step.
    pub fn reset(&self) {
        *self.lock() = Slots::default();
        tracing::debug!("metric recorder cleared");
    }

    pub fn snapshot(&self, variant: Variant) -> VariantStats {
        self.lock().get(variant).clone()
    }

    /// Both variants from one lock acquisition: `(inefficient, optimized)`.
    pub fn snapshot_all(&self) -> (VariantStats, VariantStats) {
        let g = self.lock();
        (g.inefficient.clone(), g.optimized.clone())
    }

    pub fn call_count(&self, variant: Variant) -> u64 {
        self.lock().get(variant).call_count
    }
}
