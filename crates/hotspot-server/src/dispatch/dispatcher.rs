use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use hotspot_core::catalog::{Catalog, Record};
use hotspot_core::error::{HotspotError, Result};
use hotspot_core::measure::{measure, MemoryProbe};
use hotspot_core::recorder::{MetricRecorder, Variant};

use crate::obs::metrics::ServiceMetrics;

/// One implementation of the top-N-by-genre query.
pub trait GenreQuery: Send + Sync {
    fn variant(&self) -> Variant;
    /// Human-readable notes returned alongside results (`details`).
    fn details(&self) -> &'static [(&'static str, &'static str)];
    fn run(&self, catalog: &Catalog, genre: &str, limit: i64) -> Result<Vec<Record>>;
}

/// Outcome of one traced, recorded call.
#[derive(Debug)]
pub struct Served {
    pub variant: Variant,
    pub records: Vec<Record>,
    pub elapsed_ms: f64,
    pub memory_delta_mb: f64,
    pub details: &'static [(&'static str, &'static str)],
}

/// Everything one dispatch needs besides the query arguments.
pub struct DispatchCtx<'a> {
    pub catalog: &'a Catalog,
    pub probe: &'a dyn MemoryProbe,
    pub recorder: &'a MetricRecorder,
    pub metrics: &'a ServiceMetrics,
}

/// Registry of query variants.
#[derive(Default)]
pub struct Dispatcher {
    queries: DashMap<Variant, Arc<dyn GenreQuery>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            queries: DashMap::new(),
        }
    }

    pub fn register(&self, q: Arc<dyn GenreQuery>) {
        self.queries.insert(q.variant(), q);
    }

    pub fn registered_variants(&self) -> Vec<Variant> {
        let mut out: Vec<Variant> = self.queries.iter().map(|e| *e.key()).collect();
        out.sort_by_key(|v| v.as_str());
        out
    }

    /// Measure the selected query and record the sample.
    ///
    /// A sample reaches the recorder only after both the query and the
    /// measurement completed; any failure returns before `record`.
    pub fn dispatch(
        &self,
        ctx: &DispatchCtx<'_>,
        variant: Variant,
        genre: &str,
        limit: i64,
    ) -> Result<Served> {
        let handler = self
            .queries
            .get(&variant)
            .ok_or_else(|| HotspotError::Internal(format!("no query registered for {variant}")))?
            .value()
            .clone();

        let labels = [("variant", variant.as_str())];
        ctx.metrics.queries_in_flight.inc(&labels);
        let measured = measure(ctx.probe, || handler.run(ctx.catalog, genre, limit));
        ctx.metrics.queries_in_flight.dec(&labels);

        let measured = measured.inspect_err(|e| {
            ctx.metrics.measurement_failures.inc(&labels);
            tracing::warn!(%variant, %genre, limit, error = %e, "traced query failed, sample discarded");
        })?;

        ctx.recorder
            .record(variant, measured.elapsed_ms, measured.memory_delta_mb);
        ctx.metrics
            .query_duration
            .observe(&labels, Duration::try_from_secs_f64(measured.elapsed_ms / 1000.0).unwrap_or_default());

        Ok(Served {
            variant,
            records: measured.value,
            elapsed_ms: measured.elapsed_ms,
            memory_delta_mb: measured.memory_delta_mb,
            details: handler.details(),
        })
    }
}
