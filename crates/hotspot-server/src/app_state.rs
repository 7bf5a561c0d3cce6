//! Shared application state for the hotspot service.
//!
//! Owns the catalog, the metric recorder, the dispatcher and the memory
//! probe. Created once in `main`, cloned (cheaply, via `Arc`) into every
//! handler.

use std::sync::Arc;

use hotspot_core::catalog::Catalog;
use hotspot_core::error::Result;
use hotspot_core::measure::MemoryProbe;
use hotspot_core::recorder::{MetricRecorder, Variant};

use crate::config::ServerConfig;
use crate::dispatch::{DispatchCtx, Dispatcher, Served};
use crate::obs::memory::SysinfoProbe;
use crate::obs::metrics::ServiceMetrics;
use crate::services::{InefficientQuery, OptimizedQuery};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    recorder: Arc<MetricRecorder>,
    dispatcher: Arc<Dispatcher>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    catalog: Catalog,
    probe: Box<dyn MemoryProbe>,
}

impl AppState {
    /// Build application state with the OS memory probe.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let catalog = match cfg.catalog.path.as_deref() {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Self::with_parts(cfg, catalog, Box::new(SysinfoProbe::new())))
    }

    /// Build application state from explicit parts (tests swap the probe).
    pub fn with_parts(cfg: ServerConfig, catalog: Catalog, probe: Box<dyn MemoryProbe>) -> Self {
        let dispatcher = Dispatcher::new();
        dispatcher.register(Arc::new(InefficientQuery::new()));
        dispatcher.register(Arc::new(OptimizedQuery::new()));

        Self {
            inner: Arc::new(AppStateInner { cfg, catalog, probe }),
            recorder: Arc::new(MetricRecorder::new()),
            dispatcher: Arc::new(dispatcher),
            metrics: Arc::new(ServiceMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn recorder(&self) -> Arc<MetricRecorder> {
        Arc::clone(&self.recorder)
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Run one traced query and record it.
    pub fn serve(&self, variant: Variant, genre: &str, limit: i64) -> Result<Served> {
        let ctx = DispatchCtx {
            catalog: &self.inner.catalog,
            probe: self.inner.probe.as_ref(),
            recorder: &self.recorder,
            metrics: &self.metrics,
        };
        self.dispatcher.dispatch(&ctx, variant, genre, limit)
    }

    /// Recorder-derived lines for `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(String, u64)> {
        Variant::ALL
            .iter()
            .map(|v| {
                (
                    format!("hotspot_recorded_calls{{variant=\"{}\"}}", v.as_str()),
                    self.recorder.call_count(*v),
                )
            })
            .collect()
    }
}
