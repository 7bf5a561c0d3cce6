//! Lightweight in-process observability.
//!
//! - `metrics`: Prometheus-compatible counters/gauges/histograms on atomics,
//!   rendered by the `/metrics` handler.
//! - `memory`: the resident-memory probe used by the measurement wrapper.
//! - `track`: route-level request counting middleware.

pub mod memory;
pub mod metrics;
pub mod track;
