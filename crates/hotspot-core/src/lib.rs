//! hotspot core: records, the two genre queries, and the profiling harness.
//!
//! This crate holds everything that is measured and everything that measures:
//! the read-only catalog, the inefficient and optimized top-by-genre queries,
//! the measurement wrapper, the metric recorder and the report aggregator.
//! It carries no HTTP or async runtime dependency so the harness can be
//! exercised directly from tests and benchmarks.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `HotspotError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod measure;
pub mod query;
pub mod recorder;
pub mod report;

/// Shared result type.
pub use error::{Result, HotspotError};
pub use catalog::{Catalog, Record};
pub use recorder::{MetricRecorder, Variant};
