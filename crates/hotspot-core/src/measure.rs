//! Measurement wrapper: wall-clock time and resident-memory delta around one call.
//!
//! Memory readings come from a [`MemoryProbe`] so the OS primitive stays
//! outside this crate. The delta is a process-wide RSS difference and is
//! noisy; negative values are normal and are passed through unchanged.

use std::time::Instant;

use crate::error::Result;

/// Source of the current process resident memory, in megabytes.
pub trait MemoryProbe: Send + Sync {
    fn resident_mb(&self) -> Result<f64>;
}

/// Result of a traced call.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed_ms: f64,
    pub memory_delta_mb: f64,
}

/// Run `op` between two memory readings and two clock readings.
///
/// Any failure (either probe read or the operation itself) is returned as-is
/// and no partial measurement escapes. Recording is left to the caller.
pub fn measure<T, F>(probe: &dyn MemoryProbe, op: F) -> Result<Measured<T>>
where
    F: FnOnce() -> Result<T>,
{
    let start_mb = probe.resident_mb()?;
    let start = Instant::now();

    let value = op()?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let end_mb = probe.resident_mb()?;

    Ok(Measured {
        value,
        elapsed_ms,
        memory_delta_mb: end_mb - start_mb,
    })
}
