//! Resident-memory probe backed by `sysinfo`.

use std::sync::Mutex;

use sysinfo::{Pid, ProcessesToUpdate, System};

use hotspot_core::error::{HotspotError, Result};
use hotspot_core::measure::MemoryProbe;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Reads this process's RSS. One `System` is reused across calls so only the
/// single process entry is refreshed per reading.
pub struct SysinfoProbe {
    pid: Pid,
    sys: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            pid: Pid::from_u32(std::process::id()),
            sys: Mutex::new(System::new()),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for SysinfoProbe {
    fn resident_mb(&self) -> Result<f64> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|_| HotspotError::Measurement("memory probe lock poisoned".into()))?;

        sys.refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        let process = sys
            .process(self.pid)
            .ok_or_else(|| HotspotError::Measurement(format!("process {} not visible", self.pid)))?;

        Ok(process.memory() as f64 / BYTES_PER_MB)
    }
}
