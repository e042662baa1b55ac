use hud_core::{OverlayError, RawSample, Result, StatsSource};
use std::time::Instant;
use sysinfo::{Pid, System};

/// Statistics source for the overlay's own process, backed by `sysinfo`.
///
/// Covers the counters any host can supply: wall-clock frame delta,
/// process memory, the system memory ceiling, and the thread count. The
/// counters only a graphics backend owns — GPU frame time and draw
/// statistics — are reported absent; an engine integration replaces this
/// source with one wired into its frame loop. `gc_count` stays flat at
/// zero: there is no collector in this host.
pub struct ProcessSource {
    sys: System,
    pid: Pid,
    last_tick: Instant,
    api_name: String,
    device_name: String,
}

impl ProcessSource {
    /// `api_name` / `device_name` identify the host's graphics backend;
    /// they are surfaced verbatim and never change for the life of the run.
    pub fn new(api_name: impl Into<String>, device_name: impl Into<String>) -> Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| OverlayError::Host(format!("cannot resolve own pid: {e}")))?;

        Ok(Self {
            sys: System::new_all(),
            pid,
            last_tick: Instant::now(),
            api_name: api_name.into(),
            device_name: device_name.into(),
        })
    }
}

impl StatsSource for ProcessSource {
    fn sample(&mut self) -> Result<RawSample> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.sys.refresh_all();
        let process = self.sys.process(self.pid).ok_or_else(|| {
            OverlayError::Host(format!("process {} not visible to sysinfo", self.pid))
        })?;

        // The heap reading and the managed figure are the same counter
        // here: a generic host has no managed/native allocator split, so
        // RSS stands in for both and the native figure is the reservation.
        let resident = process.memory();

        Ok(RawSample {
            frame_delta_seconds: delta,
            gpu_frame_seconds: None,
            render: None,
            used_managed_bytes: resident,
            reserved_native_bytes: process.virtual_memory(),
            heap_bytes_in_use: resident,
            system_memory_limit_bytes: self.sys.total_memory(),
            gc_count: 0,
            thread_count: read_thread_count().unwrap_or(1),
            api_name: self.api_name.clone(),
            device_name: self.device_name.clone(),
        })
    }
}

/// Read the current thread count from the Linux procfs status file.
///
/// Returns `None` on platforms without procfs or if the field is missing;
/// callers fall back to 1 (the thread making the call).
fn read_thread_count() -> Option<u32> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;

    status
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|rest| rest.trim().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_own_process() {
        let mut source = ProcessSource::new("none", "host").unwrap();
        let raw = source.sample().unwrap();

        assert!(raw.frame_delta_seconds >= 0.0);
        assert!(raw.heap_bytes_in_use > 0);
        assert!(raw.system_memory_limit_bytes >= raw.heap_bytes_in_use);
        assert!(raw.thread_count >= 1);
        assert_eq!(raw.gpu_frame_seconds, None);
        assert!(raw.render.is_none());
        assert_eq!(raw.api_name, "none");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn thread_count_reads_from_procfs() {
        assert!(read_thread_count().unwrap() >= 1);
    }
}
