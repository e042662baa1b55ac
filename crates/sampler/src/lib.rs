//! Per-tick reduction of raw host counters into smoothed display values.
//!
//! [`MetricsSampler::tick`] is the whole pipeline: validate the frame
//! delta, fold it into an exponential moving average, derive FPS and
//! frame time, convert memory counters, classify health, and append to
//! the history strip. Everything else in the workspace either feeds this
//! function or displays its output.

use hud_core::{
    FpsHealth, FrameHistory, OverlayError, RawSample, RenderSnapshot, Result, Snapshot,
};

/// EMA weight applied to each new frame delta.
pub const SMOOTHING_ALPHA: f32 = 0.1;

/// Seed for the delta accumulator: one 60 Hz frame. Must be positive so
/// the very first tick cannot divide by zero.
const INITIAL_DELTA_SECONDS: f32 = 1.0 / 60.0;

/// Floor for the delta accumulator. A long run of zero deltas decays the
/// average geometrically; without a floor it would eventually underflow
/// to 0.0 and take the derived FPS to infinity.
const MIN_DELTA_SECONDS: f32 = 1e-6;

/// Floor applied to FPS before deriving frame milliseconds.
const MIN_FPS: f32 = 1e-4;

const BYTES_PER_MB: f32 = (1024 * 1024) as f32;

/// Folds one [`RawSample`] per tick into a [`Snapshot`] plus a history
/// append.
///
/// State carried across ticks is exactly: the smoothed delta, the peak
/// heap reading, and the health history ring. Creating a new sampler
/// resets all three; nothing resets implicitly.
#[derive(Debug)]
pub struct MetricsSampler {
    smoothed_delta: f32,
    peak_mb: f32,
    history: FrameHistory,
}

impl MetricsSampler {
    pub fn new() -> Self {
        Self {
            smoothed_delta: INITIAL_DELTA_SECONDS,
            peak_mb: 0.0,
            history: FrameHistory::new(),
        }
    }

    /// The frame-health strip, in slot order.
    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// Reduce the next raw sample into display values.
    ///
    /// A negative or non-finite frame delta indicates a broken host clock;
    /// the tick is rejected with [`OverlayError::InvalidTimeSource`] and
    /// every piece of sampler state is left untouched. A delta of exactly
    /// zero is valid (two ticks inside one timer quantum).
    pub fn tick(&mut self, raw: &RawSample) -> Result<Snapshot> {
        let delta = raw.frame_delta_seconds;
        if delta < 0.0 || !delta.is_finite() {
            return Err(OverlayError::InvalidTimeSource { seconds: delta });
        }

        self.smoothed_delta += (delta - self.smoothed_delta) * SMOOTHING_ALPHA;
        self.smoothed_delta = self.smoothed_delta.max(MIN_DELTA_SECONDS);

        let fps = 1.0 / self.smoothed_delta;
        let frame_millis = 1000.0 / fps.max(MIN_FPS);

        // Unavailable host counters pass through as absent — never zero,
        // never interpolated from earlier ticks.
        let gpu_millis = raw.gpu_frame_seconds.map(|seconds| seconds * 1000.0);
        let render = raw.render.map(|r| RenderSnapshot {
            draw_calls: r.draw_calls,
            batches: r.batches,
            vertex_count_thousands: r.vertices as f32 / 1000.0,
        });

        let used_mb = raw.heap_bytes_in_use as f32 / BYTES_PER_MB;
        self.peak_mb = self.peak_mb.max(used_mb);

        let fps_health = FpsHealth::classify(fps);
        self.history.push(fps_health);

        Ok(Snapshot {
            smoothed_fps: fps,
            frame_millis,
            gpu_millis,
            render,
            used_mb,
            peak_mb: self.peak_mb,
            limit_mb: raw.system_memory_limit_bytes as f32 / BYTES_PER_MB,
            managed_mb: raw.used_managed_bytes as f32 / BYTES_PER_MB,
            native_mb: raw.reserved_native_bytes as f32 / BYTES_PER_MB,
            gc_count: raw.gc_count,
            thread_count: raw.thread_count,
            api_name: raw.api_name.clone(),
            device_name: raw.device_name.clone(),
            fps_health,
        })
    }
}

impl Default for MetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}
