pub mod process;

pub use process::ProcessSource;

use hud_core::{OverlayFrame, StatsSource};
use hud_sampler::MetricsSampler;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::warn;

/// Spawn a background Tokio task that samples `source` every `interval_ms`
/// milliseconds, folds each reading through a [`MetricsSampler`], and
/// forwards an [`OverlayFrame`] (snapshot + health strip) through the
/// returned channel.
///
/// The task stops automatically when the receiver is dropped. A failed
/// source read or a sample the sampler rejects (broken host clock) is
/// logged and skipped: the tick is lost rather than fed into the
/// smoothing state.
pub fn spawn_overlay(
    interval_ms: u64,
    mut source: impl StatsSource + 'static,
) -> mpsc::Receiver<OverlayFrame> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        let mut sampler = MetricsSampler::new();
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;

            let raw = match source.sample() {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("host statistics read failed: {e}");
                    continue;
                }
            };

            let snapshot = match sampler.tick(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("sample rejected: {e}");
                    continue;
                }
            };

            let frame = OverlayFrame {
                snapshot,
                history: sampler.history().clone(),
            };

            if tx.send(frame).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use hud_core::{RawSample, Result};

    /// Replays a fixed list of frame deltas, then repeats the last one.
    struct ScriptedSource {
        deltas: Vec<f32>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(deltas: Vec<f32>) -> Self {
            Self { deltas, next: 0 }
        }
    }

    impl StatsSource for ScriptedSource {
        fn sample(&mut self) -> Result<RawSample> {
            let delta = self.deltas[self.next.min(self.deltas.len() - 1)];
            self.next += 1;

            Ok(RawSample {
                frame_delta_seconds: delta,
                gpu_frame_seconds: None,
                render: None,
                used_managed_bytes: 0,
                reserved_native_bytes: 0,
                heap_bytes_in_use: 16 * 1024 * 1024,
                system_memory_limit_bytes: 1024 * 1024 * 1024,
                gc_count: 0,
                thread_count: 1,
                api_name: "none".to_string(),
                device_name: "scripted".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn overlay_loop_forwards_frames() {
        let mut rx = spawn_overlay(1, ScriptedSource::new(vec![1.0 / 60.0]));

        let first = rx.recv().await.expect("overlay task died");
        assert!(first.snapshot.smoothed_fps > 0.0);
        assert_eq!(first.snapshot.used_mb, 16.0);
        assert_eq!(first.history.cursor(), 1);

        let second = rx.recv().await.expect("overlay task died");
        assert!(second.snapshot.smoothed_fps.is_finite());
        assert_eq!(second.history.cursor(), 2);
    }

    #[tokio::test]
    async fn overlay_loop_skips_rejected_samples() {
        // First reading is a broken clock; the loop must drop it and the
        // first delivered frame comes from the second, valid reading.
        let mut rx = spawn_overlay(1, ScriptedSource::new(vec![-1.0, 1.0 / 60.0]));

        let frame = rx.recv().await.expect("overlay task died");
        assert!(frame.snapshot.smoothed_fps > 0.0);
        assert_eq!(frame.history.cursor(), 1);
    }
}
