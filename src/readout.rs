//! Minimal terminal renderer: one log line per metric group.
//!
//! All formatting lives here, on the renderer side of the boundary — the
//! sampler crates expose only structured values.

use hud_config::SectionsConfig;
use hud_core::{FpsHealth, FrameHistory, OverlayFrame};
use tracing::info;

/// Print one overlay frame, honouring the configured section toggles.
pub fn print(frame: &OverlayFrame, sections: &SectionsConfig) {
    let s = &frame.snapshot;

    if sections.timing {
        let gpu = match s.gpu_millis {
            Some(ms) => format!("{ms:.1}ms"),
            None => "n/a".to_string(),
        };
        info!(
            "fps {:.1} ({:.1}ms)  gpu {}  [{}]",
            s.smoothed_fps,
            s.frame_millis,
            gpu,
            strip(&frame.history),
        );
    }

    if sections.render {
        match s.render {
            Some(r) => info!(
                "draws {}  batches {}  verts {:.1}k",
                r.draw_calls, r.batches, r.vertex_count_thousands,
            ),
            None => info!("render stats n/a"),
        }
    }

    if sections.memory {
        info!(
            "mem {:.1}/{:.1}MB  peak {:.1}MB ({:.0}%)  managed {:.1}MB  native {:.1}MB",
            s.used_mb,
            s.limit_mb,
            s.peak_mb,
            s.peak_fraction() * 100.0,
            s.managed_mb,
            s.native_mb,
        );
    }

    if sections.system {
        info!(
            "gc {}  threads {}  api {}  gpu {}",
            s.gc_count, s.thread_count, s.api_name, s.device_name,
        );
    }
}

/// Render the health strip as one character per slot, oldest positions
/// kept stable: `+` good, `~` fair, `-` poor, `.` not yet written.
fn strip(history: &FrameHistory) -> String {
    history
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(FpsHealth::Good) => '+',
            Some(FpsHealth::Fair) => '~',
            Some(FpsHealth::Poor) => '-',
            None => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_renders_one_char_per_slot() {
        let mut history = FrameHistory::new();
        history.push(FpsHealth::Good);
        history.push(FpsHealth::Fair);
        history.push(FpsHealth::Poor);

        let rendered = strip(&history);
        assert_eq!(rendered.len(), hud_core::HISTORY_LEN);
        assert!(rendered.starts_with("+~-"));
        assert!(rendered.ends_with('.'));
    }
}
