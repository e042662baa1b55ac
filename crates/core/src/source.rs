use crate::{error::Result, sample::RawSample};

/// Pull interface to the host's statistics counters.
///
/// Implementations read whatever the platform exposes — frame clock,
/// GPU timings, allocator counters — and hand back one [`RawSample`] per
/// call. The overlay calls [`StatsSource::sample`] exactly once per tick
/// and never caches readings across ticks.
///
/// Counters the host cannot supply are reported as `None`, not guessed:
/// absence is a valid state the readout displays as "n/a".
pub trait StatsSource: Send {
    /// Collect the current counters.
    fn sample(&mut self) -> Result<RawSample>;
}
