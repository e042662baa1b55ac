use thiserror::Error;

/// Top-level error type used across the overlay crates.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("host stats error: {0}")]
    Host(String),

    /// The host's frame clock handed back a delta that cannot be real.
    /// Feeding it into the smoothing average would poison every later
    /// reading, so the tick is rejected instead.
    #[error("invalid frame delta from time source: {seconds}s")]
    InvalidTimeSource { seconds: f32 },
}

pub type Result<T, E = OverlayError> = std::result::Result<T, E>;
