pub mod error;
pub mod history;
pub mod sample;
pub mod snapshot;
pub mod source;

pub use error::{OverlayError, Result};
pub use history::{FrameHistory, HISTORY_LEN};
pub use sample::{RawSample, RenderStats};
pub use snapshot::{FpsHealth, OverlayFrame, RenderSnapshot, Snapshot};
pub use source::StatsSource;
