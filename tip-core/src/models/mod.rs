mod slider_position;
mod split_count;
mod tip_fraction;
mod tip_mode;
mod tip_summary;

pub use slider_position::SliderPosition;
pub use split_count::SplitCount;
pub use tip_fraction::{TipFraction, TipPreset};
pub use tip_mode::TipMode;
pub use tip_summary::TipSummary;
