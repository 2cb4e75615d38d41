//! Codecs for intervals, date intervals and durations.

mod duration;
mod interval;
pub(crate) mod iso;

pub use duration::DurationCodec;
pub use interval::{DateIntervalCodec, IntervalCodec};
pub use iso::{IsoDateIntervalCodec, IsoIntervalCodec};

/// Canonical name of the start property before the naming policy applies.
pub const START_PROPERTY: &str = "Start";
/// Canonical name of the end property before the naming policy applies.
pub const END_PROPERTY: &str = "End";
