//! Canonical JSON converters for temporal types.
//!
//! This crate converts time values to and from JSON through a pluggable
//! converter registry:
//!
//! - [`Interval`]: `{"Start": ..., "End": ...}` or `"start/end"`
//! - [`DateInterval`]: the same shapes over calendar dates
//! - [`Duration`]: `"[-]H:MM:SS[.FFFFFFF]"` in 100 ns ticks
//! - instants, local dates, times and offsets as ISO-8601 strings
//! - [`OffsetDate`] and [`OffsetTime`]: a date or time with a fixed offset
//! - [`Period`]: `"P2DT3H90M"`, units kept as given
//!
//! Every converter shares the same null rules: `null` and `""` read as an
//! absent value, which only the nullable form of a type accepts.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use giztoy_chronojson::{Duration, Interval, JsonOptions, NamingPolicy};
//!
//! let options = JsonOptions::new()
//!     .configure_for_time()
//!     .with_naming_policy(NamingPolicy::camel_case());
//!
//! let start = Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap();
//! let interval = Interval::new(Some(start), None).unwrap();
//! let json = options.serialize(&interval).unwrap();
//! assert_eq!(json, r#"{"start":"2012-01-02T03:04:05Z"}"#);
//!
//! let back: Interval = options.deserialize(&json).unwrap();
//! assert_eq!(back, interval);
//!
//! let dur: Duration = options.deserialize(r#""48:00:03.123""#).unwrap();
//! assert_eq!(dur.to_string(), "48:00:03.123");
//! ```

mod codecs;
mod converter;
pub mod converters;
mod delegating;
mod duration;
mod error;
mod interval;
mod offset;
mod options;
mod pattern;
mod period;
mod reader;
mod settings;
mod type_info;
mod writer;

pub use codecs::{
    DateIntervalCodec, DurationCodec, END_PROPERTY, IntervalCodec, IsoDateIntervalCodec,
    IsoIntervalCodec, START_PROPERTY,
};
pub use converter::{Codec, Converter, TypeDispatchConverter};
pub use delegating::DelegatingConverter;
pub use duration::{
    Duration, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
pub use error::{Error, ErrorKind, Result};
pub use interval::{DateInterval, Interval};
pub use offset::{OffsetDate, OffsetTime};
pub use options::{JsonOptions, NamingPolicy, UnknownProperties};
pub use pattern::{
    InstantPattern, LocalDatePattern, LocalDateTimePattern, LocalTimePattern, OffsetDatePattern,
    OffsetDateTimePattern, OffsetPattern, OffsetTimePattern, Pattern, PatternCodec, PeriodPattern,
    validate_rfc3339_offset,
};
pub use period::Period;
pub use reader::{JsonReader, Token, TokenKind};
pub use settings::{IntervalFormat, Naming, Settings};
pub use type_info::{JsonType, TypeInfo, TypeKind};
pub use writer::JsonWriter;
