//! Ready-made converters for every supported temporal type.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::codecs::{
    DateIntervalCodec, DurationCodec, IntervalCodec, IsoDateIntervalCodec, IsoIntervalCodec,
};
use crate::converter::TypeDispatchConverter;
use crate::offset::{OffsetDate, OffsetTime};
use crate::pattern::{
    InstantPattern, LocalDatePattern, LocalDateTimePattern, LocalTimePattern,
    OffsetDatePattern, OffsetDateTimePattern, OffsetPattern, OffsetTimePattern, PatternCodec,
    PeriodPattern, validate_rfc3339_offset,
};
use crate::period::Period;

pub type InstantConverter = TypeDispatchConverter<PatternCodec<DateTime<Utc>>>;
pub type LocalDateConverter = TypeDispatchConverter<PatternCodec<NaiveDate>>;
pub type LocalDateTimeConverter = TypeDispatchConverter<PatternCodec<NaiveDateTime>>;
pub type LocalTimeConverter = TypeDispatchConverter<PatternCodec<NaiveTime>>;
pub type OffsetConverter = TypeDispatchConverter<PatternCodec<FixedOffset>>;
pub type OffsetDateTimeConverter = TypeDispatchConverter<PatternCodec<DateTime<FixedOffset>>>;
pub type OffsetDateConverter = TypeDispatchConverter<PatternCodec<OffsetDate>>;
pub type OffsetTimeConverter = TypeDispatchConverter<PatternCodec<OffsetTime>>;
pub type PeriodConverter = TypeDispatchConverter<PatternCodec<Period>>;
pub type IntervalConverter = TypeDispatchConverter<IntervalCodec>;
pub type DateIntervalConverter = TypeDispatchConverter<DateIntervalCodec>;
pub type IsoIntervalConverter = TypeDispatchConverter<IsoIntervalCodec>;
pub type IsoDateIntervalConverter = TypeDispatchConverter<IsoDateIntervalCodec>;
pub type DurationConverter = TypeDispatchConverter<DurationCodec>;

/// `2012-01-02T03:04:05.67Z`.
pub fn instant() -> InstantConverter {
    TypeDispatchConverter::new(PatternCodec::new(InstantPattern::extended_iso()))
}

/// `2012-01-02`.
pub fn local_date() -> LocalDateConverter {
    TypeDispatchConverter::new(PatternCodec::new(LocalDatePattern::iso()))
}

/// `2012-01-02T03:04:05.67`.
pub fn local_date_time() -> LocalDateTimeConverter {
    TypeDispatchConverter::new(PatternCodec::new(LocalDateTimePattern::extended_iso()))
}

/// `03:04:05.67`.
pub fn local_time() -> LocalTimeConverter {
    TypeDispatchConverter::new(PatternCodec::new(LocalTimePattern::extended_iso()))
}

/// `+05`, `+05:30`, `-01:02:03`.
pub fn offset() -> OffsetConverter {
    TypeDispatchConverter::new(PatternCodec::new(OffsetPattern::general()))
}

/// `2012-01-02T03:04:05.67+05:30`. Offsets with a seconds component cannot be
/// written.
pub fn offset_date_time() -> OffsetDateTimeConverter {
    TypeDispatchConverter::new(
        PatternCodec::new(OffsetDateTimePattern::rfc3339()).with_validator(validate_rfc3339_offset),
    )
}

/// `2012-01-02-01:30`, `2012-01-02Z`.
pub fn offset_date() -> OffsetDateConverter {
    TypeDispatchConverter::new(PatternCodec::new(OffsetDatePattern::general_iso()))
}

/// `03:04:05.123456789-01:30`.
pub fn offset_time() -> OffsetTimeConverter {
    TypeDispatchConverter::new(PatternCodec::new(OffsetTimePattern::extended_iso()))
}

/// `P2DT3H90M`, units kept exactly as given.
pub fn period() -> PeriodConverter {
    TypeDispatchConverter::new(PatternCodec::new(PeriodPattern::roundtrip()))
}

/// `{"Start": ..., "End": ...}` with optional sides.
pub fn interval() -> IntervalConverter {
    TypeDispatchConverter::new(IntervalCodec)
}

/// `{"Start": ..., "End": ...}` with mandatory sides.
pub fn date_interval() -> DateIntervalConverter {
    TypeDispatchConverter::new(DateIntervalCodec)
}

/// `"start/end"` with optional sides.
pub fn iso_interval() -> IsoIntervalConverter {
    TypeDispatchConverter::new(IsoIntervalCodec)
}

/// `"start/end"` with mandatory sides.
pub fn iso_date_interval() -> IsoDateIntervalConverter {
    TypeDispatchConverter::new(IsoDateIntervalCodec)
}

/// `"[-]H:MM:SS[.FFFFFFF]"`.
pub fn duration() -> DurationConverter {
    TypeDispatchConverter::new(DurationCodec)
}
