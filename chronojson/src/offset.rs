//! Dates and times paired with a fixed UTC offset.

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use crate::type_info::{JsonType, TypeKind};

/// A calendar date observed at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDate {
    date: NaiveDate,
    offset: FixedOffset,
}

impl OffsetDate {
    pub fn new(date: NaiveDate, offset: FixedOffset) -> Self {
        Self { date, offset }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl JsonType for OffsetDate {
    const KIND: TypeKind = TypeKind::Value;
}

/// A time of day observed at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl JsonType for OffsetTime {
    const KIND: TypeKind = TypeKind::Value;
}
