//! Instant intervals and date intervals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::codecs::iso;
use crate::error::{Error, Result};
use crate::type_info::{JsonType, TypeKind};

/// A span between two instants; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Interval {
    /// Creates an interval. Fails with a range error when both bounds are
    /// present and `start` is after `end`.
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(Error::range(format!(
                    "interval start {} is after end {}",
                    s, e
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// The interval unbounded on both sides.
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }
}

impl JsonType for Interval {
    const KIND: TypeKind = TypeKind::Value;
}

/// ISO-8601 `start/end`; an unbounded side is empty.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&iso::format_interval(self))
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        iso::parse_interval(s)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&iso::format_interval(self))
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IntervalVisitor;

        impl<'de> serde::de::Visitor<'de> for IntervalVisitor {
            type Value = Interval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO-8601 interval string (e.g., '2012-01-02T03:04:05Z/')")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> std::result::Result<Self::Value, E> {
                iso::parse_interval(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(IntervalVisitor)
    }
}

/// An inclusive span between two calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates a date interval. Fails with a range error when `start` is
    /// after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::range(format!(
                "date interval start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl JsonType for DateInterval {
    const KIND: TypeKind = TypeKind::Sealed;
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&iso::format_date_interval(self))
    }
}

impl FromStr for DateInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        iso::parse_date_interval(s)
    }
}

impl Serialize for DateInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&iso::format_date_interval(self))
    }
}

impl<'de> Deserialize<'de> for DateInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DateIntervalVisitor;

        impl<'de> serde::de::Visitor<'de> for DateIntervalVisitor {
            type Value = DateInterval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("an ISO-8601 date interval string (e.g., '2012-01-02/2013-06-07')")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> std::result::Result<Self::Value, E> {
                iso::parse_date_interval(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateIntervalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    #[test]
    fn test_interval_rejects_inverted_bounds() {
        let a = Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap();
        let b = Utc.with_ymd_and_hms(2013, 6, 7, 8, 9, 10).unwrap();
        assert!(Interval::new(Some(a), Some(b)).is_ok());
        assert!(Interval::new(Some(a), Some(a)).is_ok());
        let err = Interval::new(Some(b), Some(a)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_interval_bounds() {
        let a = Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap();
        let interval = Interval::new(Some(a), None).unwrap();
        assert!(interval.has_start());
        assert!(!interval.has_end());
        assert_eq!(interval.start(), Some(a));
        assert_eq!(Interval::unbounded(), Interval::default());
    }

    #[test]
    fn test_date_interval_rejects_inverted_bounds() {
        let a = NaiveDate::from_ymd_opt(2012, 1, 2).unwrap();
        let b = NaiveDate::from_ymd_opt(2013, 6, 7).unwrap();
        let interval = DateInterval::new(a, b).unwrap();
        assert_eq!((interval.start(), interval.end()), (a, b));
        assert_eq!(DateInterval::new(b, a).unwrap_err().kind(), ErrorKind::Range);
    }
}
