//! Signed tick duration with a canonical `H:MM:SS.F` text form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::type_info::{JsonType, TypeKind};

/// Ticks in one millisecond. One tick is 100 nanoseconds.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = 1_000 * TICKS_PER_MILLISECOND;
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;

const FRACTION_DIGITS: usize = 7;

/// A signed duration counted in 100 ns ticks.
///
/// Text form: `[-]H:MM:SS[.F]` where hours are unpadded and the fraction has
/// 1 to 7 digits. Formatting is canonical: the fraction is omitted when zero
/// and never ends in `0`, so equal durations always produce equal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);
    pub const MIN: Duration = Duration(i64::MIN);
    pub const MAX: Duration = Duration(i64::MAX);

    /// Creates a Duration from a tick count.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Creates a Duration from hours, saturating at [`MIN`](Self::MIN)/[`MAX`](Self::MAX).
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(TICKS_PER_HOUR))
    }

    /// Creates a Duration from minutes, saturating.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes.saturating_mul(TICKS_PER_MINUTE))
    }

    /// Creates a Duration from seconds, saturating.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds.saturating_mul(TICKS_PER_SECOND))
    }

    /// Creates a Duration from milliseconds, saturating.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(TICKS_PER_MILLISECOND))
    }

    /// Returns the tick count.
    pub const fn ticks(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        self.0.checked_add(other.0).map(Duration)
    }

    pub fn checked_sub(self, other: Duration) -> Option<Duration> {
        self.0.checked_sub(other.0).map(Duration)
    }

    /// Parses the canonical text form; trailing fractional zeros are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        parse_duration(text)
    }
}

impl JsonType for Duration {
    const KIND: TypeKind = TypeKind::Value;
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let hours = magnitude / TICKS_PER_HOUR as u64;
        let minutes = (magnitude / TICKS_PER_MINUTE as u64) % 60;
        let seconds = (magnitude / TICKS_PER_SECOND as u64) % 60;
        let ticks = magnitude % TICKS_PER_SECOND as u64;

        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)?;
        if ticks != 0 {
            let digits = format!("{:0width$}", ticks, width = FRACTION_DIGITS);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DurationVisitor;

        impl<'de> serde::de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string (e.g., '-25:10:00.1234')")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> std::result::Result<Self::Value, E> {
                parse_duration(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

impl From<Duration> for chrono::TimeDelta {
    fn from(d: Duration) -> Self {
        let secs = d.0.div_euclid(TICKS_PER_SECOND);
        let nanos = d.0.rem_euclid(TICKS_PER_SECOND) * 100;
        chrono::TimeDelta::seconds(secs) + chrono::TimeDelta::nanoseconds(nanos)
    }
}

impl TryFrom<chrono::TimeDelta> for Duration {
    type Error = Error;

    /// Sub-tick nanoseconds are truncated toward zero.
    fn try_from(d: chrono::TimeDelta) -> Result<Self> {
        let secs = d.num_seconds();
        let sub_ticks = i64::from(d.subsec_nanos()) / 100;
        secs.checked_mul(TICKS_PER_SECOND)
            .and_then(|t| t.checked_add(sub_ticks))
            .map(Duration)
            .ok_or_else(|| Error::range(format!("{} does not fit in 64-bit ticks", d)))
    }
}

fn invalid(text: &str, reason: &str) -> Error {
    Error::format(format!("invalid duration {:?}: {}", text, reason))
}

fn overflow(text: &str) -> Error {
    Error::range(format!("duration {:?} does not fit in 64-bit ticks", text))
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a fixed two-digit field in `0..=59`.
fn two_digit_field(text: &str, field: &str, name: &str) -> Result<i128> {
    if field.len() != 2 || !all_digits(field) {
        return Err(invalid(text, &format!("{} must be exactly two digits", name)));
    }
    let value = field
        .bytes()
        .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'));
    if value > 59 {
        return Err(invalid(text, &format!("{} must be between 00 and 59", name)));
    }
    Ok(value)
}

/// Parses `[-]H+:MM:SS[.F{1,7}]` using integer arithmetic only.
fn parse_duration(text: &str) -> Result<Duration> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = rest.splitn(3, ':');
    let hours = parts.next().unwrap_or_default();
    let minutes = parts
        .next()
        .ok_or_else(|| invalid(text, "missing ':' after hours"))?;
    let tail = parts
        .next()
        .ok_or_else(|| invalid(text, "missing ':' after minutes"))?;
    let (seconds, fraction) = match tail.split_once('.') {
        Some((seconds, fraction)) => (seconds, Some(fraction)),
        None => (tail, None),
    };

    if hours.is_empty() || !all_digits(hours) {
        return Err(invalid(text, "hours must be one or more digits"));
    }
    let minutes = two_digit_field(text, minutes, "minutes")?;
    let seconds = two_digit_field(text, seconds, "seconds")?;

    let mut total: i128 = 0;
    for b in hours.bytes() {
        total = total
            .checked_mul(10)
            .and_then(|t| t.checked_add(i128::from(b - b'0')))
            .ok_or_else(|| overflow(text))?;
    }

    let mut sub_ticks: i128 = 0;
    if let Some(fraction) = fraction {
        if fraction.is_empty() || fraction.len() > FRACTION_DIGITS || !all_digits(fraction) {
            return Err(invalid(text, "fraction must be 1 to 7 digits"));
        }
        for b in fraction.bytes() {
            sub_ticks = sub_ticks * 10 + i128::from(b - b'0');
        }
        sub_ticks *= 10i128.pow((FRACTION_DIGITS - fraction.len()) as u32);
    }

    let magnitude = total
        .checked_mul(60)
        .and_then(|t| t.checked_add(minutes))
        .and_then(|t| t.checked_mul(60))
        .and_then(|t| t.checked_add(seconds))
        .and_then(|t| t.checked_mul(i128::from(TICKS_PER_SECOND)))
        .and_then(|t| t.checked_add(sub_ticks))
        .ok_or_else(|| overflow(text))?;
    let signed = if negative { -magnitude } else { magnitude };

    i64::try_from(signed)
        .map(Duration)
        .map_err(|_| overflow(text))
}
