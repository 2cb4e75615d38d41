//! Calendar periods in their lossless round-trip text form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::type_info::{JsonType, TypeKind};

/// A period made of independent calendar and clock units.
///
/// Units are never normalized: 90 minutes stays 90 minutes, so two periods
/// are equal only when every unit is equal.
///
/// Text form: `P[nY][nM][nW][nD][T[nH][nM][nS][ns][nt][nn]]` where the
/// lower-case `s`, `t` and `n` are milliseconds, ticks and nanoseconds. Each
/// value may be negative. Zero units are left out; the zero period is `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub ticks: i64,
    pub nanoseconds: i64,
}

impl Period {
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        ticks: 0,
        nanoseconds: 0,
    };

    pub const fn from_days(days: i32) -> Self {
        Self { days, ..Self::ZERO }
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self { hours, ..Self::ZERO }
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes,
            ..Self::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn has_time(&self) -> bool {
        self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.milliseconds != 0
            || self.ticks != 0
            || self.nanoseconds != 0
    }

    /// Parses the round-trip text form.
    pub fn parse(text: &str) -> Result<Self> {
        parse_period(text)
    }
}

impl JsonType for Period {
    const KIND: TypeKind = TypeKind::Sealed;
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;
        for (value, unit) in [
            (i64::from(self.years), 'Y'),
            (i64::from(self.months), 'M'),
            (i64::from(self.weeks), 'W'),
            (i64::from(self.days), 'D'),
        ] {
            write_unit(f, value, unit)?;
        }
        if self.has_time() {
            f.write_str("T")?;
            for (value, unit) in [
                (self.hours, 'H'),
                (self.minutes, 'M'),
                (self.seconds, 'S'),
                (self.milliseconds, 's'),
                (self.ticks, 't'),
                (self.nanoseconds, 'n'),
            ] {
                write_unit(f, value, unit)?;
            }
        }
        Ok(())
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, value: i64, unit: char) -> fmt::Result {
    if value != 0 {
        write!(f, "{}{}", value, unit)?;
    }
    Ok(())
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_period(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PeriodVisitor;

        impl<'de> serde::de::Visitor<'de> for PeriodVisitor {
            type Value = Period;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a period string (e.g., 'P2DT3H90M')")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> std::result::Result<Self::Value, E> {
                parse_period(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(PeriodVisitor)
    }
}

fn invalid(text: &str, reason: &str) -> Error {
    Error::format(format!("invalid period {:?}: {}", text, reason))
}

const DATE_UNITS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_UNITS: [char; 6] = ['H', 'M', 'S', 's', 't', 'n'];

fn parse_period(text: &str) -> Result<Period> {
    let body = text
        .strip_prefix('P')
        .ok_or_else(|| invalid(text, "must start with 'P'"))?;
    let (date_part, time_part) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };

    let [years, months, weeks, days] = parse_units(text, date_part, &DATE_UNITS)?;
    let mut period = Period {
        years: narrow(text, years)?,
        months: narrow(text, months)?,
        weeks: narrow(text, weeks)?,
        days: narrow(text, days)?,
        ..Period::ZERO
    };

    if let Some(time_part) = time_part {
        if time_part.is_empty() {
            return Err(invalid(text, "no units after 'T'"));
        }
        let [hours, minutes, seconds, milliseconds, ticks, nanoseconds] =
            parse_units(text, time_part, &TIME_UNITS)?;
        period.hours = hours;
        period.minutes = minutes;
        period.seconds = seconds;
        period.milliseconds = milliseconds;
        period.ticks = ticks;
        period.nanoseconds = nanoseconds;
    }
    Ok(period)
}

/// Reads `[-]digits unit` pairs. Units must appear in the order of `units`
/// and at most once each.
fn parse_units<const N: usize>(
    text: &str,
    part: &str,
    units: &[char; N],
) -> Result<[i64; N]> {
    let mut values = [0i64; N];
    let mut next = 0;
    let mut rest = part;
    while !rest.is_empty() {
        let sign_len = usize::from(rest.starts_with('-'));
        let digits = rest[sign_len..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(invalid(text, "expected a number"));
        }
        let number_len = sign_len + digits;
        let value: i64 = rest[..number_len]
            .parse()
            .map_err(|_| Error::range(format!("period {:?} has a value out of range", text)))?;

        let unit = rest[number_len..]
            .chars()
            .next()
            .ok_or_else(|| invalid(text, "missing unit after number"))?;
        let index = units[next..]
            .iter()
            .position(|u| *u == unit)
            .map(|i| i + next)
            .ok_or_else(|| {
                invalid(text, &format!("unit '{}' is unknown, repeated or misplaced", unit))
            })?;
        values[index] = value;
        next = index + 1;
        rest = &rest[number_len + unit.len_utf8()..];
    }
    Ok(values)
}

fn narrow(text: &str, value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| Error::range(format!("period {:?} has a value out of range", text)))
}
