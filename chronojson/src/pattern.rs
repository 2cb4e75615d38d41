//! Text patterns for scalar temporal values and the codec that adapts them.
//!
//! Fractional seconds are written with `.` and without trailing zeros; the
//! fraction is left out entirely when it is zero. Parsers accept `.` or `,`.

use std::fmt;
use std::sync::Arc;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};

use crate::converter::Codec;
use crate::error::{Error, Result};
use crate::offset::{OffsetDate, OffsetTime};
use crate::options::JsonOptions;
use crate::period::Period;
use crate::reader::{JsonReader, Token};
use crate::type_info::JsonType;
use crate::writer::JsonWriter;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

const DATE_SHAPE: &str = "9999-99-99";
const TIME_SHAPE: &str = "99:99:99";
const DATE_TIME_SHAPE: &str = "9999-99-99T99:99:99";

/// Parses and formats one scalar value type.
pub trait Pattern<T>: Send + Sync {
    fn parse(&self, text: &str) -> Result<T>;

    fn format(&self, value: &T) -> String;
}

/// `uuuu-MM-ddTHH:mm:ss[.FFFFFFFFF]Z`, e.g. `2012-01-02T03:04:05.67Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPattern;

impl InstantPattern {
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<DateTime<Utc>> for InstantPattern {
    fn parse(&self, text: &str) -> Result<DateTime<Utc>> {
        let body = text
            .strip_suffix('Z')
            .ok_or_else(|| invalid("Instant", text, "expected a trailing 'Z'"))?;
        Ok(parse_local_date_time(body, "Instant")?.and_utc())
    }

    fn format(&self, value: &DateTime<Utc>) -> String {
        let mut out = format_local_date_time(&value.naive_utc());
        out.push('Z');
        out
    }
}

/// `uuuu-MM-dd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDatePattern;

impl LocalDatePattern {
    pub fn iso() -> Self {
        Self
    }
}

impl Pattern<NaiveDate> for LocalDatePattern {
    fn parse(&self, text: &str) -> Result<NaiveDate> {
        parse_date(text, "LocalDate")
    }

    fn format(&self, value: &NaiveDate) -> String {
        value.format("%Y-%m-%d").to_string()
    }
}

/// `uuuu-MM-ddTHH:mm:ss[.FFFFFFFFF]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimePattern;

impl LocalDateTimePattern {
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<NaiveDateTime> for LocalDateTimePattern {
    fn parse(&self, text: &str) -> Result<NaiveDateTime> {
        parse_local_date_time(text, "LocalDateTime")
    }

    fn format(&self, value: &NaiveDateTime) -> String {
        format_local_date_time(value)
    }
}

/// `HH:mm:ss[.FFFFFFFFF]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimePattern;

impl LocalTimePattern {
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<NaiveTime> for LocalTimePattern {
    fn parse(&self, text: &str) -> Result<NaiveTime> {
        parse_time(text, "LocalTime")
    }

    fn format(&self, value: &NaiveTime) -> String {
        format_time(value)
    }
}

/// `+HH`, `+HH:mm` or `+HH:mm:ss`, using the shortest form that is exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetPattern;

impl OffsetPattern {
    pub fn general() -> Self {
        Self
    }
}

impl Pattern<FixedOffset> for OffsetPattern {
    fn parse(&self, text: &str) -> Result<FixedOffset> {
        parse_offset(text, "Offset")
    }

    fn format(&self, value: &FixedOffset) -> String {
        let mut out = String::with_capacity(9);
        push_offset(&mut out, value.local_minus_utc(), false);
        out
    }
}

/// `uuuu-MM-dd` followed by a general offset, e.g. `2012-01-02-01:30`.
/// A zero offset is written as `Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetDatePattern;

impl OffsetDatePattern {
    pub fn general_iso() -> Self {
        Self
    }
}

impl Pattern<OffsetDate> for OffsetDatePattern {
    fn parse(&self, text: &str) -> Result<OffsetDate> {
        let split = DATE_SHAPE.len();
        if !text.is_char_boundary(split) || text.len() <= split {
            return Err(invalid("OffsetDate", text, "expected uuuu-MM-dd and an offset"));
        }
        let date = parse_date(&text[..split], "OffsetDate")?;
        let offset = parse_offset(&text[split..], "OffsetDate")?;
        Ok(OffsetDate::new(date, offset))
    }

    fn format(&self, value: &OffsetDate) -> String {
        let mut out = value.date().format("%Y-%m-%d").to_string();
        push_offset(&mut out, value.offset().local_minus_utc(), true);
        out
    }
}

/// `HH:mm:ss[.FFFFFFFFF]` followed by a general offset, e.g.
/// `03:04:05.123456789-01:30`. A zero offset is written as `Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetTimePattern;

impl OffsetTimePattern {
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<OffsetTime> for OffsetTimePattern {
    fn parse(&self, text: &str) -> Result<OffsetTime> {
        let split = text
            .find(['+', '-', 'Z'])
            .ok_or_else(|| invalid("OffsetTime", text, "missing offset"))?;
        let time = parse_time(&text[..split], "OffsetTime")?;
        let offset = parse_offset(&text[split..], "OffsetTime")?;
        Ok(OffsetTime::new(time, offset))
    }

    fn format(&self, value: &OffsetTime) -> String {
        let mut out = format_time(&value.time());
        push_offset(&mut out, value.offset().local_minus_utc(), true);
        out
    }
}

/// The lossless round-trip period form, e.g. `P2DT3H90M`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodPattern;

impl PeriodPattern {
    pub fn roundtrip() -> Self {
        Self
    }
}

impl Pattern<Period> for PeriodPattern {
    fn parse(&self, text: &str) -> Result<Period> {
        Period::parse(text)
    }

    fn format(&self, value: &Period) -> String {
        value.to_string()
    }
}

/// RFC 3339: `uuuu-MM-ddTHH:mm:ss[.FFFFFFFFF](Z|+HH:mm)`.
///
/// Offsets with a seconds component cannot be written; see
/// [`validate_rfc3339_offset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetDateTimePattern;

impl OffsetDateTimePattern {
    pub fn rfc3339() -> Self {
        Self
    }
}

impl Pattern<DateTime<FixedOffset>> for OffsetDateTimePattern {
    fn parse(&self, text: &str) -> Result<DateTime<FixedOffset>> {
        let (local, offset) = match text.strip_suffix('Z') {
            Some(local) => (local, FixedOffset::east_opt(0)),
            None => {
                let time_start = text
                    .find('T')
                    .ok_or_else(|| invalid("OffsetDateTime", text, "missing 'T'"))?;
                let sign = text[time_start..]
                    .rfind(['+', '-'])
                    .map(|i| i + time_start)
                    .ok_or_else(|| invalid("OffsetDateTime", text, "missing offset"))?;
                let offset = parse_offset(&text[sign..], "OffsetDateTime")?;
                (&text[..sign], Some(offset))
            }
        };
        let offset = offset.ok_or_else(|| Error::range("offset out of range"))?;
        let local = parse_local_date_time(local, "OffsetDateTime")?;
        offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| Error::range(format!("{:?} is not representable", text)))
    }

    fn format(&self, value: &DateTime<FixedOffset>) -> String {
        let mut out = format_local_date_time(&value.naive_local());
        let total = value.offset().local_minus_utc();
        if total == 0 {
            out.push('Z');
        } else {
            let sign = if total < 0 { '-' } else { '+' };
            let abs = total.unsigned_abs();
            out.push_str(&format!("{sign}{:02}:{:02}", abs / 3600, (abs / 60) % 60));
        }
        out
    }
}

/// Rejects offsets that RFC 3339 text cannot carry exactly.
pub fn validate_rfc3339_offset(value: &DateTime<FixedOffset>) -> Result<()> {
    if value.offset().local_minus_utc() % 60 != 0 {
        return Err(Error::range(format!(
            "offset {} has a seconds component",
            value.offset()
        )));
    }
    Ok(())
}

type Validator<T> = Arc<dyn Fn(&T) -> Result<()> + Send + Sync>;

/// Reads and writes a value as a single JSON string through a [`Pattern`].
pub struct PatternCodec<T> {
    pattern: Arc<dyn Pattern<T>>,
    validator: Option<Validator<T>>,
}

impl<T: JsonType> PatternCodec<T> {
    pub fn new(pattern: impl Pattern<T> + 'static) -> Self {
        Self {
            pattern: Arc::new(pattern),
            validator: None,
        }
    }

    /// Runs `validator` before every write; an error aborts the write.
    pub fn with_validator(
        mut self,
        validator: impl Fn(&T) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl<T> Clone for PatternCodec<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: Arc::clone(&self.pattern),
            validator: self.validator.clone(),
        }
    }
}

impl<T: JsonType> fmt::Debug for PatternCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCodec")
            .field("type", &T::type_name())
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

impl<T: JsonType + Send + Sync> Codec for PatternCodec<T> {
    type Value = T;

    fn decode(&self, reader: &mut JsonReader, _options: &JsonOptions) -> Result<T> {
        match reader.read()? {
            Token::String(text) => self.pattern.parse(&text),
            other => Err(Error::format(format!(
                "unexpected token parsing {}, expected String, got {}",
                T::type_name(),
                other.kind()
            ))),
        }
    }

    fn encode(&self, writer: &mut JsonWriter, value: &T, _options: &JsonOptions) -> Result<()> {
        if let Some(validator) = &self.validator {
            validator(value)?;
        }
        writer.write_string(&self.pattern.format(value))
    }
}

fn invalid(type_name: &str, text: &str, reason: &str) -> Error {
    Error::format(format!("invalid {} {:?}: {}", type_name, text, reason))
}

/// Requires `text` to match `shape` byte for byte, where `9` stands for any
/// ASCII digit. Chrono's numeric specifiers accept unpadded fields on their
/// own, so this fixes every field width first.
fn check_shape(text: &str, shape: &str, type_name: &str) -> Result<()> {
    let fits = text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(t, s)| match s {
            b'9' => t.is_ascii_digit(),
            _ => t == s,
        });
    if !fits {
        let expected = match shape {
            DATE_SHAPE => "uuuu-MM-dd",
            TIME_SHAPE => "HH:mm:ss",
            _ => "uuuu-MM-ddTHH:mm:ss",
        };
        return Err(invalid(type_name, text, &format!("expected {}", expected)));
    }
    Ok(())
}

/// Applies a parsed fraction while keeping a leap second that chrono
/// already folded into the nanosecond field (`:60` parses as `:59` plus one
/// second of nanoseconds).
fn with_fraction<T: Timelike>(value: T, nanos: u32, text: &str) -> Result<T> {
    let leap = value.nanosecond() / NANOS_PER_SECOND * NANOS_PER_SECOND;
    value
        .with_nanosecond(leap + nanos)
        .ok_or_else(|| Error::range(format!("nanoseconds out of range in {:?}", text)))
}

/// Splits `ss[.fff]` into the text before the fraction and the fraction in
/// nanoseconds. At most nine fractional digits are accepted.
fn split_fraction<'a>(text: &'a str, type_name: &str) -> Result<(&'a str, u32)> {
    let Some(sep) = text.find(['.', ',']) else {
        return Ok((text, 0));
    };
    let digits = &text[sep + 1..];
    if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            type_name,
            text,
            "fractional seconds must be 1 to 9 digits",
        ));
    }
    let mut nanos = 0u32;
    for b in digits.bytes() {
        nanos = nanos * 10 + u32::from(b - b'0');
    }
    for _ in digits.len()..9 {
        nanos *= 10;
    }
    Ok((&text[..sep], nanos))
}

fn push_fraction(out: &mut String, nanos: u32) {
    let nanos = nanos % NANOS_PER_SECOND;
    if nanos == 0 {
        return;
    }
    let digits = format!("{:09}", nanos);
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

fn parse_date(text: &str, type_name: &str) -> Result<NaiveDate> {
    check_shape(text, DATE_SHAPE, type_name)?;
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)
}

fn parse_time(text: &str, type_name: &str) -> Result<NaiveTime> {
    let (base, nanos) = split_fraction(text, type_name)?;
    check_shape(base, TIME_SHAPE, type_name)?;
    let time = NaiveTime::parse_from_str(base, "%H:%M:%S")?;
    with_fraction(time, nanos, text)
}

fn format_time(value: &NaiveTime) -> String {
    let mut out = value.format("%H:%M:%S").to_string();
    push_fraction(&mut out, value.nanosecond());
    out
}

fn parse_local_date_time(text: &str, type_name: &str) -> Result<NaiveDateTime> {
    let (base, nanos) = split_fraction(text, type_name)?;
    check_shape(base, DATE_TIME_SHAPE, type_name)?;
    let local = NaiveDateTime::parse_from_str(base, "%Y-%m-%dT%H:%M:%S")?;
    with_fraction(local, nanos, text)
}

fn format_local_date_time(value: &NaiveDateTime) -> String {
    let mut out = value.format("%Y-%m-%dT%H:%M:%S").to_string();
    push_fraction(&mut out, value.nanosecond());
    out
}

/// Writes `+HH`, `+HH:mm` or `+HH:mm:ss`, whichever is shortest and exact.
fn push_offset(out: &mut String, total: i32, zero_as_z: bool) {
    if total == 0 && zero_as_z {
        out.push('Z');
        return;
    }
    let sign = if total < 0 { '-' } else { '+' };
    let abs = total.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, (abs / 60) % 60, abs % 60);
    if seconds != 0 {
        out.push_str(&format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"));
    } else if minutes != 0 {
        out.push_str(&format!("{sign}{hours:02}:{minutes:02}"));
    } else {
        out.push_str(&format!("{sign}{hours:02}"));
    }
}

fn parse_offset(text: &str, type_name: &str) -> Result<FixedOffset> {
    if text == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(|| Error::range("offset out of range"));
    }
    let sign = match text.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(invalid(type_name, text, "offset must start with '+' or '-'")),
    };
    let mut seconds = 0i32;
    let mut fields = 0;
    for (i, part) in text[1..].split(':').enumerate() {
        if i > 2 || part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(type_name, text, "offset must be HH[:mm[:ss]]"));
        }
        let value: i32 = part
            .parse()
            .map_err(|_| invalid(type_name, text, "offset must be HH[:mm[:ss]]"))?;
        if i > 0 && value > 59 {
            return Err(invalid(type_name, text, "offset field out of range"));
        }
        seconds += value * [3600, 60, 1][i];
        fields += 1;
    }
    if fields == 0 {
        return Err(invalid(type_name, text, "offset must be HH[:mm[:ss]]"));
    }
    FixedOffset::east_opt(sign * seconds)
        .ok_or_else(|| Error::range(format!("offset {:?} out of range", text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, nanos)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_instant_format() {
        let p = InstantPattern::extended_iso();
        assert_eq!(p.format(&utc(2012, 1, 2, 3, 4, 5, 0)), "2012-01-02T03:04:05Z");
        assert_eq!(
            p.format(&utc(2012, 1, 2, 3, 4, 5, 670_000_000)),
            "2012-01-02T03:04:05.67Z"
        );
        assert_eq!(
            p.format(&utc(2013, 6, 7, 8, 9, 10, 123_456_789)),
            "2013-06-07T08:09:10.123456789Z"
        );
    }

    #[test]
    fn test_instant_parse_separators() {
        let p = InstantPattern::extended_iso();
        let dot = p.parse("2013-06-07T08:09:10.1234567Z").unwrap();
        let comma = p.parse("2013-06-07T08:09:10,1234567Z").unwrap();
        assert_eq!(dot, comma);
        assert_eq!(dot, utc(2013, 6, 7, 8, 9, 10, 123_456_700));
    }

    #[test]
    fn test_instant_parse_errors() {
        let p = InstantPattern::extended_iso();
        assert!(p.parse("2013-06-07T08:09:10").is_err());
        assert!(p.parse("2013-06-07T08:09:10.Z").is_err());
        assert!(p.parse("2013-06-07T08:09:10.1234567891Z").is_err());
        assert!(p.parse("2013-13-07T08:09:10Z").is_err());
    }

    #[test]
    fn test_local_date() {
        let p = LocalDatePattern::iso();
        let date = NaiveDate::from_ymd_opt(2012, 1, 2).unwrap();
        assert_eq!(p.format(&date), "2012-01-02");
        assert_eq!(p.parse("2012-01-02").unwrap(), date);
        assert!(p.parse("2012-01-02T00:00:00").is_err());
    }

    #[test]
    fn test_local_date_time_and_time() {
        let dt = utc(2012, 1, 2, 3, 4, 5, 123_456_789).naive_utc();
        let p = LocalDateTimePattern::extended_iso();
        assert_eq!(p.format(&dt), "2012-01-02T03:04:05.123456789");
        assert_eq!(p.parse("2012-01-02T03:04:05.123456789").unwrap(), dt);

        let t = NaiveTime::from_hms_nano_opt(1, 2, 3, 4_000_567).unwrap();
        let p = LocalTimePattern::extended_iso();
        assert_eq!(p.format(&t), "01:02:03.004000567");
        assert_eq!(p.parse("01:02:03.004000567").unwrap(), t);
    }

    #[test]
    fn test_offset() {
        let p = OffsetPattern::general();
        let cases = [
            (5 * 3600 + 30 * 60, "+05:30"),
            (5 * 3600, "+05"),
            (-(90 * 60), "-01:30"),
            (0, "+00"),
        ];
        for (secs, text) in cases {
            let offset = FixedOffset::east_opt(secs).unwrap();
            assert_eq!(p.format(&offset), text);
            assert_eq!(p.parse(text).unwrap(), offset);
        }
        assert!(p.parse("05:30").is_err());
        assert!(p.parse("+05:60").is_err());
    }

    #[test]
    fn test_offset_date_time() {
        let p = OffsetDateTimePattern::rfc3339();
        let local = utc(2012, 1, 2, 3, 4, 5, 123_456_789).naive_utc();
        let cases = [
            (-(90 * 60), "2012-01-02T03:04:05.123456789-01:30"),
            (5 * 3600, "2012-01-02T03:04:05.123456789+05:00"),
            (0, "2012-01-02T03:04:05.123456789Z"),
        ];
        for (secs, text) in cases {
            let offset = FixedOffset::east_opt(secs).unwrap();
            let value = offset.from_local_datetime(&local).single().unwrap();
            assert_eq!(p.format(&value), text);
            assert_eq!(p.parse(text).unwrap(), value);
        }
    }

    #[test]
    fn test_unpadded_fields_rejected() {
        let instant = InstantPattern::extended_iso();
        for text in [
            "2012-01-02T3:4:5Z",
            "2012-1-2T03:04:05Z",
            "12-01-02T03:04:05Z",
            "2012-01-02T03:04:005Z",
        ] {
            let err = instant.parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{:?}", text);
        }
        assert!(LocalDatePattern::iso().parse("2012-1-2").is_err());
        assert!(LocalDatePattern::iso().parse("+2012-01-02").is_err());
        assert!(LocalTimePattern::extended_iso().parse("1:02:03").is_err());
        assert!(LocalTimePattern::extended_iso().parse("01:2:03.5").is_err());
        assert!(LocalDateTimePattern::extended_iso().parse("2012-01-02T03:04:5").is_err());
    }

    #[test]
    fn test_leap_second_round_trip() {
        let p = InstantPattern::extended_iso();
        let leap = utc(2016, 12, 31, 23, 59, 59, 1_500_000_000);
        assert_eq!(p.format(&leap), "2016-12-31T23:59:60.5Z");
        assert_eq!(p.parse("2016-12-31T23:59:60.5Z").unwrap(), leap);

        let whole = utc(2016, 12, 31, 23, 59, 59, 1_000_000_000);
        assert_eq!(p.format(&whole), "2016-12-31T23:59:60Z");
        assert_eq!(p.parse("2016-12-31T23:59:60Z").unwrap(), whole);

        let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_250_000_000).unwrap();
        let p = LocalTimePattern::extended_iso();
        assert_eq!(p.format(&t), "23:59:60.25");
        assert_eq!(p.parse("23:59:60.25").unwrap(), t);
    }

    #[test]
    fn test_offset_date() {
        let p = OffsetDatePattern::general_iso();
        let date = NaiveDate::from_ymd_opt(2012, 1, 2).unwrap();
        let cases = [
            (-(90 * 60), "2012-01-02-01:30"),
            (5 * 3600, "2012-01-02+05"),
            (0, "2012-01-02Z"),
        ];
        for (secs, text) in cases {
            let value = OffsetDate::new(date, FixedOffset::east_opt(secs).unwrap());
            assert_eq!(p.format(&value), text);
            assert_eq!(p.parse(text).unwrap(), value);
        }
        assert!(p.parse("2012-01-02").is_err());
        assert!(p.parse("2012-1-2-01:30").is_err());
        assert!(p.parse("2012-01-02 01:30").is_err());
    }

    #[test]
    fn test_offset_time() {
        let p = OffsetTimePattern::extended_iso();
        let time = NaiveTime::from_hms_nano_opt(3, 4, 5, 123_456_789).unwrap();
        let cases = [
            (-(90 * 60), "03:04:05.123456789-01:30"),
            (5 * 3600 + 30 * 60, "03:04:05.123456789+05:30"),
            (0, "03:04:05.123456789Z"),
        ];
        for (secs, text) in cases {
            let value = OffsetTime::new(time, FixedOffset::east_opt(secs).unwrap());
            assert_eq!(p.format(&value), text);
            assert_eq!(p.parse(text).unwrap(), value);
        }
        assert!(p.parse("03:04:05").is_err());
        assert!(p.parse("3:04:05Z").is_err());
    }

    #[test]
    fn test_period_pattern() {
        let p = PeriodPattern::roundtrip();
        let value = Period {
            days: 2,
            hours: 3,
            minutes: 90,
            ..Period::ZERO
        };
        assert_eq!(p.format(&value), "P2DT3H90M");
        assert_eq!(p.parse("P2DT3H90M").unwrap(), value);
    }

    #[test]
    fn test_rfc3339_offset_validator() {
        let offset = FixedOffset::east_opt(30).unwrap();
        let value = offset
            .from_local_datetime(&utc(2012, 1, 2, 3, 4, 5, 0).naive_utc())
            .single()
            .unwrap();
        let err = validate_rfc3339_offset(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
