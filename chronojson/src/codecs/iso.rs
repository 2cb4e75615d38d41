//! Compact ISO-8601 `start/end` string forms.

use crate::converter::Codec;
use crate::error::{Error, Result};
use crate::interval::{DateInterval, Interval};
use crate::options::JsonOptions;
use crate::pattern::{InstantPattern, LocalDatePattern, Pattern};
use crate::reader::{JsonReader, Token};
use crate::writer::JsonWriter;

/// Reads and writes [`Interval`] as `"<start>/<end>"`, either side empty
/// when unbounded. A fully unbounded interval is `"/"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoIntervalCodec;

impl Codec for IsoIntervalCodec {
    type Value = Interval;

    fn decode(&self, reader: &mut JsonReader, _options: &JsonOptions) -> Result<Interval> {
        match reader.read()? {
            Token::String(text) => parse_interval(&text),
            other => Err(Error::format(format!(
                "unexpected token parsing Interval, expected String, got {}",
                other.kind()
            ))),
        }
    }

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &Interval,
        _options: &JsonOptions,
    ) -> Result<()> {
        writer.write_string(&format_interval(value))
    }
}

/// Reads and writes [`DateInterval`] as `"<start>/<end>"`; both sides are
/// mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateIntervalCodec;

impl Codec for IsoDateIntervalCodec {
    type Value = DateInterval;

    fn decode(&self, reader: &mut JsonReader, _options: &JsonOptions) -> Result<DateInterval> {
        match reader.read()? {
            Token::String(text) => parse_date_interval(&text),
            other => Err(Error::format(format!(
                "unexpected token parsing DateInterval, expected String, got {}",
                other.kind()
            ))),
        }
    }

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &DateInterval,
        _options: &JsonOptions,
    ) -> Result<()> {
        writer.write_string(&format_date_interval(value))
    }
}

pub(crate) fn parse_interval(text: &str) -> Result<Interval> {
    let (start, end) = text.split_once('/').ok_or_else(|| {
        Error::format("expected ISO-8601-formatted interval; slash was missing")
    })?;
    let pattern = InstantPattern::extended_iso();
    let start = if start.is_empty() {
        None
    } else {
        Some(pattern.parse(start)?)
    };
    let end = if end.is_empty() {
        None
    } else {
        Some(pattern.parse(end)?)
    };
    Interval::new(start, end)
}

pub(crate) fn format_interval(value: &Interval) -> String {
    let pattern = InstantPattern::extended_iso();
    let mut out = String::new();
    if let Some(start) = value.start() {
        out.push_str(&pattern.format(&start));
    }
    out.push('/');
    if let Some(end) = value.end() {
        out.push_str(&pattern.format(&end));
    }
    out
}

pub(crate) fn parse_date_interval(text: &str) -> Result<DateInterval> {
    let (start, end) = text.split_once('/').ok_or_else(|| {
        Error::format("expected ISO-8601-formatted date interval; slash was missing")
    })?;
    if start.is_empty() {
        return Err(Error::format(
            "expected ISO-8601-formatted date interval; start date was missing",
        ));
    }
    if end.is_empty() {
        return Err(Error::format(
            "expected ISO-8601-formatted date interval; end date was missing",
        ));
    }
    let pattern = LocalDatePattern::iso();
    DateInterval::new(pattern.parse(start)?, pattern.parse(end)?)
}

pub(crate) fn format_date_interval(value: &DateInterval) -> String {
    let pattern = LocalDatePattern::iso();
    format!(
        "{}/{}",
        pattern.format(&value.start()),
        pattern.format(&value.end())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_format_interval_sides() {
        let a = Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap();
        let b = Utc.with_ymd_and_hms(2013, 6, 7, 8, 9, 10).unwrap();
        let cases = [
            (Some(a), Some(b), "2012-01-02T03:04:05Z/2013-06-07T08:09:10Z"),
            (Some(a), None, "2012-01-02T03:04:05Z/"),
            (None, Some(b), "/2013-06-07T08:09:10Z"),
            (None, None, "/"),
        ];
        for (start, end, text) in cases {
            let interval = Interval::new(start, end).unwrap();
            assert_eq!(format_interval(&interval), text);
            assert_eq!(parse_interval(text).unwrap(), interval);
        }
    }

    #[test]
    fn test_parse_interval_errors() {
        let err = parse_interval("2012-01-02T03:04:05Z").unwrap_err();
        assert!(err.to_string().contains("slash was missing"));
        let err = parse_interval("2013-06-07T08:09:10Z/2012-01-02T03:04:05Z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_date_interval_requires_both_sides() {
        let value = parse_date_interval("2012-01-02/2013-06-07").unwrap();
        assert_eq!(value.start(), NaiveDate::from_ymd_opt(2012, 1, 2).unwrap());
        assert_eq!(value.end(), NaiveDate::from_ymd_opt(2013, 6, 7).unwrap());
        assert_eq!(format_date_interval(&value), "2012-01-02/2013-06-07");

        let err = parse_date_interval("2012-01-02/").unwrap_err();
        assert!(err.to_string().contains("end date was missing"));
        let err = parse_date_interval("/2013-06-07").unwrap_err();
        assert!(err.to_string().contains("start date was missing"));
        assert!(parse_date_interval("2012-01-02").is_err());
    }
}
