//! Compound object forms: `{"Start": ..., "End": ...}`.
//!
//! Property names go through the naming policy of the options passed to each
//! call, and endpoint values go through whatever converter those options
//! hold for the endpoint type.

use chrono::{DateTime, NaiveDate, Utc};

use super::{END_PROPERTY, START_PROPERTY};
use crate::converter::Codec;
use crate::error::{Error, Result};
use crate::interval::{DateInterval, Interval};
use crate::options::{JsonOptions, UnknownProperties};
use crate::reader::{JsonReader, Token};
use crate::writer::JsonWriter;

/// Reads and writes [`Interval`] as an object with optional `Start`/`End`.
///
/// A missing property or an explicit `null` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalCodec;

impl Codec for IntervalCodec {
    type Value = Interval;

    fn decode(&self, reader: &mut JsonReader, options: &JsonOptions) -> Result<Interval> {
        expect_start_object(reader, "Interval")?;
        let start_name = options.property_name(START_PROPERTY);
        let end_name = options.property_name(END_PROPERTY);

        let mut start = None;
        let mut end = None;
        loop {
            match reader.read()? {
                Token::EndObject => break,
                Token::PropertyName(name) if name == start_name => {
                    start = options.read_nullable::<DateTime<Utc>>(reader)?;
                }
                Token::PropertyName(name) if name == end_name => {
                    end = options.read_nullable::<DateTime<Utc>>(reader)?;
                }
                Token::PropertyName(name) => unknown_property(reader, options, &name, "Interval")?,
                other => return Err(unexpected(other, "Interval")),
            }
        }

        Interval::new(start, end)
    }

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &Interval,
        options: &JsonOptions,
    ) -> Result<()> {
        writer.write_start_object();
        if let Some(start) = value.start() {
            writer.write_property_name(&options.property_name(START_PROPERTY))?;
            options.write_value(writer, &start)?;
        }
        if let Some(end) = value.end() {
            writer.write_property_name(&options.property_name(END_PROPERTY))?;
            options.write_value(writer, &end)?;
        }
        writer.write_end_object();
        Ok(())
    }
}

/// Reads and writes [`DateInterval`] as an object with mandatory
/// `Start`/`End`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateIntervalCodec;

impl Codec for DateIntervalCodec {
    type Value = DateInterval;

    fn decode(&self, reader: &mut JsonReader, options: &JsonOptions) -> Result<DateInterval> {
        expect_start_object(reader, "DateInterval")?;
        let start_name = options.property_name(START_PROPERTY);
        let end_name = options.property_name(END_PROPERTY);

        let mut start = None;
        let mut end = None;
        loop {
            match reader.read()? {
                Token::EndObject => break,
                Token::PropertyName(name) if name == start_name => {
                    start = options.read_nullable::<NaiveDate>(reader)?;
                }
                Token::PropertyName(name) if name == end_name => {
                    end = options.read_nullable::<NaiveDate>(reader)?;
                }
                Token::PropertyName(name) => {
                    unknown_property(reader, options, &name, "DateInterval")?
                }
                other => return Err(unexpected(other, "DateInterval")),
            }
        }

        let start = start.ok_or(Error::MissingField("start"))?;
        let end = end.ok_or(Error::MissingField("end"))?;
        DateInterval::new(start, end)
    }

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &DateInterval,
        options: &JsonOptions,
    ) -> Result<()> {
        writer.write_start_object();
        writer.write_property_name(&options.property_name(START_PROPERTY))?;
        options.write_value(writer, &value.start())?;
        writer.write_property_name(&options.property_name(END_PROPERTY))?;
        options.write_value(writer, &value.end())?;
        writer.write_end_object();
        Ok(())
    }
}

fn expect_start_object(reader: &mut JsonReader, type_name: &str) -> Result<()> {
    match reader.read()? {
        Token::StartObject => Ok(()),
        other => Err(Error::format(format!(
            "unexpected token parsing {}, expected StartObject, got {}",
            type_name,
            other.kind()
        ))),
    }
}

fn unexpected(token: Token, type_name: &str) -> Error {
    Error::format(format!(
        "unexpected token parsing {}, expected PropertyName or EndObject, got {}",
        type_name,
        token.kind()
    ))
}

fn unknown_property(
    reader: &mut JsonReader,
    options: &JsonOptions,
    name: &str,
    type_name: &str,
) -> Result<()> {
    match options.unknown_properties() {
        UnknownProperties::Reject => Err(Error::format(format!(
            "unexpected property {:?} in {}",
            name, type_name
        ))),
        UnknownProperties::Skip => {
            tracing::debug!("chronojson: skipping unknown property {:?} in {}", name, type_name);
            reader.skip_value()
        }
    }
}
