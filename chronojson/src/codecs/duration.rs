use crate::converter::Codec;
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::options::JsonOptions;
use crate::reader::{JsonReader, Token};
use crate::writer::JsonWriter;

/// Reads and writes [`Duration`] as `"[-]H:MM:SS[.F]"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationCodec;

impl Codec for DurationCodec {
    type Value = Duration;

    fn decode(&self, reader: &mut JsonReader, _options: &JsonOptions) -> Result<Duration> {
        match reader.read()? {
            Token::String(text) => Duration::parse(&text),
            other => Err(Error::format(format!(
                "unexpected token parsing Duration, expected String, got {}",
                other.kind()
            ))),
        }
    }

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &Duration,
        _options: &JsonOptions,
    ) -> Result<()> {
        writer.write_string(&value.to_string())
    }
}
