//! Converter that forwards to another converter.

use std::any::Any;
use std::sync::Arc;

use crate::converter::Converter;
use crate::error::Result;
use crate::options::JsonOptions;
use crate::reader::JsonReader;
use crate::type_info::{JsonType, TypeInfo};
use crate::writer::JsonWriter;

/// Forwards every call to a wrapped converter.
///
/// Useful to register an existing converter under its own named type, e.g. a
/// `ShortDateConverter` newtype that derefs to a delegating converter over a
/// custom date pattern.
pub struct DelegatingConverter<T> {
    original: Arc<dyn Converter<Value = T>>,
}

impl<T: JsonType> DelegatingConverter<T> {
    pub fn new(original: impl Converter<Value = T>) -> Self {
        Self {
            original: Arc::new(original),
        }
    }

    /// Shares an already wrapped converter.
    pub fn from_arc(original: Arc<dyn Converter<Value = T>>) -> Self {
        Self { original }
    }
}

impl<T> Clone for DelegatingConverter<T> {
    fn clone(&self) -> Self {
        Self {
            original: Arc::clone(&self.original),
        }
    }
}

impl<T: JsonType> Converter for DelegatingConverter<T> {
    type Value = T;

    fn can_convert(&self, requested: &TypeInfo) -> bool {
        self.original.can_convert(requested)
    }

    fn read(
        &self,
        reader: &mut JsonReader,
        requested: &TypeInfo,
        options: &JsonOptions,
    ) -> Result<Option<T>> {
        self.original.read(reader, requested, options)
    }

    fn write(
        &self,
        writer: &mut JsonWriter,
        value: Option<&dyn Any>,
        options: &JsonOptions,
    ) -> Result<()> {
        self.original.write(writer, value, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters;
    use crate::duration::Duration;
    use crate::interval::DateInterval;
    use chrono::NaiveDate;

    #[test]
    fn test_delegates_can_convert() {
        let converter = DelegatingConverter::new(converters::duration());
        assert!(converter.can_convert(&TypeInfo::of::<Duration>()));
        assert!(!converter.can_convert(&TypeInfo::of::<Option<Duration>>()));
    }

    #[test]
    fn test_delegates_read_and_write() {
        let options = JsonOptions::new()
            .with_converter(DelegatingConverter::new(converters::iso_date_interval()));
        let value = DateInterval::new(
            NaiveDate::from_ymd_opt(2012, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2013, 6, 7).unwrap(),
        )
        .unwrap();

        let json = options.serialize(&value).unwrap();
        assert_eq!(json, r#""2012-01-02/2013-06-07""#);
        assert_eq!(options.deserialize::<DateInterval>(&json).unwrap(), value);
        assert_eq!(options.deserialize_nullable::<DateInterval>("null").unwrap(), None);
    }

    #[test]
    fn test_shared_original() {
        let original: Arc<dyn Converter<Value = Duration>> = Arc::new(converters::duration());
        let a = DelegatingConverter::from_arc(Arc::clone(&original));
        let b = a.clone();
        let options = JsonOptions::new().with_converter(b);
        assert_eq!(
            options.serialize(&Duration::from_seconds(90)).unwrap(),
            r#""0:01:30""#
        );
        assert_eq!(Arc::strong_count(&original), 3);
    }
}
