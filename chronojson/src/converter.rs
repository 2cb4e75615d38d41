//! Converter contract and the type-dispatch base shared by every codec.
//!
//! A [`Codec`] only knows how to decode and encode a non-null value. Wrapping
//! it in a [`TypeDispatchConverter`] adds the behavior every converter shares:
//!
//! - type compatibility checks ([`Converter::can_convert`]),
//! - the `null` / `""` sentinels on read, accepted only for the nullable form,
//! - `null` on write for absent values and exact-type checks for present ones.

use std::any::{Any, TypeId};

use crate::error::{Error, Result};
use crate::options::JsonOptions;
use crate::reader::{JsonReader, Token};
use crate::type_info::{JsonType, TypeInfo, TypeKind};
use crate::writer::JsonWriter;

/// Decodes and encodes non-null values of one type.
pub trait Codec: Send + Sync + 'static {
    type Value: JsonType;

    /// Consumes exactly one JSON value from `reader`.
    fn decode(&self, reader: &mut JsonReader, options: &JsonOptions) -> Result<Self::Value>;

    fn encode(
        &self,
        writer: &mut JsonWriter,
        value: &Self::Value,
        options: &JsonOptions,
    ) -> Result<()>;
}

/// A converter as seen by the host: compatibility check plus read/write.
pub trait Converter: Send + Sync + 'static {
    type Value: JsonType;

    /// Reports whether this converter handles `requested`.
    fn can_convert(&self, requested: &TypeInfo) -> bool;

    /// Reads one value. `Ok(None)` is returned only for a null sentinel when
    /// `requested` is the nullable form of the value type.
    fn read(
        &self,
        reader: &mut JsonReader,
        requested: &TypeInfo,
        options: &JsonOptions,
    ) -> Result<Option<Self::Value>>;

    /// Writes `value`, or `null` when it is absent.
    fn write(
        &self,
        writer: &mut JsonWriter,
        value: Option<&dyn Any>,
        options: &JsonOptions,
    ) -> Result<()>;
}

/// Wraps a [`Codec`] with shared null handling and type dispatch.
#[derive(Debug, Clone)]
pub struct TypeDispatchConverter<C> {
    codec: C,
    own: TypeId,
    check_ancestors: bool,
    nullable: TypeId,
}

impl<C: Codec> TypeDispatchConverter<C> {
    /// Wraps `codec`. Whether subtypes are accepted and which type counts as
    /// the nullable form are fixed here.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            own: TypeId::of::<C::Value>(),
            check_ancestors: C::Value::KIND == TypeKind::Open,
            nullable: TypeInfo::nullable::<C::Value>().id(),
        }
    }

    /// Returns the wrapped codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Writes a value whose type is known statically.
    pub fn write_value(
        &self,
        writer: &mut JsonWriter,
        value: &C::Value,
        options: &JsonOptions,
    ) -> Result<()> {
        self.codec.encode(writer, value, options)
    }
}

impl<C: Codec + Default> Default for TypeDispatchConverter<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Codec> Converter for TypeDispatchConverter<C> {
    type Value = C::Value;

    fn can_convert(&self, requested: &TypeInfo) -> bool {
        requested.is(self.own) || (self.check_ancestors && requested.derives_from(self.own))
    }

    fn read(
        &self,
        reader: &mut JsonReader,
        requested: &TypeInfo,
        options: &JsonOptions,
    ) -> Result<Option<C::Value>> {
        let is_null = match reader.peek() {
            Some(Token::Null) => true,
            Some(Token::String(s)) => s.is_empty(),
            _ => false,
        };
        if is_null {
            if !requested.is(self.nullable) {
                return Err(Error::format(format!(
                    "cannot convert value to {}",
                    requested.name()
                )));
            }
            reader.read()?;
            return Ok(None);
        }
        self.codec.decode(reader, options).map(Some)
    }

    fn write(
        &self,
        writer: &mut JsonWriter,
        value: Option<&dyn Any>,
        options: &JsonOptions,
    ) -> Result<()> {
        let Some(value) = value else {
            writer.write_null();
            return Ok(());
        };
        match value.downcast_ref::<C::Value>() {
            Some(v) => self.codec.encode(writer, v, options),
            None => Err(Error::TypeMismatch {
                expected: <C::Value as JsonType>::type_name(),
            }),
        }
    }
}

/// Type-erased converter stored by [`JsonOptions`].
pub(crate) trait AnyConverter: Send + Sync {
    fn accepts(&self, requested: &TypeInfo) -> bool;

    fn read_any(
        &self,
        reader: &mut JsonReader,
        requested: &TypeInfo,
        options: &JsonOptions,
    ) -> Result<Option<Box<dyn Any>>>;

    fn write_any(
        &self,
        writer: &mut JsonWriter,
        value: Option<&dyn Any>,
        options: &JsonOptions,
    ) -> Result<()>;

    fn value_name(&self) -> &'static str;
}

impl<X: Converter> AnyConverter for X {
    fn accepts(&self, requested: &TypeInfo) -> bool {
        self.can_convert(requested)
    }

    fn read_any(
        &self,
        reader: &mut JsonReader,
        requested: &TypeInfo,
        options: &JsonOptions,
    ) -> Result<Option<Box<dyn Any>>> {
        let value = self.read(reader, requested, options)?;
        Ok(value.map(|v| Box::new(v) as Box<dyn Any>))
    }

    fn write_any(
        &self,
        writer: &mut JsonWriter,
        value: Option<&dyn Any>,
        options: &JsonOptions,
    ) -> Result<()> {
        self.write(writer, value, options)
    }

    fn value_name(&self) -> &'static str {
        <X::Value as JsonType>::type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug, PartialEq)]
    struct Count(i64);

    impl JsonType for Count {
        const KIND: TypeKind = TypeKind::Value;
    }

    #[derive(Default)]
    struct CountCodec;

    impl Codec for CountCodec {
        type Value = Count;

        fn decode(&self, reader: &mut JsonReader, _: &JsonOptions) -> Result<Count> {
            match reader.read()? {
                Token::Number(n) => n
                    .as_i64()
                    .map(Count)
                    .ok_or_else(|| Error::format("not an integer")),
                other => Err(Error::format(format!("got {}", other.kind()))),
            }
        }

        fn encode(&self, writer: &mut JsonWriter, value: &Count, _: &JsonOptions) -> Result<()> {
            writer.write_number(value.0);
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    struct Label(String);

    impl JsonType for Label {
        const KIND: TypeKind = TypeKind::Sealed;
    }

    #[derive(Default)]
    struct LabelCodec;

    impl Codec for LabelCodec {
        type Value = Label;

        fn decode(&self, reader: &mut JsonReader, _: &JsonOptions) -> Result<Label> {
            reader.read_string().map(Label)
        }

        fn encode(&self, writer: &mut JsonWriter, value: &Label, _: &JsonOptions) -> Result<()> {
            writer.write_string(&value.0)
        }
    }

    struct Stream;
    struct MemoryStream;

    impl JsonType for Stream {
        const KIND: TypeKind = TypeKind::Open;
    }

    #[derive(Default)]
    struct StreamCodec;

    impl Codec for StreamCodec {
        type Value = Stream;

        fn decode(&self, reader: &mut JsonReader, _: &JsonOptions) -> Result<Stream> {
            reader.skip_value()?;
            Ok(Stream)
        }

        fn encode(&self, writer: &mut JsonWriter, _: &Stream, _: &JsonOptions) -> Result<()> {
            writer.write_start_object();
            writer.write_end_object();
            Ok(())
        }
    }

    fn read<C: Codec>(
        converter: &TypeDispatchConverter<C>,
        json: &str,
        requested: TypeInfo,
    ) -> Result<Option<C::Value>> {
        let mut reader = JsonReader::parse(json)?;
        let value = converter.read(&mut reader, &requested, &JsonOptions::new())?;
        assert!(reader.is_done());
        Ok(value)
    }

    #[test]
    fn test_can_convert_exact_value_type() {
        let converter = TypeDispatchConverter::new(CountCodec);
        assert!(converter.can_convert(&TypeInfo::of::<Count>()));
        assert!(!converter.can_convert(&TypeInfo::of::<Option<Count>>()));
        assert!(!converter.can_convert(&TypeInfo::of::<i64>()));
        assert!(!converter.can_convert(&TypeInfo::of::<Label>()));
    }

    #[test]
    fn test_can_convert_sealed_ignores_declared_subtypes() {
        struct Derived;
        let converter = TypeDispatchConverter::new(LabelCodec);
        assert!(converter.can_convert(&TypeInfo::of::<Label>()));
        assert!(!converter.can_convert(&TypeInfo::of::<Derived>().extends::<Label>()));
    }

    #[test]
    fn test_can_convert_open_accepts_subtypes() {
        let converter = TypeDispatchConverter::new(StreamCodec);
        assert!(converter.can_convert(&TypeInfo::of::<Stream>()));
        assert!(converter.can_convert(&TypeInfo::of::<MemoryStream>().extends::<Stream>()));
        assert!(!converter.can_convert(&TypeInfo::of::<MemoryStream>()));
    }

    #[test]
    fn test_type_ids_fixed_at_construction() {
        let converter = TypeDispatchConverter::new(CountCodec);
        assert_eq!(converter.own, TypeId::of::<Count>());
        assert_eq!(converter.nullable, TypeId::of::<Option<Count>>());
        assert!(!converter.check_ancestors);

        let converter = TypeDispatchConverter::new(StreamCodec);
        assert_eq!(converter.own, TypeId::of::<Stream>());
        assert_eq!(converter.nullable, TypeId::of::<Stream>());
        assert!(converter.check_ancestors);
    }

    #[test]
    fn test_read_non_null() {
        let converter = TypeDispatchConverter::new(CountCodec);
        let value = read(&converter, "5", TypeInfo::of::<Count>()).unwrap();
        assert_eq!(value, Some(Count(5)));
    }

    #[test]
    fn test_read_null_sentinels_on_non_nullable_type() {
        let converter = TypeDispatchConverter::new(CountCodec);
        for json in ["null", r#""""#] {
            let err = read(&converter, json, TypeInfo::of::<Count>()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format);
            assert!(err.to_string().contains("Count"));
        }
    }

    #[test]
    fn test_read_null_sentinels_on_nullable_type() {
        let converter = TypeDispatchConverter::new(CountCodec);
        for json in ["null", r#""""#] {
            let value = read(&converter, json, TypeInfo::of::<Option<Count>>()).unwrap();
            assert_eq!(value, None);
        }
    }

    #[test]
    fn test_read_null_on_reference_type() {
        let converter = TypeDispatchConverter::new(LabelCodec);
        let value = read(&converter, "null", TypeInfo::of::<Label>()).unwrap();
        assert_eq!(value, None);
        let value = read(&converter, r#""abc""#, TypeInfo::of::<Label>()).unwrap();
        assert_eq!(value, Some(Label("abc".into())));
    }

    #[test]
    fn test_write_values() {
        let options = JsonOptions::new();
        let converter = TypeDispatchConverter::new(CountCodec);

        let mut w = JsonWriter::new();
        converter.write(&mut w, Some(&Count(5) as &dyn Any), &options).unwrap();
        assert_eq!(w.as_str(), "5");

        let mut w = JsonWriter::new();
        converter.write(&mut w, None, &options).unwrap();
        assert_eq!(w.as_str(), "null");

        let mut w = JsonWriter::new();
        converter.write_value(&mut w, &Count(-2), &options).unwrap();
        assert_eq!(w.as_str(), "-2");
    }

    #[test]
    fn test_write_rejects_other_types() {
        let converter = TypeDispatchConverter::new(StreamCodec);
        let mut w = JsonWriter::new();
        let err = converter
            .write(&mut w, Some(&MemoryStream as &dyn Any), &JsonOptions::new())
            .unwrap_err();
        assert_eq!(err, Error::TypeMismatch { expected: "Stream" });
        assert!(w.as_str().is_empty());

        let mut w = JsonWriter::new();
        converter.write(&mut w, None, &JsonOptions::new()).unwrap();
        assert_eq!(w.as_str(), "null");
    }
}
