//! Converter registry, naming policy and serialize/deserialize entry points.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::converter::{AnyConverter, Converter};
use crate::converters;
use crate::error::{Error, Result};
use crate::interval::{DateInterval, Interval};
use crate::reader::JsonReader;
use crate::settings::{IntervalFormat, Naming, Settings};
use crate::type_info::{JsonType, TypeInfo};
use crate::writer::JsonWriter;

/// Maps a canonical property name (`"Start"`, `"End"`) to its wire name.
#[derive(Clone)]
pub struct NamingPolicy(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl NamingPolicy {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// `Start` becomes `start`, `URLValue` becomes `urlValue`.
    pub fn camel_case() -> Self {
        Self::new(to_camel_case)
    }

    /// `StartDate` becomes `start_date`.
    pub fn snake_case() -> Self {
        Self::new(to_snake_case)
    }

    pub fn convert_name(&self, name: &str) -> String {
        (self.0)(name)
    }
}

impl fmt::Debug for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NamingPolicy(..)")
    }
}

/// What compound codecs do with properties they do not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProperties {
    /// Fail with a format error.
    #[default]
    Reject,
    /// Skip the property and its value.
    Skip,
}

/// The option set handed to every converter call.
///
/// Converters are tried in registration order; the first whose
/// [`Converter::can_convert`] accepts the requested type is used.
#[derive(Clone, Default)]
pub struct JsonOptions {
    converters: Vec<Arc<dyn AnyConverter>>,
    naming_policy: Option<NamingPolicy>,
    unknown_properties: UnknownProperties,
}

impl JsonOptions {
    /// Creates an option set with no converters and no naming policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fully configured option set from [`Settings`].
    pub fn from_settings(settings: &Settings) -> Self {
        let mut options = Self::new()
            .with_unknown_properties(settings.unknown_properties)
            .configure_for_time();
        options.naming_policy = match settings.naming {
            Naming::Pascal => None,
            Naming::Camel => Some(NamingPolicy::camel_case()),
            Naming::Snake => Some(NamingPolicy::snake_case()),
        };
        if settings.interval_format == IntervalFormat::Iso {
            options = options.with_iso_interval_converter();
        }
        if settings.date_interval_format == IntervalFormat::Iso {
            options = options.with_iso_date_interval_converter();
        }
        options
    }

    /// Sets the naming policy applied to compound property names.
    pub fn with_naming_policy(mut self, policy: NamingPolicy) -> Self {
        self.naming_policy = Some(policy);
        self
    }

    pub fn with_unknown_properties(mut self, policy: UnknownProperties) -> Self {
        self.unknown_properties = policy;
        self
    }

    /// Appends a converter.
    pub fn with_converter<C: Converter>(mut self, converter: C) -> Self {
        self.converters.push(Arc::new(converter));
        self
    }

    /// Appends the default converter for every supported temporal type.
    pub fn configure_for_time(self) -> Self {
        self.with_converter(converters::instant())
            .with_converter(converters::interval())
            .with_converter(converters::local_date())
            .with_converter(converters::local_date_time())
            .with_converter(converters::local_time())
            .with_converter(converters::date_interval())
            .with_converter(converters::offset())
            .with_converter(converters::duration())
            .with_converter(converters::period())
            .with_converter(converters::offset_date_time())
            .with_converter(converters::offset_date())
            .with_converter(converters::offset_time())
    }

    /// Replaces every converter for [`Interval`] with the compact ISO one.
    pub fn with_iso_interval_converter(self) -> Self {
        self.replace_existing::<Interval, _>(converters::iso_interval())
    }

    /// Replaces every converter for [`DateInterval`] with the compact ISO one.
    pub fn with_iso_date_interval_converter(self) -> Self {
        self.replace_existing::<DateInterval, _>(converters::iso_date_interval())
    }

    fn replace_existing<T: JsonType, C: Converter>(mut self, converter: C) -> Self {
        let requested = TypeInfo::of::<T>();
        let before = self.converters.len();
        self.converters.retain(|c| !c.accepts(&requested));
        tracing::debug!(
            "chronojson: replaced {} converter(s) for {}",
            before - self.converters.len(),
            T::type_name()
        );
        self.with_converter(converter)
    }

    pub fn naming_policy(&self) -> Option<&NamingPolicy> {
        self.naming_policy.as_ref()
    }

    pub fn unknown_properties(&self) -> UnknownProperties {
        self.unknown_properties
    }

    /// Names of the value types of the registered converters, in order.
    pub fn converter_names(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.value_name()).collect()
    }

    /// Applies the naming policy to a canonical property name.
    pub fn property_name(&self, canonical: &str) -> String {
        match &self.naming_policy {
            Some(policy) => policy.convert_name(canonical),
            None => canonical.to_string(),
        }
    }

    /// Reports whether some registered converter accepts `requested`.
    pub fn can_convert(&self, requested: &TypeInfo) -> bool {
        self.converters.iter().any(|c| c.accepts(requested))
    }

    fn converter_for(&self, requested: &TypeInfo) -> Result<&dyn AnyConverter> {
        let converter = self
            .converters
            .iter()
            .find(|c| c.accepts(requested))
            .ok_or(Error::NoConverter(requested.name()))?;
        tracing::trace!(
            "chronojson: {} handled by {} converter",
            requested,
            converter.value_name()
        );
        Ok(converter.as_ref())
    }

    /// Reads a `T` from `reader`; a null sentinel is an error.
    pub fn read_value<T: JsonType>(&self, reader: &mut JsonReader) -> Result<T> {
        let requested = TypeInfo::of::<T>();
        let value = self
            .converter_for(&requested)?
            .read_any(reader, &requested, self)?
            .ok_or_else(|| Error::format(format!("cannot convert null to {}", T::type_name())))?;
        downcast(value)
    }

    /// Reads the nullable form of `T` from `reader`.
    pub fn read_nullable<T: JsonType>(&self, reader: &mut JsonReader) -> Result<Option<T>> {
        let converter = self.converter_for(&TypeInfo::of::<T>())?;
        converter
            .read_any(reader, &TypeInfo::nullable::<T>(), self)?
            .map(downcast)
            .transpose()
    }

    /// Writes `value` through the converter registered for `T`.
    pub fn write_value<T: JsonType>(&self, writer: &mut JsonWriter, value: &T) -> Result<()> {
        self.converter_for(&TypeInfo::of::<T>())?
            .write_any(writer, Some(value as &dyn Any), self)
    }

    /// Writes `value`, or `null` when absent.
    pub fn write_nullable<T: JsonType>(
        &self,
        writer: &mut JsonWriter,
        value: Option<&T>,
    ) -> Result<()> {
        self.converter_for(&TypeInfo::of::<T>())?
            .write_any(writer, value.map(|v| v as &dyn Any), self)
    }

    /// Serializes a value to compact JSON text.
    pub fn serialize<T: JsonType>(&self, value: &T) -> Result<String> {
        let mut writer = JsonWriter::new();
        self.write_value(&mut writer, value)?;
        Ok(writer.into_string())
    }

    pub fn serialize_nullable<T: JsonType>(&self, value: Option<&T>) -> Result<String> {
        let mut writer = JsonWriter::new();
        self.write_nullable(&mut writer, value)?;
        Ok(writer.into_string())
    }

    /// Deserializes a `T` from JSON text. The whole input must be consumed.
    pub fn deserialize<T: JsonType>(&self, json: &str) -> Result<T> {
        let mut reader = JsonReader::parse(json)?;
        let value = self.read_value(&mut reader)?;
        ensure_done(&reader)?;
        Ok(value)
    }

    /// Deserializes the nullable form of `T` from JSON text.
    pub fn deserialize_nullable<T: JsonType>(&self, json: &str) -> Result<Option<T>> {
        let mut reader = JsonReader::parse(json)?;
        let value = self.read_nullable(&mut reader)?;
        ensure_done(&reader)?;
        Ok(value)
    }
}

impl fmt::Debug for JsonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonOptions")
            .field("converters", &self.converter_names())
            .field("naming_policy", &self.naming_policy)
            .field("unknown_properties", &self.unknown_properties)
            .finish()
    }
}

fn downcast<T: JsonType>(value: Box<dyn Any>) -> Result<T> {
    value
        .downcast::<T>()
        .map(|v| *v)
        .map_err(|_| Error::TypeMismatch {
            expected: T::type_name(),
        })
}

fn ensure_done(reader: &JsonReader) -> Result<()> {
    if !reader.is_done() {
        return Err(Error::format(format!(
            "unexpected {} after value",
            reader.peek_kind()
        )));
    }
    Ok(())
}

fn to_camel_case(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    for i in 0..chars.len() {
        if i == 1 && !chars[i].is_uppercase() {
            break;
        }
        let next_is_lower = chars.get(i + 1).is_some_and(|c| !c.is_uppercase());
        if i > 0 && next_is_lower {
            break;
        }
        chars[i] = chars[i].to_lowercase().next().unwrap_or(chars[i]);
    }
    chars.into_iter().collect()
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("Start"), "start");
        assert_eq!(to_camel_case("End"), "end");
        assert_eq!(to_camel_case("URLValue"), "urlValue");
        assert_eq!(to_camel_case("ID"), "id");
        assert_eq!(to_camel_case("already"), "already");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Start"), "start");
        assert_eq!(to_snake_case("StartDate"), "start_date");
    }

    #[test]
    fn test_property_name() {
        let options = JsonOptions::new();
        assert_eq!(options.property_name("Start"), "Start");
        let options = options.with_naming_policy(NamingPolicy::new(|n| n.to_uppercase()));
        assert_eq!(options.property_name("Start"), "START");
    }

    #[test]
    fn test_no_converter() {
        let err = JsonOptions::new().serialize(&Interval::unbounded()).unwrap_err();
        assert_eq!(err, Error::NoConverter("Interval"));
    }
}
