//! Declarative configuration for [`JsonOptions`](crate::JsonOptions).

use serde::{Deserialize, Serialize};

pub use crate::options::UnknownProperties;

/// Property naming convention for compound objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Naming {
    /// `Start` / `End`, unchanged.
    #[default]
    Pascal,
    /// `start` / `end`.
    Camel,
    /// `start` / `end`, with `_` between words.
    Snake,
}

/// Wire form used for interval-like values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalFormat {
    /// `{"Start": ..., "End": ...}`.
    #[default]
    Compound,
    /// `"start/end"`.
    Iso,
}

/// Serializer settings, typically loaded from a config file.
///
/// Every field is optional:
///
/// ```yaml
/// naming: camel
/// unknown_properties: skip
/// interval_format: iso
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub naming: Naming,
    pub unknown_properties: UnknownProperties,
    pub interval_format: IntervalFormat,
    pub date_interval_format: IntervalFormat,
}
