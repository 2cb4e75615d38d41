//! Sequential JSON token writer producing compact text.

use serde_json::Number;

use crate::error::Result;

/// Emits JSON tokens into a compact string.
///
/// Separators are inserted automatically; callers only emit tokens.
#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    needs_comma: bool,
    after_property: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_null(&mut self) {
        self.begin_value();
        self.out.push_str("null");
        self.needs_comma = true;
    }

    pub fn write_bool(&mut self, value: bool) {
        self.begin_value();
        self.out.push_str(if value { "true" } else { "false" });
        self.needs_comma = true;
    }

    pub fn write_number(&mut self, value: impl Into<Number>) {
        self.begin_value();
        self.out.push_str(&value.into().to_string());
        self.needs_comma = true;
    }

    /// Writes a string value, escaping it as JSON requires.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.begin_value();
        self.out.push_str(&serde_json::to_string(value)?);
        self.needs_comma = true;
        Ok(())
    }

    pub fn write_start_object(&mut self) {
        self.begin_value();
        self.out.push('{');
        self.needs_comma = false;
    }

    pub fn write_property_name(&mut self, name: &str) -> Result<()> {
        self.begin_value();
        self.out.push_str(&serde_json::to_string(name)?);
        self.out.push(':');
        self.after_property = true;
        Ok(())
    }

    pub fn write_end_object(&mut self) {
        self.out.push('}');
        self.after_property = false;
        self.needs_comma = true;
    }

    pub fn write_start_array(&mut self) {
        self.begin_value();
        self.out.push('[');
        self.needs_comma = false;
    }

    pub fn write_end_array(&mut self) {
        self.out.push(']');
        self.after_property = false;
        self.needs_comma = true;
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn begin_value(&mut self) {
        if self.after_property {
            self.after_property = false;
        } else if self.needs_comma {
            self.out.push(',');
        }
    }
}
