//! Conversion of a key-value mapping into a WDDX packet.
//!
//! The [`Converter`] owns an immutable snapshot of the input mapping and the
//! [`WddxOptions`] it was built with. It performs three jobs:
//!
//! - **Type inference** ([`Converter::classify`]): pick the WDDX tag for a scalar
//! - **Rendering** ([`Converter::render`]): produce the element's text content
//! - **Assembly** ([`Converter::serialize`]): emit the whole packet
//!
//! ## Packet Layout
//!
//! ```text
//! <wddxPacket version='1.0'><header/><data><struct>
//!   <var name="KEY"><TYPE>TEXT</TYPE></var>
//!   <var name="KEY"><null/></var>
//!   <var name="KEY"><array length="N"><TYPE>TEXT</TYPE>...</array></var>
//! </struct></data></wddxPacket>
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use serde_wddx::{wddx, Converter, WddxOptions};
//!
//! let data = wddx!({ "d": 1, "c": null });
//! let converter = Converter::with_options(data, WddxOptions::new().with_force_type(true)).unwrap();
//!
//! assert_eq!(
//!     converter.serialize().unwrap(),
//!     "<wddxPacket version='1.0'><header/><data><struct>\
//!      <var name=\"d\"><number>1</number></var>\
//!      <var name=\"c\"><null/></var>\
//!      </struct></data></wddxPacket>"
//! );
//! ```

use crate::types::is_datetime;
use crate::value::DATETIME_FORMAT;
use crate::xml::XmlWriter;
use crate::{Error, Result, Value, WddxMap, WddxOptions, WddxType};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use tracing::{debug, trace};

const PACKET_TAG: &str = "wddxPacket";

/// Converts a mapping into a WDDX packet.
///
/// Built once per conversion; [`serialize`](Converter::serialize) can be
/// called any number of times and always returns the same document.
#[derive(Clone, Debug)]
pub struct Converter {
    data: WddxMap,
    options: WddxOptions,
}

impl Converter {
    /// Creates a converter with default options (no type inference, compact output).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless `data` is a non-empty struct.
    pub fn new(data: impl Into<Value>) -> Result<Self> {
        Self::with_options(data, WddxOptions::default())
    }

    /// Creates a converter with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless `data` is a non-empty struct.
    pub fn with_options(data: impl Into<Value>, options: WddxOptions) -> Result<Self> {
        let data: Value = data.into();
        match data {
            Value::Struct(map) if !map.is_empty() => Ok(Converter { data: map, options }),
            Value::Struct(_) => Err(Error::invalid_input("mapping must not be empty")),
            other => Err(Error::InvalidInput(format!(
                "expected a mapping, found {}",
                other.kind()
            ))),
        }
    }

    /// Creates a converter from any `T: Serialize` whose top level is a map or struct.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_wddx::{Converter, WddxOptions};
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let converter = Converter::from_serialize(&Point { x: 1, y: 2 }, WddxOptions::new()).unwrap();
    /// assert!(converter.serialize().unwrap().contains("<var name=\"y\"><string>2</string></var>"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be converted or is not a non-empty mapping.
    pub fn from_serialize<T>(data: &T, options: WddxOptions) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        Self::with_options(crate::to_value(data)?, options)
    }

    /// Returns the options this converter was built with.
    #[must_use]
    pub fn options(&self) -> &WddxOptions {
        &self.options
    }

    /// Returns the mapping this converter serializes.
    #[must_use]
    pub fn data(&self) -> &WddxMap {
        &self.data
    }

    /// Picks the WDDX tag for a scalar value.
    ///
    /// With `force_type` disabled every value is a `string`. Otherwise the
    /// value kind decides, and strings that look like timestamps become
    /// `dateTime`. Kinds with no tag of their own fall back to `string`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::{wddx, Converter, Value, WddxOptions, WddxType};
    ///
    /// let forced = Converter::with_options(wddx!({ "a": 1 }), WddxOptions::new().with_force_type(true)).unwrap();
    /// assert_eq!(forced.classify(&Value::from(1.8)), WddxType::Number);
    /// assert_eq!(forced.classify(&Value::from("2021-09-15 15:40:36")), WddxType::DateTime);
    ///
    /// let plain = Converter::new(wddx!({ "a": 1 })).unwrap();
    /// assert_eq!(plain.classify(&Value::from(true)), WddxType::String);
    /// ```
    #[must_use]
    pub fn classify(&self, value: &Value) -> WddxType {
        if !self.options.force_type {
            return WddxType::String;
        }
        match value {
            Value::Bool(_) => WddxType::Boolean,
            Value::Number(_) => WddxType::Number,
            Value::Binary(_) => WddxType::Binary,
            Value::DateTime(_) => WddxType::DateTime,
            Value::String(s) if is_datetime(s) => WddxType::DateTime,
            Value::String(_) | Value::Null | Value::Array(_) | Value::Struct(_) => {
                WddxType::String
            }
        }
    }

    /// Produces the text content of the element `value` is wrapped in.
    ///
    /// `binary` values are base64 encoded; everything else uses its natural
    /// textual form (`True`/`False`, decimal numbers, strings verbatim).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when `ty` is `binary` and `value` is not
    /// a byte sequence, and [`Error::UnsupportedType`] for arrays and structs.
    pub fn render(&self, value: &Value, ty: WddxType) -> Result<String> {
        if ty == WddxType::Binary {
            return match value {
                Value::Binary(bytes) => Ok(STANDARD.encode(bytes)),
                other => Err(Error::type_mismatch("binary", other.kind())),
            };
        }

        let text = match value {
            Value::Null => String::new(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            Value::Array(_) | Value::Struct(_) => {
                return Err(Error::UnsupportedType(format!(
                    "{} cannot be rendered as a scalar",
                    value.kind()
                )))
            }
        };
        Ok(text)
    }

    /// Assembles the WDDX packet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for struct values and for arrays
    /// nested inside arrays, or [`Error::Xml`] if the emitter fails. No
    /// partial packet is returned.
    pub fn serialize(&self) -> Result<String> {
        debug!(
            vars = self.data.len(),
            force_type = self.options.force_type,
            pretty = self.options.pretty,
            "serializing WDDX packet"
        );

        let mut xml = if self.options.pretty {
            XmlWriter::indented(self.options.indent)
        } else {
            XmlWriter::compact()
        };

        xml.start_raw("wddxPacket version='1.0'", PACKET_TAG.len())?;
        xml.empty("header")?;
        xml.start("data", &[])?;
        xml.start("struct", &[])?;

        for (key, value) in self.data.iter() {
            xml.start("var", &[("name", key.as_str())])?;
            match value {
                Value::Array(items) => {
                    trace!(name = %key, length = items.len(), "var array");
                    let length = items.len().to_string();
                    xml.start("array", &[("length", length.as_str())])?;
                    for item in items {
                        if let Value::Array(_) | Value::Struct(_) = item {
                            return Err(Error::UnsupportedType(format!(
                                "{} inside array '{}'",
                                item.kind(),
                                key
                            )));
                        }
                        self.write_scalar(&mut xml, item)?;
                    }
                    xml.end("array")?;
                }
                Value::Struct(_) => {
                    return Err(Error::UnsupportedType(format!(
                        "nested struct in var '{}'",
                        key
                    )));
                }
                scalar => {
                    trace!(name = %key, kind = scalar.kind(), "var");
                    self.write_scalar(&mut xml, scalar)?;
                }
            }
            xml.end("var")?;
        }

        xml.end("struct")?;
        xml.end("data")?;
        xml.end(PACKET_TAG)?;
        xml.into_string()
    }

    fn write_scalar(&self, xml: &mut XmlWriter, value: &Value) -> Result<()> {
        if value.is_null() {
            return xml.empty("null");
        }
        let ty = self.classify(value);
        let text = self.render(value, ty)?;
        xml.text_element(ty.as_str(), &text)
    }
}
