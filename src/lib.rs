//! # serde_wddx
//!
//! A Serde-compatible serializer for the WDDX (Web Distributed Data Exchange) format.
//!
//! ## What is WDDX?
//!
//! WDDX is a small XML-based exchange format. A packet carries one struct of
//! named vars; each var holds a `string`, `number`, `boolean`, `binary`,
//! `dateTime`, `null`, or an `array` of those.
//!
//! ## Key Features
//!
//! - **Type Inference**: with `force_type` enabled, native value kinds pick the
//!   WDDX tag, and timestamp-shaped strings become `dateTime`
//! - **Order Preserving**: vars are written in insertion order
//! - **Serde Compatible**: any map or struct implementing `Serialize` can be written
//! - **Pretty Printing**: optional one-element-per-line output with configurable indent
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_wddx::{wddx, Converter, WddxOptions};
//!
//! let data = wddx!({
//!     "a": [null, true, 1.8, 1, "1", "2023-10-26 14:30:00-05:00"]
//! });
//!
//! let converter = Converter::with_options(data, WddxOptions::new().with_force_type(true)).unwrap();
//! assert_eq!(
//!     converter.serialize().unwrap(),
//!     "<wddxPacket version='1.0'><header/><data><struct><var name=\"a\"><array length=\"6\">\
//!      <null/><boolean>True</boolean><number>1.8</number><number>1</number><string>1</string>\
//!      <dateTime>2023-10-26 14:30:00-05:00</dateTime></array></var></struct></data></wddxPacket>"
//! );
//! ```
//!
//! ### Serializing Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_wddx::{to_string_with_options, WddxOptions};
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 7, name: "Alice".to_string(), active: true };
//! let wddx = to_string_with_options(&user, WddxOptions::new().with_force_type(true)).unwrap();
//! assert!(wddx.contains("<var name=\"active\"><boolean>True</boolean></var>"));
//! ```
//!
//! ## Scope
//!
//! Only serialization is provided. Structs cannot be nested and arrays may
//! only hold scalars; both are reported as [`Error::UnsupportedType`].
//!
//! ## Demos
//!
//! See the `demos/` directory, runnable with `cargo run --example <name>`:
//!
//! - **`simple.rs`** - serializing a derived struct
//! - **`macro.rs`** - building packets with the `wddx!` macro
//! - **`dynamic_values.rs`** - inspecting how values are classified
//! - **`custom_options.rs`** - forced typing and pretty-printing

pub mod convert;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod types;
pub mod value;
mod xml;

pub use convert::Converter;
pub use error::{Error, Result};
pub use map::WddxMap;
pub use options::WddxOptions;
pub use ser::ValueSerializer;
pub use types::WddxType;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Serialize a map or struct to a compact WDDX string with default options.
///
/// Type inference is off by default, so every scalar is written as `<string>`.
///
/// # Examples
///
/// ```rust
/// use serde_wddx::to_string;
/// use std::collections::BTreeMap;
///
/// let mut data = BTreeMap::new();
/// data.insert("x", 1);
///
/// assert_eq!(
///     to_string(&data).unwrap(),
///     "<wddxPacket version='1.0'><header/><data><struct><var name=\"x\"><string>1</string></var></struct></data></wddxPacket>"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a non-empty mapping or holds shapes
/// WDDX cannot carry.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WddxOptions::default())
}

/// Serialize a map or struct to a pretty-printed WDDX string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WddxOptions::pretty())
}

/// Serialize a map or struct to a WDDX string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: WddxOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Converter::from_serialize(value, options)?.serialize()
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_wddx::{to_value, Value};
///
/// assert_eq!(to_value(&Some(3)).unwrap(), Value::from(3));
/// assert!(to_value(&vec!["a", "b"]).unwrap().is_array());
/// ```
///
/// # Errors
///
/// Returns an error for data-carrying enum variants and null map keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Serialize a map or struct as WDDX into a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, WddxOptions::default())
}

/// Serialize a map or struct as WDDX into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: WddxOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let wddx = to_string_with_options(value, options)?;
    writer
        .write_all(wddx.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: f64,
    }

    #[test]
    fn test_struct_packet() {
        let wddx = to_string_with_options(
            &Point { x: 1, y: 2.5 },
            WddxOptions::new().with_force_type(true),
        )
        .unwrap();
        assert_eq!(
            wddx,
            "<wddxPacket version='1.0'><header/><data><struct><var name=\"x\"><number>1</number></var><var name=\"y\"><number>2.5</number></var></struct></data></wddxPacket>"
        );
    }

    #[test]
    fn test_non_mapping_is_invalid_input() {
        assert!(matches!(to_string(&1), Err(Error::InvalidInput(_))));
        assert!(matches!(to_string(&vec![1, 2]), Err(Error::InvalidInput(_))));
        let empty: BTreeMap<String, i32> = BTreeMap::new();
        assert!(matches!(to_string(&empty), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_to_writer() {
        let mut data = BTreeMap::new();
        data.insert("k", "v");
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &data).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&data).unwrap());
    }

    #[test]
    fn test_pretty_default_indent() {
        let mut data = BTreeMap::new();
        data.insert("k", 1);
        let wddx = to_string_pretty(&data).unwrap();
        assert!(wddx.starts_with("<wddxPacket version='1.0'>\n    <header/>\n    <data>"));
        assert!(wddx.contains("\n                <string>1</string>\n"));
        assert!(wddx.ends_with("\n</wddxPacket>"));
    }
}
