//! Dynamic value representation for WDDX data.
//!
//! [`Value`] is the closed set of value kinds a WDDX packet can carry. Every
//! input, whether built by hand, through the [`wddx!`](crate::wddx) macro, or
//! through [`to_value`](crate::to_value), is mapped onto these variants before
//! any type inference happens.
//!
//! ## Core Types
//!
//! - [`Value`]: null, boolean, number, string, binary, date-time, array, struct
//! - [`Number`]: integers, floats and arbitrary-precision integers
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_wddx::Value;
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let blob = Value::from(b"as".to_vec());
//!
//! assert!(blob.is_binary());
//! assert_eq!(number.as_i64(), Some(42));
//! ```

use crate::WddxMap;
use chrono::{DateTime, FixedOffset, TimeZone};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// Textual layout used for date-time values.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// A dynamically-typed representation of any value a WDDX packet can hold.
///
/// `Struct` is only meaningful as the top level of a packet; `Array` may only
/// contain scalars and nulls.
///
/// # Examples
///
/// ```rust
/// use serde_wddx::{Value, Number};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Binary(Vec<u8>),
    DateTime(DateTime<FixedOffset>),
    Array(Vec<Value>),
    Struct(WddxMap),
}

/// A numeric value.
///
/// Integers outside the `i64` range are kept exactly as [`BigInt`].
///
/// # Examples
///
/// ```rust
/// use serde_wddx::Number;
///
/// assert_eq!(Number::Integer(1).to_string(), "1");
/// assert_eq!(Number::Float(1.8).to_string(), "1.8");
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// assert_eq!(Number::Float(1e16).to_string(), "1e+16");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
}

impl Number {
    /// Returns `true` if this is an integer value (of any width).
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::BigInt(b) => i64::try_from(b).ok(),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to an `f64`, losing precision for large integers.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::BigInt(b) => b.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

/// Writes a float in shortest round-trip form.
///
/// Integral values keep a trailing `.0`; magnitudes of at least `1e16` or
/// below `1e-4` switch to exponent notation with a signed, two-digit minimum
/// exponent (`1e+16`, `1.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", v);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::BigInt(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(value),
        }
    }
}

impl Value {
    /// Creates a binary value from any byte container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::Value;
    ///
    /// let blob = Value::binary(*b"ab");
    /// assert_eq!(blob.as_bytes(), Some(&b"ab"[..]));
    /// ```
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Binary(bytes.into())
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a byte sequence.
    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    /// Returns `true` if the value is a date-time.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(self, Value::DateTime(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a struct.
    #[inline]
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Value::Struct(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_struct(&self) -> Option<&WddxMap> {
        match self {
            Value::Struct(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Binary(_) => "binary",
            Value::DateTime(_) => "dateTime",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::BigInt(b)) => match i128::try_from(b) {
                Ok(v) => serializer.serialize_i128(v),
                Err(_) => serializer.collect_str(b),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Binary(bytes) => serializer.serialize_bytes(bytes),
            Value::DateTime(dt) => {
                serializer.collect_str(&dt.format(DATETIME_FORMAT))
            }
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Struct(map) => {
                use serde::ser::SerializeMap;
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(BigInt::from(value)))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Binary(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Binary(value.to_vec())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::DateTime(value.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<WddxMap> for Value {
    fn from(value: WddxMap) -> Self {
        Value::Struct(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
