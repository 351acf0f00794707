//! WDDX type tags and date-time recognition.
//!
//! A WDDX packet wraps every non-null scalar in exactly one type element. The
//! element name is one of the [`WddxType`] tags; null has no tag and is always
//! written as an empty `<null/>` element.
//!
//! Strings are promoted to `dateTime` when they look like an ISO-8601
//! timestamp. The check is a pattern match only: calendar validity (month 13,
//! second 61) is not verified.
//!
//! ```rust
//! use serde_wddx::types::is_datetime;
//!
//! assert!(is_datetime("2023-10-26 14:30:00-05:00"));
//! assert!(is_datetime("2021-09-15T15:40:36.000Z"));
//! assert!(!is_datetime("26/10/2023"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `YYYY-MM-DD` followed by a time of day and an optional offset.
static DATETIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?| \d{2}:\d{2}:\d{2}(?:Z|[+-]\d{2}:\d{2})?)$",
    )
    .expect("date-time pattern is a valid regex")
});

/// The element name a scalar value is wrapped in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WddxType {
    String,
    Number,
    Boolean,
    Binary,
    DateTime,
}

impl WddxType {
    /// Returns the XML element name for this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::WddxType;
    ///
    /// assert_eq!(WddxType::DateTime.as_str(), "dateTime");
    /// assert_eq!(WddxType::Boolean.as_str(), "boolean");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            WddxType::String => "string",
            WddxType::Number => "number",
            WddxType::Boolean => "boolean",
            WddxType::Binary => "binary",
            WddxType::DateTime => "dateTime",
        }
    }
}

impl fmt::Display for WddxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returns `true` if `s` is recognised as a WDDX date-time.
#[must_use]
pub fn is_datetime(s: &str) -> bool {
    DATETIME_PATTERN.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_datetime_forms() {
        for s in [
            "2021-09-15 15:40:36",
            "2021-09-15T15:40:36",
            "2021-09-15T15:40:36Z",
            "2021-09-15T15:40:36.000Z",
            "2021-09-15 15:40:36.123456+02:00",
            "2023-10-26 14:30:00-05:00",
        ] {
            assert!(is_datetime(s), "{s} should be a date-time");
        }
    }

    #[test]
    fn test_rejects_other_strings() {
        for s in [
            "",
            "1",
            "True",
            "2023-10-26",
            "2023-10-26T",
            "2023-10-26 14:30",
            "2023-10-26 14:30:00 ",
            " 2023-10-26",
            "2023-10-26 14:30:00+0500",
            "2023-10-26x14:30:00",
            "2023-10-26 14:30:00\n",
            "23-10-26",
        ] {
            assert!(!is_datetime(s), "{s:?} should not be a date-time");
        }
    }

    #[test]
    fn test_no_calendar_validation() {
        assert!(is_datetime("2023-13-45 25:61:61"));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(WddxType::String.to_string(), "string");
        assert_eq!(WddxType::Number.to_string(), "number");
        assert_eq!(WddxType::Binary.to_string(), "binary");
    }
}
