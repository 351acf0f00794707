//! Configuration options for WDDX serialization.
//!
//! [`WddxOptions`] controls two independent concerns:
//!
//! - **Type inference**: with `force_type` off (the default) every scalar is
//!   written as a `<string>`; with it on, the native value kind picks the tag.
//! - **Layout**: compact single-line output (the default) or pretty-printed
//!   output with one element per line.
//!
//! ## Examples
//!
//! ```rust
//! use serde_wddx::{to_string_with_options, WddxOptions};
//! use std::collections::BTreeMap;
//!
//! let mut data = BTreeMap::new();
//! data.insert("count", 3);
//!
//! let options = WddxOptions::new().with_force_type(true);
//! let wddx = to_string_with_options(&data, options).unwrap();
//! assert!(wddx.contains("<number>3</number>"));
//! ```

/// Configuration options for WDDX serialization.
///
/// # Examples
///
/// ```rust
/// use serde_wddx::WddxOptions;
///
/// // Default compact options, inference disabled
/// let options = WddxOptions::new();
///
/// // Pretty-printed with 4-space indentation
/// let options = WddxOptions::pretty();
///
/// // Custom configuration
/// let options = WddxOptions::new()
///     .with_force_type(true)
///     .with_pretty(true)
///     .with_indent(2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WddxOptions {
    pub force_type: bool,
    pub pretty: bool,
    pub indent: usize,
}

impl Default for WddxOptions {
    fn default() -> Self {
        WddxOptions {
            force_type: false,
            pretty: false,
            indent: 4,
        }
    }
}

impl WddxOptions {
    /// Creates default options (compact, no type inference, 4-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::WddxOptions;
    ///
    /// let options = WddxOptions::new();
    /// assert_eq!(options.indent, 4);
    /// assert!(!options.pretty);
    /// assert!(!options.force_type);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        WddxOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Enables or disables type inference.
    ///
    /// When disabled every scalar is emitted as `<string>` and the caller is
    /// responsible for pre-formatting values.
    #[must_use]
    pub fn with_force_type(mut self, force_type: bool) -> Self {
        self.force_type = force_type;
        self
    }

    /// Enables or disables pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 4. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::WddxOptions;
    ///
    /// let options = WddxOptions::pretty().with_indent(2);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
