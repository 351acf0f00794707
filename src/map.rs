//! Ordered map type for WDDX structs.
//!
//! [`WddxMap`] wraps an [`IndexMap`] so that `<var>` elements are emitted in
//! the order their keys were inserted. Keys are never sorted.
//!
//! ## Examples
//!
//! ```rust
//! use serde_wddx::{WddxMap, Value};
//!
//! let mut map = WddxMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to WDDX values.
///
/// # Examples
///
/// ```rust
/// use serde_wddx::{WddxMap, Value};
///
/// let mut map = WddxMap::new();
/// map.insert("second".to_string(), Value::from(2));
/// map.insert("first".to_string(), Value::from(1));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WddxMap(IndexMap<String, Value>);

impl WddxMap {
    /// Creates an empty `WddxMap`.
    #[must_use]
    pub fn new() -> Self {
        WddxMap(IndexMap::new())
    }

    /// Creates an empty `WddxMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WddxMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Re-inserting an existing key replaces its value but keeps its original
    /// position; the old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for WddxMap {
    fn from(map: HashMap<String, Value>) -> Self {
        WddxMap(map.into_iter().collect())
    }
}

impl From<IndexMap<String, Value>> for WddxMap {
    fn from(map: IndexMap<String, Value>) -> Self {
        WddxMap(map)
    }
}

impl IntoIterator for WddxMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WddxMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for WddxMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        WddxMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
