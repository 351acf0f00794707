/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys keep their written order. Any other expression is converted
/// with [`to_value`](crate::to_value), falling back to `Null` if it cannot be.
///
/// Elements that are not single tokens (`-1`, `x + 1`) switch the whole array
/// or object to expression form, where nested `null` literals are unavailable.
///
/// ```rust
/// use serde_wddx::{wddx, Value};
///
/// let data = wddx!({
///     "name": "Alice",
///     "tags": ["rust", null, 3],
///     "active": true
/// });
///
/// let fields = data.as_struct().unwrap();
/// assert_eq!(fields.keys().next().map(String::as_str), Some("name"));
/// assert_eq!(fields.get("active"), Some(&Value::Bool(true)));
/// ```
#[macro_export]
macro_rules! wddx {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::wddx!($elem)),*])
    };

    ([ $($elem:expr),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::wddx!($elem)),*])
    };

    ({}) => {
        $crate::Value::Struct($crate::WddxMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::WddxMap::new();
        $(
            object.insert($key.to_string(), $crate::wddx!($value));
        )*
        $crate::Value::Struct(object)
    }};

    ({ $($key:literal : $value:expr),* $(,)? }) => {{
        let mut object = $crate::WddxMap::new();
        $(
            object.insert($key.to_string(), $crate::wddx!($value));
        )*
        $crate::Value::Struct(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
