//! Property-based tests for type inference and packet structure.

use proptest::prelude::*;
use serde_wddx::{Converter, Value, WddxMap, WddxOptions, WddxType};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::from),
    ]
}

fn converter(data: WddxMap, force_type: bool) -> Converter {
    Converter::with_options(data, WddxOptions::new().with_force_type(force_type)).unwrap()
}

fn single(value: Value) -> WddxMap {
    let mut map = WddxMap::new();
    map.insert("v".to_string(), value);
    map
}

proptest! {
    #[test]
    fn prop_unforced_is_always_string(value in scalar()) {
        let c = converter(single(Value::from(1)), false);
        prop_assert_eq!(c.classify(&value), WddxType::String);
    }

    #[test]
    fn prop_forced_integers_are_numbers(n in any::<i64>()) {
        let c = converter(single(Value::from(n)), true);
        prop_assert_eq!(c.classify(&Value::from(n)), WddxType::Number);
        let wddx = c.serialize().unwrap();
        let expected = format!("<number>{}</number>", n);
        prop_assert!(wddx.contains(&expected));
    }

    #[test]
    fn prop_forced_bytes_are_binary(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let c = converter(single(Value::from(bytes.clone())), true);
        prop_assert_eq!(c.classify(&Value::from(bytes)), WddxType::Binary);
    }

    #[test]
    fn prop_generated_timestamps_are_datetimes(
        y in 0u32..10000, mo in 0u32..100, d in 0u32..100,
        h in 0u32..100, mi in 0u32..100, s in 0u32..100,
        sep in prop::sample::select(vec!["T", " "]),
    ) {
        let c = converter(single(Value::Null), true);
        let text = format!("{:04}-{:02}-{:02}{}{:02}:{:02}:{:02}", y, mo, d, sep, h, mi, s);
        prop_assert_eq!(c.classify(&Value::from(text)), WddxType::DateTime);
    }

    #[test]
    fn prop_array_length_matches_children(items in prop::collection::vec(scalar(), 0..20)) {
        let len = items.len();
        let nulls = items.iter().filter(|v| v.is_null()).count();
        let wddx = converter(single(Value::Array(items)), true).serialize().unwrap();

        let length_attr = format!("<array length=\"{}\">", len);
        prop_assert!(wddx.contains(&length_attr));
        prop_assert_eq!(wddx.matches("<null/>").count(), nulls);

        let children: usize = ["<string>", "<number>", "<boolean>", "<binary>", "<dateTime>", "<null/>"]
            .iter()
            .map(|tag| wddx.matches(tag).count())
            .sum();
        prop_assert_eq!(children, len);
    }

    #[test]
    fn prop_dates_without_time_stay_strings(y in 0u32..10000, mo in 0u32..100, d in 0u32..100) {
        let c = converter(single(Value::Null), true);
        let text = format!("{:04}-{:02}-{:02}", y, mo, d);
        prop_assert_eq!(c.classify(&Value::from(text)), WddxType::String);
    }

    #[test]
    fn prop_var_order_is_insertion_order(keys in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut map = WddxMap::new();
        for key in &keys {
            map.insert(key.clone(), Value::from(1));
        }
        let expected: Vec<String> = map.keys().cloned().collect();
        let wddx = converter(map, false).serialize().unwrap();

        let mut position = 0;
        for key in expected {
            let needle = format!("<var name=\"{}\">", key);
            let found = wddx[position..].find(&needle);
            prop_assert!(found.is_some());
            position += found.unwrap_or(0) + needle.len();
        }
    }

    #[test]
    fn prop_serialize_is_idempotent(value in scalar(), force in any::<bool>(), pretty in any::<bool>()) {
        let c = Converter::with_options(
            single(value),
            WddxOptions::new().with_force_type(force).with_pretty(pretty),
        ).unwrap();
        prop_assert_eq!(c.serialize().unwrap(), c.serialize().unwrap());
    }
}
