//! Packet format details: tag names, text forms and attribute quoting.

use chrono::{FixedOffset, TimeZone, Utc};
use serde_wddx::{wddx, Converter, Number, Value, WddxMap, WddxOptions};

fn packet(value: Value, force_type: bool) -> String {
    let mut data = WddxMap::new();
    data.insert("v".to_string(), value);
    Converter::with_options(data, WddxOptions::new().with_force_type(force_type))
        .unwrap()
        .serialize()
        .unwrap()
}

fn var(inner: &str) -> String {
    format!(
        "<wddxPacket version='1.0'><header/><data><struct><var name=\"v\">{}</var></struct></data></wddxPacket>",
        inner
    )
}

#[test]
fn test_scalar_tags() {
    let cases = [
        (Value::from(true), "<boolean>True</boolean>"),
        (Value::from(false), "<boolean>False</boolean>"),
        (Value::from(-7), "<number>-7</number>"),
        (Value::from(2.0), "<number>2.0</number>"),
        (Value::from(0.000015), "<number>1.5e-05</number>"),
        (Value::from(u64::MAX), "<number>18446744073709551615</number>"),
        (Value::from(""), "<string></string>"),
        (Value::from("plain"), "<string>plain</string>"),
        (Value::binary(Vec::new()), "<binary></binary>"),
        (Value::binary(*b"hello"), "<binary>aGVsbG8=</binary>"),
        (Value::Null, "<null/>"),
    ];

    for (value, expected) in cases {
        assert_eq!(packet(value, true), var(expected));
    }
}

#[test]
fn test_datetime_strings() {
    for text in [
        "2021-09-15 15:40:36",
        "2021-09-15T15:40:36Z",
        "2021-09-15T15:40:36.000+01:00",
    ] {
        let expected = format!("<dateTime>{}</dateTime>", text);
        assert_eq!(packet(Value::from(text), true), var(&expected));
    }

    for text in ["2021-09-15 15:40", "2023-10-26"] {
        let expected = format!("<string>{}</string>", text);
        assert_eq!(packet(Value::from(text), true), var(&expected));
    }
}

#[test]
fn test_chrono_values() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let local = offset.with_ymd_and_hms(2023, 10, 26, 14, 30, 0).unwrap();
    assert_eq!(
        packet(Value::from(local), true),
        var("<dateTime>2023-10-26 14:30:00-05:00</dateTime>")
    );

    let utc = Utc.with_ymd_and_hms(2021, 9, 15, 15, 40, 36).unwrap();
    assert_eq!(
        packet(Value::from(utc), false),
        var("<string>2021-09-15 15:40:36+00:00</string>")
    );
}

#[test]
fn test_unforced_binary_is_text() {
    assert_eq!(packet(Value::binary(*b"as"), false), var("<string>as</string>"));
}

#[test]
fn test_null_ignores_forced_typing() {
    assert_eq!(packet(Value::Null, false), packet(Value::Null, true));
    assert_eq!(
        packet(wddx!([null]), false),
        var("<array length=\"1\"><null/></array>")
    );
}

#[test]
fn test_attribute_quoting() {
    let wddx = packet(Value::from(1), false);
    assert!(wddx.starts_with("<wddxPacket version='1.0'>"));
    assert!(wddx.contains("<var name=\"v\">"));

    let data = wddx!({ "say \"hi\"": 1 });
    let wddx = Converter::new(data).unwrap().serialize().unwrap();
    assert!(wddx.contains("<var name=\"say &quot;hi&quot;\">"));
}

#[test]
fn test_key_quotes_are_entity_escaped() {
    let mut data = WddxMap::new();
    data.insert("k'\"<&".to_string(), Value::from(1));
    let wddx = Converter::new(data).unwrap().serialize().unwrap();
    assert!(wddx.contains("<var name=\"k&apos;&quot;&lt;&amp;\"><string>1</string></var>"));
}

#[test]
fn test_number_variants_render_exactly() {
    assert_eq!(Number::Integer(1).to_string(), "1");
    assert_eq!(Number::Float(1.8).to_string(), "1.8");
    assert_eq!(
        packet(Value::Number(Number::Float(f64::INFINITY)), true),
        var("<number>inf</number>")
    );
}
