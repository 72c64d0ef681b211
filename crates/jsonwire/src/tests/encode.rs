use alloc::{format, string::ToString, vec, vec::Vec};

use rstest::rstest;

use crate::{EncodeError, Map, Value, encode, parse};

#[rstest]
#[case::null(Value::Null, "null")]
#[case::true_(Value::Boolean(true), "true")]
#[case::false_(Value::Boolean(false), "false")]
#[case::integer(Value::Number(1.0), "1")]
#[case::fraction(Value::Number(1.5), "1.5")]
#[case::negative_zero(Value::Number(-0.0), "-0")]
#[case::small(Value::Number(0.5), "0.5")]
#[case::plain_string(Value::String("abc".into()), "\"abc\"")]
#[case::empty_array(Value::Array(vec![]), "[]")]
#[case::empty_object(Value::Object(Map::new()), "{}")]
fn encodes(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(encode(&value).unwrap(), expected);
}

#[test]
fn output_is_compact() {
    let doc = parse(" [ 1 , {\"a\" : [ true , null ] } ] ").unwrap();
    assert_eq!(encode(&doc).unwrap(), "[1,{\"a\":[true,null]}]");
}

#[test]
fn two_character_escapes_are_used() {
    let value = Value::String("Line\nBreak\tTab".into());
    assert_eq!(encode(&value).unwrap(), "\"Line\\nBreak\\tTab\"");
}

#[test]
fn full_escape_table() {
    let value = Value::String("\"\\\u{0008}\u{000C}\n\r\t".into());
    assert_eq!(encode(&value).unwrap(), "\"\\\"\\\\\\b\\f\\n\\r\\t\"");
}

#[test]
fn bare_control_bytes_use_unicode_escapes() {
    let value = Value::String("\u{0001}".into());
    assert_eq!(encode(&value).unwrap(), "\"\\u0001\"");

    let value = Value::String("\u{001F}\u{0000}".into());
    assert_eq!(encode(&value).unwrap(), "\"\\u001f\\u0000\"");
}

#[test]
fn solidus_is_not_escaped() {
    let value = Value::String("a/b".into());
    assert_eq!(encode(&value).unwrap(), "\"a/b\"");
}

#[test]
fn non_ascii_is_emitted_verbatim() {
    let value = Value::String("\u{1F525}\u{e9}".into());
    let encoded = encode(&value).unwrap();
    assert_eq!(encoded, "\"\u{1F525}\u{e9}\"");
}

#[test]
fn non_finite_numbers_fail() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(encode(&Value::Number(n)), Err(EncodeError::NonFiniteNumber));
    }

    let nested = Value::Array(vec![Value::Number(1.0), Value::Number(f64::NAN)]);
    assert_eq!(encode(&nested), Err(EncodeError::NonFiniteNumber));
}

#[test]
fn insertion_order_is_reproduced() {
    let mut map = Map::new();
    map.insert("z", Value::Number(1.0));
    map.insert("a", Value::Number(2.0));
    map.insert("m", Value::Number(3.0));
    assert_eq!(
        encode(&Value::Object(map)).unwrap(),
        "{\"z\":1,\"a\":2,\"m\":3}"
    );
}

#[test]
fn trees_built_through_the_mut_accessors_encode_in_order() {
    let mut doc = Value::Object(Map::new());
    {
        let members = doc.as_object_mut().unwrap();
        members.insert("items", Value::Array(vec![]));
        members.insert("count", Value::Number(0.0));
    }
    let items = doc
        .as_object_mut()
        .unwrap()
        .get_mut("items")
        .unwrap()
        .as_array_mut()
        .unwrap();
    items.push(Value::Number(1.0));
    items.push(Value::String("two".into()));

    assert_eq!(
        encode(&doc).unwrap(),
        "{\"items\":[1,\"two\"],\"count\":0}"
    );
    assert_eq!(doc.get("items").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn parsed_trees_can_be_extended_before_encoding() {
    let mut doc = parse("{\"a\":[1]}").unwrap();
    doc.as_object_mut()
        .unwrap()
        .insert("a", Value::Boolean(false));
    doc.as_object_mut()
        .unwrap()
        .get_mut("a")
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(Value::Number(2.0));

    // The duplicate lands after the original; lookup still sees the first.
    assert_eq!(encode(&doc).unwrap(), "{\"a\":[1,2],\"a\":false}");
    assert_eq!(doc.get("a").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn mut_accessors_reject_other_variants() {
    let mut value = Value::Boolean(true);
    assert!(value.as_array_mut().is_none());
    assert!(value.as_object_mut().is_none());

    let mut array = Value::Array(vec![]);
    assert!(array.as_object_mut().is_none());
}

#[test]
fn duplicate_keys_are_all_emitted() {
    let doc = parse("{\"a\":1,\"a\":2}").unwrap();
    assert_eq!(encode(&doc).unwrap(), "{\"a\":1,\"a\":2}");
}

#[test]
fn keys_are_escaped_like_values() {
    let mut map = Map::new();
    map.insert("a\"b", Value::Null);
    assert_eq!(encode(&Value::Object(map)).unwrap(), "{\"a\\\"b\":null}");
}

fn nested_array(depth: usize) -> Value {
    let mut value = Value::Array(vec![]);
    for _ in 1..depth {
        value = Value::Array(vec![value]);
    }
    value
}

#[test]
fn depth_limit_matches_the_decoder() {
    let deep = nested_array(crate::MAX_DEPTH - 1);
    let encoded = encode(&deep).unwrap();
    assert_eq!(parse(&encoded).unwrap(), deep);

    let too_deep = nested_array(crate::MAX_DEPTH);
    assert_eq!(encode(&too_deep), Err(EncodeError::DepthLimitExceeded));
}

#[test]
fn display_writes_the_wire_encoding() {
    let doc = parse("{\"k\":[1,\"v\"]}").unwrap();
    assert_eq!(doc.to_string(), "{\"k\":[1,\"v\"]}");
    assert_eq!(format!("{doc}"), encode(&doc).unwrap());
}

#[test]
fn pretty_output_is_indented_and_reparseable() {
    let doc = parse("{\"a\":[1,2],\"b\":{},\"c\":\"x\"}").unwrap();
    let text = doc.pretty(2).to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  \"a\": [");
    assert_eq!(lines[2], "    1,");
    assert!(lines.last().unwrap().ends_with('}'));

    // Cosmetic output, but still valid JSON for trees the encoder accepts.
    assert_eq!(parse(&text).unwrap(), doc);
}
