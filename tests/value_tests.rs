use dynjson::{json, parse, Error, Map, Value};

#[test]
fn test_deep_copy_is_independent() {
    let a = parse(r#"{"x":[1,2]}"#).value;
    let mut b = a.clone();

    *b.entry("x").unwrap().at_mut(0).unwrap() = Value::from(99);

    assert_eq!(b.get("x").unwrap().unwrap().at(0).unwrap().as_i64(), Some(99));
    assert_eq!(a.get("x").unwrap().unwrap().at(0).unwrap().as_f64(), Some(1.0));
}

#[test]
fn test_take_leaves_source_null() {
    let mut a = json!({"x": [1, 2]});
    let b = a.take();

    assert!(a.is_null());
    assert!(b.is_object());
    assert_eq!(b.get("x").unwrap().unwrap().len().unwrap(), 2);
}

#[test]
fn test_reassignment_replaces_payload() {
    let mut value = json!([1, 2, 3]);
    value = Value::from("replaced");
    assert_eq!(value.as_str(), Some("replaced"));

    value.reset();
    assert!(value.is_null());
}

#[test]
fn test_wrong_variant_on_string_by_key() {
    let mut text = Value::from("payload");

    let err = text.entry("k").unwrap_err();
    match err {
        Error::WrongVariant { expected, found, .. } => {
            assert_eq!(expected, "object");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // A failed access never mutates the value.
    assert_eq!(text.as_str(), Some("payload"));
}

#[test]
fn test_wrong_variant_on_string_by_position() {
    let text = Value::from("payload");

    assert!(text.at(0).is_err());
    assert!(text.len().is_err());
    assert_eq!(text.as_str(), Some("payload"));
}

#[test]
fn test_wrong_variant_message_names_the_operation() {
    let mut number = Value::from(1.5);

    let err = number.entry("k").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("indexing by key"), "message was: {message}");
    assert!(message.contains("object"), "message was: {message}");
    assert!(message.contains("number"), "message was: {message}");
}

#[test]
fn test_entry_on_vivified_null_fails() {
    // Vivification inserts null; indexing that null a level deeper is a
    // variant mismatch until an object is assigned there.
    let mut root = Value::Object(Map::new());
    assert!(root.entry("a").unwrap().entry("b").is_err());

    *root.entry("a").unwrap() = Value::Object(Map::new());
    *root.entry("a").unwrap().entry("b").unwrap() = Value::from(1);
    assert_eq!(root.get("a").unwrap().unwrap().get("b").unwrap().unwrap().as_i64(), Some(1));
}

#[test]
fn test_has_and_get_do_not_vivify() {
    let mut obj = json!({"present": 1});

    assert_eq!(obj.has("present").unwrap(), true);
    assert_eq!(obj.has("absent").unwrap(), false);
    assert!(obj.get("absent").unwrap().is_none());
    assert_eq!(obj.as_object().unwrap().len(), 1);

    assert!(obj.entry("absent").unwrap().is_null());
    assert_eq!(obj.as_object().unwrap().len(), 2);
}

#[test]
fn test_has_on_non_object_fails() {
    assert!(Value::from(true).has("k").is_err());
    assert!(Value::Null.has("k").is_err());
}

#[test]
fn test_len_only_counts_arrays() {
    assert_eq!(json!([1, 2, 3]).len().unwrap(), 3);
    assert!(json!({"a": 1}).len().is_err());
    assert!(Value::Null.len().is_err());
}

#[test]
fn test_parsed_tree_is_mutable_like_any_other() {
    let mut data = parse(r#"{ "name1":1234 , "name2" : , "name4" : 123.123 }"#).value;

    *data.entry("name3").unwrap() = Value::from("hello_str");
    *data.entry("name1").unwrap() = Value::from(123.4231);

    assert_eq!(data.as_object().unwrap().len(), 4);
    assert_eq!(data.entry("name1").unwrap().as_f64(), Some(123.4231));
    assert_eq!(data.entry("name3").unwrap().as_str(), Some("hello_str"));
    assert!(data.entry("name2").unwrap().is_null());
}

#[test]
fn test_map_duplicate_insert_overwrites() {
    let mut map = Map::new();
    assert!(map.insert("k".to_string(), Value::from(1)).is_none());
    let old = map.insert("k".to_string(), Value::from(2));
    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("k").and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn test_map_equality_ignores_order() {
    let a: Map = vec![
        ("x".to_string(), Value::from(1)),
        ("y".to_string(), Value::from(2)),
    ]
    .into_iter()
    .collect();
    let b: Map = vec![
        ("y".to_string(), Value::from(2)),
        ("x".to_string(), Value::from(1)),
    ]
    .into_iter()
    .collect();

    assert_eq!(a, b);
}

#[test]
fn test_from_iterators() {
    let arr: Value = (1..=3).map(Value::from).collect();
    assert_eq!(arr, json!([1, 2, 3]));

    let obj: Value = vec![("a".to_string(), Value::from(1))].into_iter().collect();
    assert_eq!(obj, json!({"a": 1}));
}

#[test]
fn test_serde_serialize_matches_serde_json() {
    let value = json!({"a": [1, 2.5, "x", true, null]});
    let rendered = serde_json::to_string(&value).unwrap();
    assert_eq!(rendered, r#"{"a":[1,2.5,"x",true,null]}"#);
}

#[test]
fn test_serde_deserialize_from_serde_json() {
    let value: Value = serde_json::from_str(r#"{"a":[1,2.5,"x",true,null]}"#).unwrap();

    let arr = value.get("a").unwrap().unwrap();
    assert_eq!(arr.at(0).unwrap().as_i64(), Some(1));
    assert_eq!(arr.at(1).unwrap().as_f64(), Some(2.5));
    assert_eq!(arr.at(2).unwrap().as_str(), Some("x"));
    assert_eq!(arr.at(3).unwrap().as_bool(), Some(true));
    assert!(arr.at(4).unwrap().is_null());
}

#[test]
#[should_panic]
fn test_out_of_range_position_panics() {
    let arr = json!([1]);
    let _ = arr.at(5);
}
