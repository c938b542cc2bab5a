use dynjson::{json, parse, to_string, Map, Value};

#[test]
fn test_scalars() {
    assert_eq!(json!(null), Value::Null);
    assert_eq!(json!(true), Value::Bool(true));
    assert_eq!(json!(false), Value::Bool(false));
    assert_eq!(json!("text"), Value::String("text".to_string()));
}

#[test]
fn test_integer_literals_build_int_values() {
    // Programmatic construction is the one source of the Int variant;
    // the same literal arriving through the parser is a Number.
    assert_eq!(json!(42), Value::Int(42));
    assert_eq!(parse("42").value, Value::Number(42.0));
}

#[test]
fn test_float_literals_build_number_values() {
    assert_eq!(json!(3.5), Value::Number(3.5));
}

#[test]
fn test_arrays() {
    assert_eq!(json!([]), Value::Array(vec![]));

    let arr = json!([1, "two", false, null]);
    assert_eq!(arr.len().unwrap(), 4);
    assert_eq!(arr.at(0).unwrap(), &Value::Int(1));
    assert_eq!(arr.at(1).unwrap().as_str(), Some("two"));
    assert_eq!(arr.at(2).unwrap().as_bool(), Some(false));
    assert!(arr.at(3).unwrap().is_null());
}

#[test]
fn test_objects() {
    assert_eq!(json!({}), Value::Object(Map::new()));

    let obj = json!({
        "name": "Alice",
        "age": 30,
    });
    assert_eq!(obj.get("name").unwrap().unwrap().as_str(), Some("Alice"));
    assert_eq!(obj.get("age").unwrap().unwrap().as_i64(), Some(30));
}

#[test]
fn test_nested_trees() {
    let config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "limits": { "depth": 4 }
    });

    assert_eq!(config.get("host").unwrap().unwrap().as_str(), Some("localhost"));
    assert_eq!(config.get("features").unwrap().unwrap().len().unwrap(), 2);
    let limits = config.get("limits").unwrap().unwrap();
    assert_eq!(limits.get("depth").unwrap().unwrap().as_i64(), Some(4));
}

#[test]
fn test_macro_trees_render_and_reparse() {
    let value = json!({ "a": [true, null], "b": "x" });
    let reparsed = parse(&to_string(&value)).value;

    // Int literals come back as Number after a parse; this tree has none,
    // so the round trip is exact.
    assert_eq!(reparsed, value);
}

#[test]
fn test_expression_fallback() {
    let name = String::from("dynamic");
    assert_eq!(json!(name.clone()), Value::String("dynamic".to_string()));

    let count: u16 = 7;
    assert_eq!(json!(count), Value::Int(7));
}
