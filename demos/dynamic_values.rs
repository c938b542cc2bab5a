//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use dynjson::{json, parse_with_options, ParseOptions, Value};

fn main() -> dynjson::Result<()> {
    // Build config dynamically with the json! macro
    let config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config: {}\n", config);

    // Access values dynamically
    if let Some(host) = config.get("host")?.and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = config.get("port")?.and_then(Value::as_i64) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(features) = config.get("features")? {
        println!("Accessing field 'features': {} items\n", features.len()?);
    }

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", config.is_object());
    println!("  is_array:  {}", config.is_array());
    println!("  is_string: {}", config.is_string());

    // Strict parsing refuses what lenient parsing absorbs
    let strict = parse_with_options(r#"{ "incomplete": }"#, ParseOptions::strict());
    println!("\nStrict parse of an incomplete member: matched = {}", strict.matched);

    Ok(())
}
