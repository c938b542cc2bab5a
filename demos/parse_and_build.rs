//! Parse a messy document, patch it up, and print the result.
//!
//! Run with: cargo run --example parse_and_build

use dynjson::{parse, Value};

fn main() -> dynjson::Result<()> {
    // "name2" has no value; lenient parsing absorbs it as null.
    let text = r#"{ "name1":1234 , "name2" : , "name4" : 123.123 }"#;
    println!("input:  {}", text);

    let parsed = parse(text);
    println!("matched: {}, rest: {:?}", parsed.matched, parsed.rest);

    let mut data = parsed.value;
    *data.entry("name3")? = Value::from("hello_str");
    *data.entry("name1")? = Value::from(123.4231);

    println!("output: {}", data);
    Ok(())
}
