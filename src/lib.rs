//! # dynjson
//!
//! A dynamically-typed JSON value model with a lenient, grammar-driven parser.
//!
//! ## What is dynjson?
//!
//! dynjson materializes JSON text into a tree of owned [`Value`] nodes —
//! objects, arrays, strings, integers, floating numbers, booleans, null —
//! and lets you build and mutate the same trees programmatically. It is a
//! library-level parser: no I/O, no configuration files, no streaming. The
//! whole surface is the value type and the parse entry point.
//!
//! ## Key Features
//!
//! - **Dynamic trees**: work with JSON whose shape isn't known at compile
//!   time, with checked accessors that fail loudly on variant mismatch
//! - **Auto-vivification**: indexing an object by a missing key creates a
//!   `null` there, so trees grow key by key as they are assigned
//! - **Lenient by default**: an unmatched value position is absorbed as
//!   `null` instead of failing the whole document; strict mode is a flag
//!   away
//! - **Serde Compatible**: `Value` implements `Serialize`/`Deserialize`
//!   for interop with the wider serde ecosystem
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dynjson = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use dynjson::parse;
//!
//! let parsed = parse(r#"{ "name":"Alice" , "scores":[3,1,2] }"#);
//! assert!(parsed.matched);
//!
//! let root = parsed.value;
//! assert_eq!(root.get("name").unwrap().unwrap().as_str(), Some("Alice"));
//! assert_eq!(root.get("scores").unwrap().unwrap().len().unwrap(), 3);
//! ```
//!
//! ### Building and Mutating Trees
//!
//! ```rust
//! use dynjson::{json, Value};
//!
//! let mut data = json!({ "name1": 1234 });
//! *data.entry("name3").unwrap() = Value::from("hello_str");
//! *data.entry("name1").unwrap() = Value::from(123.4231);
//!
//! assert_eq!(data.entry("name1").unwrap().as_f64(), Some(123.4231));
//! ```
//!
//! ### Rendering
//!
//! ```rust
//! use dynjson::{json, parse, to_string};
//!
//! let value = json!({ "a": [1.5, 2.5] });
//! let text = to_string(&value);
//!
//! // Round-trip is semantic: the reparsed tree is structurally equal.
//! assert_eq!(parse(&text).value, value);
//! ```
//!
//! ## Numeric Classification
//!
//! The grammar tries its floating-point alternative before the integer
//! one, and the floating rule also accepts plain digit sequences — so a
//! parsed `123` is a [`Value::Number`], never a [`Value::Int`]. Integer
//! values exist only through programmatic construction (`Value::from(42)`,
//! `json!(42)`). See [`parser`] for the full rule ordering.
//!
//! ## Failure Model
//!
//! Grammar-level failure is reported only through the
//! [`matched`](Parsed::matched) flag and the unconsumed
//! [`rest`](Parsed::rest) slice; malformed input never raises an error.
//! Accessor misuse (indexing a string by key, taking the length of an
//! object) raises [`Error::WrongVariant`] at the call site and never
//! mutates the value. See [`error`] for the two channels.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`parse_and_build.rs`** - parse a messy document, mutate it, print it
//! - **`dynamic_values.rs`** - working with Value dynamically
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::Map;
pub use options::{Mode, ParseOptions};
pub use parser::{parse, parse_with_options, Parsed};
pub use value::Value;

use std::io;

/// Renders a value tree to a string.
///
/// Equivalent to `value.to_string()`; see [`ser`] for the rendering shape.
///
/// # Examples
///
/// ```rust
/// use dynjson::{json, to_string};
///
/// let value = json!({ "k": 1 });
/// assert_eq!(to_string(&value), r#"{ "k":1 }"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

/// Renders a value tree to a writer.
///
/// # Examples
///
/// ```rust
/// use dynjson::{json, to_writer};
///
/// let value = json!([1, 2]);
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &value).unwrap();
/// assert_eq!(buffer, b"[ 1 , 2 ]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(value.to_string().as_bytes())?;
    Ok(())
}
