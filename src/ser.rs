//! Textual rendering of value trees.
//!
//! This module renders a [`Value`] back to text using the grammar's token
//! shapes in reverse: objects as `{ "k":v , ... }`, arrays as
//! `[ v , ... ]`, strings re-quoted verbatim, scalars in their literal
//! form. It is a debug rendering, not a formatter: output parses back to a
//! structurally equal tree, but whitespace and object key order are not
//! guaranteed to match the original input, and string contents are written
//! without any escape re-encoding.
//!
//! The rendering is exposed three ways:
//!
//! - `impl Display for Value` — `format!("{}", value)`
//! - [`to_string`](crate::to_string) — convenience wrapper
//! - [`to_writer`](crate::to_writer) — write to any [`std::io::Write`]
//!
//! ## Examples
//!
//! ```rust
//! use dynjson::json;
//!
//! let value = json!([1, true, "x"]);
//! assert_eq!(value.to_string(), r#"[ 1 , true , "x" ]"#);
//! ```

use crate::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

pub(crate) fn write_value<W: fmt::Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Int(i) => write!(out, "{}", i),
        Value::Number(n) => write!(out, "{}", n),
        // Verbatim: string payloads hold literal characters only.
        Value::String(s) => write!(out, "\"{}\"", s),
        Value::Array(elements) => {
            out.write_str("[ ")?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.write_str(" , ")?;
                }
                write_value(out, element)?;
            }
            out.write_str(" ]")
        }
        Value::Object(members) => {
            out.write_str("{ ")?;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.write_str(" , ")?;
                }
                write!(out, "\"{}\":", key)?;
                write_value(out, member)?;
            }
            out.write_str(" }")
        }
    }
}
