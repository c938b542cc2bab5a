//! The grammar-driven parser.
//!
//! This module converts JSON text into a [`Value`] tree via a fixed set of
//! mutually recursive rules, each of which skips insignificant whitespace
//! around its tokens:
//!
//! ```text
//! value    := object | array | quoted_string | number | integer
//!             | boolean | "null" | empty
//! object   := '{' ( member (',' member)* )? '}'
//! member   := quoted_string ':' value
//! array    := '[' ( value (',' value)* )? ']'
//! ```
//!
//! Alternatives are tried left to right and the first successful one wins.
//! Two consequences of that ordering are part of the observable contract:
//!
//! - The floating `number` rule runs before `integer` and also accepts a
//!   bare digit sequence, so every parsed numeric literal becomes
//!   [`Value::Number`]. [`Value::Int`] is only ever built programmatically.
//! - The trailing `empty` alternative matches zero input, so in lenient
//!   mode a value position where nothing matches is absorbed as `null`
//!   rather than reported — `{"a":}` parses to `{"a":null}`. Strict mode
//!   ([`ParseOptions::strict`]) removes the fallback; see
//!   [`crate::options`].
//!
//! ## Failure signaling
//!
//! Parsing never returns an error value. The [`Parsed`] result carries the
//! root value, a `matched` flag for whether the top-level rule succeeded,
//! and the unconsumed remainder of the input for the caller to inspect.
//! A failed top-level match yields a null root and leaves the whole input
//! in `rest`. Abandoned alternatives rewind the cursor, so nothing an
//! abandoned branch built is ever attached to the final tree.
//!
//! ## Usage
//!
//! ```rust
//! use dynjson::parse;
//!
//! let parsed = parse(r#"{"name":"Alice","score":12.5}"#);
//! assert!(parsed.matched);
//! assert_eq!(parsed.rest, "");
//! assert_eq!(parsed.value.get("name").unwrap().unwrap().as_str(), Some("Alice"));
//! ```

use crate::map::Map;
use crate::options::{Mode, ParseOptions};
use crate::value::Value;

/// The result of a parse: the root value plus match diagnostics.
///
/// Because of the lenient `empty` fallback, `matched` is true for almost
/// any input in the default mode — it reflects whether the top-level rule
/// engine succeeded, not semantic well-formedness. Callers that care about
/// trailing garbage should check that [`rest`](Parsed::rest) is empty.
///
/// # Examples
///
/// ```rust
/// use dynjson::parse;
///
/// let parsed = parse("123 trailing");
/// assert!(parsed.matched);
/// assert_eq!(parsed.value.as_f64(), Some(123.0));
/// assert_eq!(parsed.rest, "trailing");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a> {
    /// The root of the materialized tree. Null when the match failed.
    pub value: Value,
    /// Whether the top-level rule reported success.
    pub matched: bool,
    /// The unconsumed remainder of the input.
    pub rest: &'a str,
}

/// Parses JSON text with the default (lenient) options.
///
/// # Examples
///
/// ```rust
/// use dynjson::parse;
///
/// let parsed = parse("[3,1,2]");
/// assert!(parsed.matched);
/// assert_eq!(parsed.value.len().unwrap(), 3);
/// ```
#[must_use]
pub fn parse(input: &str) -> Parsed<'_> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses JSON text with explicit options.
///
/// # Examples
///
/// ```rust
/// use dynjson::{parse_with_options, ParseOptions};
///
/// let parsed = parse_with_options(r#"{"a":}"#, ParseOptions::strict());
/// assert!(!parsed.matched);
/// assert!(parsed.value.is_null());
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Parsed<'_> {
    let mut parser = Parser::new(input, options);

    match parser.value() {
        Some(value) => {
            parser.skip_whitespace();
            Parsed {
                value,
                matched: true,
                rest: parser.rest(),
            }
        }
        None => Parsed {
            value: Value::Null,
            matched: false,
            rest: input,
        },
    }
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            options,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Skips whitespace, then consumes `token` if it is next.
    fn eat(&mut self, token: char) -> bool {
        self.skip_whitespace();
        if self.peek_char() == Some(token) {
            self.next_char();
            true
        } else {
            false
        }
    }

    /// Consumes `word` literally. No word-boundary check: `nullx` matches
    /// the `null` keyword and leaves `x` unconsumed.
    fn tag(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word) {
            self.position += word.len();
            true
        } else {
            false
        }
    }

    /// Consumes a run of ASCII digits, returning how many were consumed.
    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.next_char();
            count += 1;
        }
        count
    }

    /// The `value` rule: alternatives in order, first match wins.
    fn value(&mut self) -> Option<Value> {
        self.skip_whitespace();

        if let Some(value) = self.object() {
            return Some(value);
        }
        if let Some(value) = self.array() {
            return Some(value);
        }
        if let Some(text) = self.quoted_string() {
            return Some(Value::String(text));
        }
        if let Some(number) = self.number() {
            return Some(Value::Number(number));
        }
        // The integer alternative would come next, but the floating rule
        // above already consumes every bare digit sequence, so it can
        // never be reached from here. Int values exist only through
        // programmatic construction.
        if let Some(flag) = self.boolean() {
            return Some(Value::Bool(flag));
        }
        if self.tag("null") {
            return Some(Value::Null);
        }

        // The `empty` fallback: matches zero input.
        match self.options.mode {
            Mode::Lenient => Some(Value::Null),
            Mode::Strict => None,
        }
    }

    /// `object := '{' ( member (',' member)* )? '}'`
    ///
    /// Duplicate keys overwrite: map insertion semantics, last write wins.
    fn object(&mut self) -> Option<Value> {
        let checkpoint = self.position;

        if !self.eat('{') {
            self.position = checkpoint;
            return None;
        }

        let mut members = Map::new();

        if self.eat('}') {
            return Some(Value::Object(members));
        }

        loop {
            let Some((key, value)) = self.member() else {
                self.position = checkpoint;
                return None;
            };
            members.insert(key, value);

            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                return Some(Value::Object(members));
            }
            self.position = checkpoint;
            return None;
        }
    }

    /// `member := quoted_string ':' value`
    ///
    /// No rewind of its own: the enclosing object rule rewinds wholesale
    /// when a member fails.
    fn member(&mut self) -> Option<(String, Value)> {
        let key = self.quoted_string()?;
        if !self.eat(':') {
            return None;
        }
        let value = self.value()?;
        Some((key, value))
    }

    /// `array := '[' ( value (',' value)* )? ']'`
    fn array(&mut self) -> Option<Value> {
        let checkpoint = self.position;

        if !self.eat('[') {
            self.position = checkpoint;
            return None;
        }

        let mut elements = Vec::new();

        if self.eat(']') {
            return Some(Value::Array(elements));
        }

        loop {
            let Some(value) = self.value() else {
                self.position = checkpoint;
                return None;
            };
            elements.push(value);

            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                return Some(Value::Array(elements));
            }
            self.position = checkpoint;
            return None;
        }
    }

    /// `quoted_string := '"' char_except_quote* '"'`
    ///
    /// Characters between the quotes are taken literally; there is no
    /// escape decoding, so `"` always terminates the string.
    fn quoted_string(&mut self) -> Option<String> {
        let checkpoint = self.position;

        self.skip_whitespace();
        if self.peek_char() != Some('"') {
            self.position = checkpoint;
            return None;
        }
        self.next_char();

        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch == '"' {
                let text = self.input[start..self.position].to_string();
                self.next_char();
                return Some(text);
            }
            self.next_char();
        }

        // Unterminated string.
        self.position = checkpoint;
        None
    }

    /// Floating-point literal: optional sign, digits, optional fraction,
    /// optional exponent. A `.` not followed by a digit is left alone.
    fn number(&mut self) -> Option<f64> {
        let checkpoint = self.position;

        self.skip_whitespace();
        let start = self.position;

        if matches!(self.peek_char(), Some('+' | '-')) {
            self.next_char();
        }

        if self.digits() == 0 {
            self.position = checkpoint;
            return None;
        }

        if self.fraction_ahead() {
            self.next_char();
            self.digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let mark = self.position;
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            if self.digits() == 0 {
                self.position = mark;
            }
        }

        match self.input[start..self.position].parse::<f64>() {
            Ok(number) => Some(number),
            Err(_) => {
                self.position = checkpoint;
                None
            }
        }
    }

    fn fraction_ahead(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next() == Some('.') && matches!(chars.next(), Some(c) if c.is_ascii_digit())
    }

    /// `boolean := "true" | "false"`
    fn boolean(&mut self) -> Option<bool> {
        if self.tag("true") {
            Some(true)
        } else if self.tag("false") {
            Some(false)
        } else {
            None
        }
    }
}
