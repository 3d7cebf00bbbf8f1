//! Term sanitization.
//!
//! Terms end up inside single-quoted script string literals, so every term
//! is escaped with ECMAScript string rules after underscores are turned into
//! spaces.

use std::fmt::Write;

/// Sanitizes one raw term: underscores become spaces, then the result is
/// escaped for a script string literal.
#[must_use]
pub fn sanitize_term(raw: &str) -> String {
    escape_ecmascript(&raw.replace('_', " "))
}

/// Escapes a string for embedding in an ECMAScript string literal.
///
/// Quotes, backslash and `/` get a backslash. The common control characters
/// use their short forms. Everything else outside printable ASCII becomes
/// `\uXXXX`, with astral characters written as a surrogate pair.
#[must_use]
pub fn escape_ecmascript(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c < ' ' || c > '\u{7f}' => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
    out
}
