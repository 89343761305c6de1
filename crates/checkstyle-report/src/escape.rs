//! XML escaping for attribute values.
//!
//! Values are escaped exactly once. The five predefined entities cover
//! `& < > " '`; tab, newline and carriage return are written as character
//! references because attribute-value normalization would otherwise turn
//! them into spaces when the document is read back.

use crate::{Error, Result};
use std::borrow::Cow;

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = quick_xml::escape::escape(value);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Whether `ch` is allowed by the XML 1.0 `Char` production.
pub(crate) fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Reject values that no escaping can make valid XML.
pub fn check_representable(field: &'static str, value: &str) -> Result<()> {
    match value.chars().find(|ch| !is_xml_char(*ch)) {
        Some(character) => Err(Error::UnrepresentableText { field, character }),
        None => Ok(()),
    }
}
