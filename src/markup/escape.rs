//! Conversion between literal text and the markup's reserved-character escapes.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

const RESERVED: [char; 7] = ['&', '<', '>', '[', ']', '\'', '"'];

/// Replace each reserved character with its named entity.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(&RESERVED[..]) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '[' => result.push_str("&lsqb;"),
            ']' => result.push_str("&rsqb;"),
            '\'' => result.push_str("&apos;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Restore characters from named and printable-ASCII numeric entities.
///
/// Entity-like sequences that are not recognized pass through verbatim.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    let entity_regex = ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z]+);").expect("Invalid entity regex")
    });

    entity_regex.replace_all(text, |caps: &Captures| match decode_entity(&caps[1]) {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    })
}

/// Decode the body of an entity (between `&` and `;`).
fn decode_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(&['x', 'X'][..]) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return if (32..=126).contains(&code) {
            char::from_u32(code)
        } else {
            None
        };
    }

    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "lsqb" | "lbrack" => Some('['),
        "rsqb" | "rbrack" => Some(']'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => None,
    }
}
