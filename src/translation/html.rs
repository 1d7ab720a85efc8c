//! HTML entity unescaping for translated text.
//!
//! The translation API returns text with HTML entities applied
//! (`&amp;`, `&#39;`, ...). This module reverses them for display.

// Entities longer than this are not recognized; avoids scanning the
// whole remaining input for a stray '&'.
const MAX_ENTITY_LEN: usize = 32;

/// Replace HTML entities in `text` with the characters they name.
///
/// Handles named entities and numeric character references, both
/// decimal (`&#243;`) and hexadecimal (`&#xF3;`). Anything
/// unrecognized or malformed is left verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some((decoded, len)) = decode_entity(rest) {
            out.push(decoded);
            rest = &rest[len..];
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Decode one entity at the start of `s` (which begins with '&').
/// Returns the character and the byte length consumed, including the
/// trailing ';'.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s
        .as_bytes()
        .iter()
        .take(MAX_ENTITY_LEN)
        .position(|&b| b == b';')?;
    let name = &s[1..semi];

    let decoded = if let Some(reference) = name.strip_prefix('#') {
        let code = if let Some(hex) = reference.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            reference.parse::<u32>().ok()?
        };
        char::from_u32(code)?
    } else {
        named_entity(name)?
    };

    Some((decoded, semi + 1))
}

fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "deg" => '\u{b0}',
        "middot" => '\u{b7}',
        _ => return None,
    };
    Some(ch)
}
