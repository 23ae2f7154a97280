//! Unicode escape translation (JLS §3.3).
//!
//! Runs before anything else and knows nothing about comments or literals:
//! `\u000a` inside a line comment still becomes a newline, and `\u0022`
//! still becomes a quote that opens or closes a string.
//!
//! # Recognized form
//!
//! `\` followed by one or more `u`, followed by exactly four hex digits.
//! Redundant `u`s (`\uuu0041`) are equivalent to one. Anything else is left
//! untouched, silently.
//!
//! # Backslash parity
//!
//! A backslash immediately preceded by an odd number of raw backslashes is
//! itself escaped, so it cannot introduce a Unicode escape:
//!
//! | Raw text     | Result        |
//! |--------------|---------------|
//! | `\u0041`     | `A`           |
//! | `\\u0041`    | `\\u0041`     |
//! | `\\\u0041`   | `\\A`         |
//!
//! Only raw backslashes count. A backslash produced by decoding (`\u005c`)
//! never protects or introduces a later escape.

use std::borrow::Cow;

/// Which decoded code points the translator is allowed to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EscapeRange {
    /// Every well-formed escape decodes. A UTF-16 surrogate pair written as
    /// two consecutive escapes decodes to one supplementary character; a lone
    /// surrogate escape is left untouched.
    #[default]
    Unicode,
    /// Only escapes below U+0080 decode. All meaningful Java syntax lives in
    /// this range.
    Ascii,
}

impl EscapeRange {
    #[inline]
    fn admits(self, unit: u16) -> bool {
        match self {
            EscapeRange::Unicode => true,
            EscapeRange::Ascii => unit < 0x80,
        }
    }
}

/// Whether a backslash preceded by `preceding_backslashes` raw backslashes
/// may introduce a Unicode escape.
#[inline]
pub const fn escape_is_live(preceding_backslashes: usize) -> bool {
    preceding_backslashes % 2 == 0
}

/// Parse a Unicode escape at the start of `window`.
///
/// Returns the UTF-16 code unit and the byte length of the whole escape
/// (backslash, every `u`, four digits), or `None` if `window` does not start
/// with a well-formed escape. Parity is not checked here.
pub fn parse_escape(window: &[u8]) -> Option<(u16, usize)> {
    let (&first, rest) = window.split_first()?;
    if first != b'\\' {
        return None;
    }
    let u_run = rest.iter().take_while(|&&b| b == b'u').count();
    if u_run == 0 {
        return None;
    }
    let digits_at = 1 + u_run;
    let digits = window.get(digits_at..digits_at + 4)?;
    let mut unit = 0u16;
    for &b in digits {
        unit = (unit << 4) | hex_digit(b)?;
    }
    Some((unit, digits_at + 4))
}

#[inline]
fn hex_digit(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
        _ => None,
    }
}

/// Decode the escape starting at `bytes[at]` into a character.
///
/// A high surrogate only decodes together with an immediately following low
/// surrogate escape; the returned length then covers both escapes.
fn decode_at(bytes: &[u8], at: usize, range: EscapeRange) -> Option<(char, usize)> {
    let (unit, len) = parse_escape(&bytes[at..])?;
    if !range.admits(unit) {
        return None;
    }
    match unit {
        0xD800..=0xDBFF => {
            let (low, low_len) = parse_escape(&bytes[at + len..])?;
            let ch = char::decode_utf16([unit, low]).next()?.ok()?;
            Some((ch, len + low_len))
        }
        0xDC00..=0xDFFF => None,
        _ => char::from_u32(u32::from(unit)).map(|ch| (ch, len)),
    }
}

/// Replace every live, well-formed Unicode escape in `raw`.
///
/// Returns `Cow::Borrowed` when nothing was decoded.
pub fn translate_unicode_escapes(raw: &str, range: EscapeRange) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let mut translated: Option<String> = None;
    // Bytes of `raw` already moved into `translated`.
    let mut copied = 0;
    let mut pos = 0;
    // Raw backslashes immediately before `pos`.
    let mut run = 0usize;

    while let Some(offset) = memchr::memchr(b'\\', &bytes[pos..]) {
        let at = pos + offset;
        if offset > 0 {
            run = 0;
        }
        if escape_is_live(run) {
            if let Some((ch, len)) = decode_at(bytes, at, range) {
                let out = translated.get_or_insert_with(|| String::with_capacity(raw.len()));
                out.push_str(&raw[copied..at]);
                out.push(ch);
                copied = at + len;
                pos = copied;
                run = 0;
                continue;
            }
        }
        run += 1;
        pos = at + 1;
    }

    match translated {
        None => Cow::Borrowed(raw),
        Some(mut out) => {
            out.push_str(&raw[copied..]);
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests;
