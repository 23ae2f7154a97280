//! Line terminator normalization (JLS §3.4).
//!
//! Must run after Unicode escape translation: `\u000d` and `\u000a` produce
//! real terminators that take part in normalization and line counting.
//! Every `\r\n`, lone `\r`, and lone `\n` becomes `\n`.

use std::borrow::Cow;

use bitflags::bitflags;

bitflags! {
    /// Line terminator styles seen in a text.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct LineTerminators: u8 {
        /// `\r\n` (Windows).
        const CRLF = 1 << 0;
        /// Lone `\r` (classic Mac).
        const CR = 1 << 1;
        /// Lone `\n` (Unix).
        const LF = 1 << 2;
    }
}

impl LineTerminators {
    /// More than one style appeared in the same text.
    #[inline]
    pub fn is_mixed(self) -> bool {
        self.bits().count_ones() > 1
    }
}

/// Text with every line terminator folded to `\n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    text: Cow<'a, str>,
    line_breaks: u32,
    styles: LineTerminators,
}

impl<'a> NormalizedText<'a> {
    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take ownership of the normalized text.
    pub fn into_text(self) -> Cow<'a, str> {
        self.text
    }

    /// Number of line terminators that were folded.
    pub fn line_breaks(&self) -> u32 {
        self.line_breaks
    }

    /// Number of lines: one more than the number of line terminators.
    pub fn line_count(&self) -> u32 {
        self.line_breaks.saturating_add(1)
    }

    /// Styles seen before folding.
    pub fn styles(&self) -> LineTerminators {
        self.styles
    }

    /// Whether more than one terminator style appeared.
    pub fn has_mixed_terminators(&self) -> bool {
        self.styles.is_mixed()
    }
}

/// Fold `\r\n`, `\r`, and `\n` into `\n`, counting lines and styles.
///
/// Returns borrowed text when the input contains no `\r`.
pub fn normalize_line_terminators(text: &str) -> NormalizedText<'_> {
    let bytes = text.as_bytes();
    let mut styles = LineTerminators::empty();
    let mut line_breaks = 0u32;

    if memchr::memchr(b'\r', bytes).is_none() {
        let lf = memchr::memchr_iter(b'\n', bytes).count();
        if lf > 0 {
            styles |= LineTerminators::LF;
        }
        return NormalizedText {
            text: Cow::Borrowed(text),
            line_breaks: u32::try_from(lf).unwrap_or(u32::MAX),
            styles,
        };
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(offset) = memchr::memchr2(b'\r', b'\n', &bytes[pos..]) {
        let at = pos + offset;
        line_breaks = line_breaks.saturating_add(1);
        if bytes[at] == b'\n' {
            styles |= LineTerminators::LF;
            pos = at + 1;
            continue;
        }
        out.push_str(&text[copied..at]);
        out.push('\n');
        if bytes.get(at + 1) == Some(&b'\n') {
            styles |= LineTerminators::CRLF;
            pos = at + 2;
        } else {
            styles |= LineTerminators::CR;
            pos = at + 1;
        }
        copied = pos;
    }
    out.push_str(&text[copied..]);

    NormalizedText {
        text: Cow::Owned(out),
        line_breaks,
        styles,
    }
}
