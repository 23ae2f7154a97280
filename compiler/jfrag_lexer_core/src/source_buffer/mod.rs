//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner can call `peek()` one byte past any position without
//! explicit bounds checking. Java text may legitimately contain NUL (for
//! example from a decoded `\u0000`), so the [`Cursor`] separates interior
//! nulls from the sentinel by comparing against the source length.

use crate::Cursor;

/// Number of zero bytes appended after the source content.
///
/// One sentinel plus one byte of padding keeps `peek()` in bounds even when
/// the cursor is sitting on the sentinel itself.
const SENTINEL_PADDING: usize = 2;

/// Immutable, sentinel-terminated copy of the text to scan.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned source text; never mutated after construction.
    text: String,
    /// `text` bytes followed by the zero sentinel and padding.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Texts longer than `u32::MAX` bytes are truncated at the last character
    /// boundary that fits; fragments are expected to be far smaller.
    pub fn new(source: &str) -> Self {
        let limit = u32::MAX as usize;
        let source = if source.len() > limit {
            let mut end = limit;
            while !source.is_char_boundary(end) {
                end -= 1;
            }
            &source[..end]
        } else {
            source
        };

        let mut buf = Vec::with_capacity(source.len() + SENTINEL_PADDING);
        buf.extend_from_slice(source.as_bytes());
        buf.resize(source.len() + SENTINEL_PADDING, 0);

        Self {
            text: source.to_owned(),
            buf,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including the sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, &self.text, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
