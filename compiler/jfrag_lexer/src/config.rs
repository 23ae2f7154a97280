//! Scan configuration.

use jfrag_lexer_core::EscapeRange;

/// Configuration for one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Which Unicode escapes are decoded before scanning.
    pub escapes: EscapeRange,
    /// Keep a separator where a comment was removed: the line comment's
    /// terminating line break stays, and each block comment becomes one space.
    pub comment_separators: bool,
    /// Also match `(`/`)` and `[`/`]`, reporting closers of the wrong kind.
    pub match_brackets: bool,
}

impl ScanConfig {
    /// The historical delete-comments settings: ASCII-only escapes and
    /// separators where comments were.
    pub fn legacy() -> Self {
        ScanConfig {
            escapes: EscapeRange::Ascii,
            comment_separators: true,
            match_brackets: true,
        }
    }

    /// Create a config with the given escape range.
    pub fn with_escapes(escapes: EscapeRange) -> Self {
        Self {
            escapes,
            ..Default::default()
        }
    }
}
