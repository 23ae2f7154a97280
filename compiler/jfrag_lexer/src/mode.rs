//! Lexical mode of the structural scanner.

/// What the scanner is currently inside.
///
/// Exactly one mode is active at every position. Only `Code` counts braces,
/// tracks delimiters, or recognizes comment and literal openers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexicalMode {
    #[default]
    Code,
    /// After `//`, up to the next line break.
    LineComment,
    /// After `/*`, up to the next `*/`.
    BlockComment,
    /// After `'`, up to the next unescaped `'`.
    CharLiteral,
    /// After `"`, up to the next unescaped `"`.
    StringLiteral,
}

impl LexicalMode {
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LexicalMode::LineComment | LexicalMode::BlockComment)
    }
}
