//! Lexical problems found while scanning.
//!
//! Each problem carries WHERE (a 1-based [`Location`]) and WHAT (a
//! [`LexErrorKind`] with one fixed phrase). Kinds are either fatal
//! (unterminated literal or comment) or warnings (delimiter trouble). The
//! first fatal problem becomes the report's `errmsg`; warnings only do when
//! nothing fatal happened.

use jfrag_lexer_core::Location;
use thiserror::Error;

use crate::braces::Delimiter;
use crate::DiagnosticSet;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// String literal still open at end of input.
    #[error("unterminated string literal: `\"` reaches end of input")]
    UnterminatedString,
    /// Char literal still open at end of input.
    #[error("unterminated character literal: `'` reaches end of input")]
    UnterminatedChar,
    /// Raw line break inside a string literal.
    #[error("unterminated string literal: `\"` followed by end of line")]
    StringSpansLineBreak,
    /// Raw line break inside a char literal.
    #[error("unterminated character literal: `'` followed by end of line")]
    CharSpansLineBreak,
    /// Block comment still open at end of input.
    #[error("unterminated comment: `/*` reaches end of input")]
    UnterminatedComment,
    /// A closing delimiter with nothing open.
    #[error("unbalanced {}: `{}` does not match any earlier `{}`", .found.plural(), .found.close(), .found.open())]
    UnmatchedClose { found: Delimiter },
    /// A closing delimiter of the wrong kind.
    #[error("mismatched delimiters: found `{}` where `{}` was expected", .found.close(), .expected.close())]
    MismatchedClose {
        found: Delimiter,
        expected: Delimiter,
    },
    /// A delimiter still open at end of input.
    #[error("unbalanced {}: `{}` is never closed", .open.plural(), .open.open())]
    UnclosedDelimiter { open: Delimiter },
}

impl LexErrorKind {
    /// Fatal problems make the fragment structurally unsound.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LexErrorKind::UnterminatedString
                | LexErrorKind::UnterminatedChar
                | LexErrorKind::StringSpansLineBreak
                | LexErrorKind::CharSpansLineBreak
                | LexErrorKind::UnterminatedComment
        )
    }

    /// Flags this kind always implies.
    pub fn flags(&self) -> DiagnosticSet {
        match self {
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedChar => {
                DiagnosticSet::UNTERMINATED_LITERAL
            }
            LexErrorKind::StringSpansLineBreak | LexErrorKind::CharSpansLineBreak => {
                DiagnosticSet::UNTERMINATED_LITERAL | DiagnosticSet::LITERAL_SPANS_LINE_BREAK
            }
            LexErrorKind::UnterminatedComment => DiagnosticSet::UNTERMINATED_COMMENT,
            LexErrorKind::MismatchedClose { .. } => DiagnosticSet::MISMATCHED_DELIMITERS,
            LexErrorKind::UnmatchedClose { .. } | LexErrorKind::UnclosedDelimiter { .. } => {
                DiagnosticSet::empty()
            }
        }
    }
}

/// A lexical problem and where it was found.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("Error at line {}, column {}: {kind}", .location.line, .location.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// The error that becomes `errmsg`: the first fatal one, else the first.
pub fn primary_error(errors: &[LexError]) -> Option<&LexError> {
    errors
        .iter()
        .find(|e| e.is_fatal())
        .or_else(|| errors.first())
}
