//! Low-level text layer for scanning Java source fragments.
//!
//! Java applies two purely textual translations before any comment, string,
//! or character literal is recognized (JLS §3.3, §3.4):
//!
//! 1. [`translate_unicode_escapes`] rewrites every live `\uXXXX` escape into
//!    the character it names, blind to lexical context.
//! 2. [`normalize_line_terminators`] folds `\r\n`, `\r`, and `\n` into `\n`
//!    and counts line breaks.
//!
//! The normalized text is then wrapped in a [`SourceBuffer`] whose
//! [`Cursor`] drives the structural scanner in `jfrag_lexer`.
//!
//! This crate has no dependencies on other `jfrag_*` crates.

mod cursor;
mod line_terminator;
mod source_buffer;
mod unicode_escape;

pub use cursor::{Cursor, Location};
pub use line_terminator::{normalize_line_terminators, LineTerminators, NormalizedText};
pub use source_buffer::SourceBuffer;
pub use unicode_escape::{escape_is_live, parse_escape, translate_unicode_escapes, EscapeRange};
