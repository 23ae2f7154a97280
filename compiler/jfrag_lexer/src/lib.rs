//! Lexical analysis of Java source fragments.
//!
//! A scan runs three passes, each on the previous pass's output:
//!
//! 1. Unicode escape translation ([`jfrag_lexer_core::translate_unicode_escapes`]).
//! 2. Line terminator normalization ([`jfrag_lexer_core::normalize_line_terminators`]).
//! 3. The structural scanner, which classifies every position as code,
//!    comment, or literal and strips comments.
//!
//! The results are assembled into a [`ScanResult`]. Scanning never fails:
//! problems are reported as [`DiagnosticSet`] flags, as [`LexError`]s, and as
//! the primary `errmsg`.
//!
//! ```
//! use jfrag_lexer::{scan, DiagnosticSet};
//!
//! let result = scan("x = 1; // done");
//! assert_eq!(result.text_nocomments(), "x = 1; ");
//! assert!(result.has(DiagnosticSet::ENDS_WITH_SEMICOLON));
//! assert!(result.is_valid());
//! ```

mod braces;
mod config;
mod diagnostics;
mod lex_error;
mod mode;
mod report;
mod scanner;
mod statement;

use std::borrow::Cow;

use jfrag_lexer_core::{normalize_line_terminators, translate_unicode_escapes, SourceBuffer};
use tracing::debug;

pub use braces::{BraceCounter, CloseOutcome, Delimiter, DelimiterStack};
pub use config::ScanConfig;
pub use diagnostics::DiagnosticSet;
pub use jfrag_lexer_core::{EscapeRange, Location};
pub use lex_error::{primary_error, LexError, LexErrorKind};
pub use mode::LexicalMode;
pub use report::ScanResult;

use report::LineFacts;
use scanner::Scanner;

/// Scan a fragment with the default configuration.
pub fn scan(source: &str) -> ScanResult {
    scan_with(source, &ScanConfig::default())
}

/// Scan a fragment.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with(source: &str, config: &ScanConfig) -> ScanResult {
    let translated = translate_unicode_escapes(source, config.escapes);
    if let Cow::Owned(decoded) = &translated {
        debug!(
            before = source.len(),
            after = decoded.len(),
            "decoded unicode escapes"
        );
    }

    let normalized = normalize_line_terminators(&translated);
    let lines = LineFacts {
        line_count: normalized.line_count(),
        mixed_terminators: normalized.has_mixed_terminators(),
    };
    debug!(
        lines = lines.line_count,
        styles = ?normalized.styles(),
        "normalized line terminators"
    );

    let buffer = SourceBuffer::new(normalized.as_str());
    let outcome = Scanner::new(&buffer, *config).run();
    let result = ScanResult::assemble(buffer.as_str().to_owned(), lines, outcome);

    debug!(
        flags = ?result.diagnostics(),
        errors = result.errors().len(),
        valid = result.is_valid(),
        "scan complete"
    );
    result
}
