//! Structural scanner.
//!
//! A single left-to-right pass over normalized text. The scanner tracks the
//! [`LexicalMode`], copies every non-comment byte into the stripped text, and
//! records brace balance, delimiter nesting, and the statement shape.
//!
//! # Stripped text
//!
//! Rather than pushing byte by byte, the scanner remembers where the current
//! run of kept text began (`copy_from`) and flushes the whole slice when a
//! comment opens. Literals are never interrupted, so their contents survive
//! verbatim even when they look like comment delimiters.
//!
//! # Errors
//!
//! Scanning never stops early. Every problem is recorded as a [`LexError`]
//! and the pass continues to end of input.

use jfrag_lexer_core::{Cursor, Location, SourceBuffer};
use tracing::trace;

use crate::braces::{BraceCounter, CloseOutcome, Delimiter, DelimiterStack};
use crate::lex_error::{LexError, LexErrorKind};
use crate::mode::LexicalMode;
use crate::statement::{Piece, StatementShape};
use crate::{DiagnosticSet, ScanConfig};

/// Everything the scanner found, before assembly into a report.
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    pub stripped: String,
    pub flags: DiagnosticSet,
    pub errors: Vec<LexError>,
    pub braces: BraceCounter,
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: ScanConfig,
    mode: LexicalMode,
    /// Where the comment or literal being scanned was opened.
    mode_start: Location,
    /// A line break inside the current literal was already reported.
    literal_broken: bool,
    stripped: String,
    /// Start of the kept text not yet flushed into `stripped`.
    copy_from: u32,
    braces: BraceCounter,
    delimiters: DelimiterStack,
    shape: StatementShape,
    last_significant: Option<u8>,
    flags: DiagnosticSet,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a SourceBuffer, config: ScanConfig) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            config,
            mode: LexicalMode::Code,
            mode_start: Location::new(1, 1),
            literal_broken: false,
            stripped: String::with_capacity(buffer.len() as usize),
            copy_from: 0,
            braces: BraceCounter::new(),
            delimiters: DelimiterStack::new(),
            shape: StatementShape::new(),
            last_significant: None,
            flags: DiagnosticSet::empty(),
            errors: Vec::new(),
        }
    }

    /// Scan to end of input.
    pub fn run(mut self) -> ScanOutcome {
        while !self.cursor.is_eof() {
            match self.mode {
                LexicalMode::Code => self.code(),
                LexicalMode::LineComment => self.line_comment(),
                LexicalMode::BlockComment => self.block_comment(),
                LexicalMode::CharLiteral => self.literal(b'\''),
                LexicalMode::StringLiteral => self.literal(b'"'),
            }
        }
        self.finish()
    }

    // ─── Code ───────────────────────────────────────────────────────────

    fn code(&mut self) {
        let byte = self.cursor.current();
        match byte {
            b'/' if self.cursor.peek() == b'/' => self.open_comment(LexicalMode::LineComment),
            b'/' if self.cursor.peek() == b'*' => self.open_comment(LexicalMode::BlockComment),
            b'"' => self.open_literal(LexicalMode::StringLiteral),
            b'\'' => self.open_literal(LexicalMode::CharLiteral),
            b' ' | b'\t' | b'\n' | 0x0C => {
                self.shape.observe(Piece::classify(byte));
                self.cursor.advance();
            }
            _ => {
                if let Some(delimiter) = Delimiter::from_open(byte) {
                    self.open_delimiter(delimiter);
                } else if let Some(delimiter) = Delimiter::from_close(byte) {
                    self.close_delimiter(delimiter);
                }
                self.shape.observe(Piece::classify(byte));
                self.last_significant = Some(byte);
                self.cursor.advance_char();
            }
        }
    }

    fn open_delimiter(&mut self, delimiter: Delimiter) {
        if delimiter == Delimiter::Brace {
            self.braces.open();
        }
        if self.tracks(delimiter) {
            self.delimiters.push(delimiter, self.cursor.location());
        }
    }

    fn close_delimiter(&mut self, found: Delimiter) {
        if found == Delimiter::Brace {
            self.braces.close();
        }
        if !self.tracks(found) {
            return;
        }
        match self.delimiters.close(found) {
            CloseOutcome::Matched => {}
            CloseOutcome::Unmatched => {
                self.report(LexErrorKind::UnmatchedClose { found }, self.cursor.location());
            }
            CloseOutcome::Mismatched { expected } => {
                self.report(
                    LexErrorKind::MismatchedClose { found, expected },
                    self.cursor.location(),
                );
            }
        }
    }

    fn tracks(&self, delimiter: Delimiter) -> bool {
        delimiter == Delimiter::Brace || self.config.match_brackets
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn open_comment(&mut self, mode: LexicalMode) {
        self.flush();
        self.mode_start = self.cursor.location();
        self.cursor.advance_n(2);
        self.enter(mode);
    }

    fn line_comment(&mut self) {
        self.cursor.eat_until_newline_or_eof();
        if self.cursor.is_eof() {
            return;
        }
        // The terminating line break belongs to the code that follows, so code
        // after a line comment is never one line.
        self.shape.observe(Piece::LineBreak);
        if self.config.comment_separators {
            self.copy_from = self.cursor.pos();
            self.cursor.advance();
        } else {
            self.cursor.advance();
            self.copy_from = self.cursor.pos();
        }
        self.enter(LexicalMode::Code);
    }

    fn block_comment(&mut self) {
        loop {
            match self.cursor.skip_to_block_comment_delim() {
                b'\n' => {
                    self.flags |= DiagnosticSet::MULTI_LINE_COMMENT;
                    self.cursor.advance();
                }
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    self.copy_from = self.cursor.pos();
                    if self.config.comment_separators {
                        self.stripped.push(' ');
                    }
                    self.enter(LexicalMode::Code);
                    return;
                }
                b'*' => self.cursor.advance(),
                _ => return,
            }
        }
    }

    // ─── Literals ───────────────────────────────────────────────────────

    fn open_literal(&mut self, mode: LexicalMode) {
        self.shape.observe(Piece::Other);
        self.last_significant = Some(self.cursor.current());
        self.mode_start = self.cursor.location();
        self.literal_broken = false;
        self.cursor.advance();
        self.enter(mode);
    }

    fn literal(&mut self, quote: u8) {
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    // A backslash never hides a line break.
                    if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                        self.cursor.advance_char();
                    }
                }
                b'\n' => {
                    if !self.literal_broken {
                        self.literal_broken = true;
                        let kind = if quote == b'"' {
                            LexErrorKind::StringSpansLineBreak
                        } else {
                            LexErrorKind::CharSpansLineBreak
                        };
                        self.report(kind, self.cursor.location());
                    }
                    self.cursor.advance();
                }
                0 => return,
                _ => {
                    self.cursor.advance();
                    self.last_significant = Some(quote);
                    self.enter(LexicalMode::Code);
                    return;
                }
            }
        }
    }

    // ─── Helpers ────────────────────────────────────────────────────────

    fn enter(&mut self, mode: LexicalMode) {
        trace!(from = ?self.mode, to = ?mode, offset = self.cursor.pos(), "mode transition");
        self.mode = mode;
    }

    /// Move kept text up to the cursor into `stripped`.
    fn flush(&mut self) {
        let kept = self.cursor.slice_from(self.copy_from);
        self.stripped.push_str(kept);
        self.copy_from = self.cursor.pos();
    }

    fn report(&mut self, kind: LexErrorKind, location: Location) {
        self.flags |= kind.flags();
        self.errors.push(LexError::new(kind, location));
    }

    // ─── End of input ───────────────────────────────────────────────────

    fn finish(mut self) -> ScanOutcome {
        match self.mode {
            LexicalMode::Code => {}
            LexicalMode::LineComment => self.flags |= DiagnosticSet::ENDS_WITH_LINE_COMMENT,
            LexicalMode::BlockComment => {
                self.report(LexErrorKind::UnterminatedComment, self.mode_start);
            }
            LexicalMode::CharLiteral => {
                self.report(LexErrorKind::UnterminatedChar, self.mode_start);
            }
            LexicalMode::StringLiteral => {
                self.report(LexErrorKind::UnterminatedString, self.mode_start);
            }
        }
        if !self.mode.is_comment() {
            self.flush();
        }

        if let Some((open, location)) = self.delimiters.innermost() {
            self.report(LexErrorKind::UnclosedDelimiter { open }, location);
        }
        self.flags |= self.braces.flags();
        self.flags |= self.shape.flags();
        self.flags |= match self.last_significant {
            None => DiagnosticSet::EMPTY_FRAGMENT,
            Some(b';') => DiagnosticSet::ENDS_WITH_SEMICOLON,
            Some(b'}') => DiagnosticSet::empty(),
            Some(_) => DiagnosticSet::TERMINATED_BADLY,
        };

        ScanOutcome {
            stripped: self.stripped,
            flags: self.flags,
            errors: self.errors,
            braces: self.braces,
        }
    }
}
