//! Brace counting and delimiter matching.
//!
//! [`BraceCounter`] is the coarse balance check: how many `{` and `}` were
//! seen in code, and whether a `}` ever arrived with nothing open.
//! [`DelimiterStack`] remembers where each open delimiter was, so the
//! scanner can name the innermost unclosed one and, when bracket matching
//! is enabled, catch `{]` or `{(})`.

use jfrag_lexer_core::Location;

use crate::DiagnosticSet;

/// A paired delimiter kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Brace,
    Paren,
    Bracket,
}

impl Delimiter {
    /// Classify an opening delimiter byte.
    pub fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delimiter::Brace),
            b'(' => Some(Delimiter::Paren),
            b'[' => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    /// Classify a closing delimiter byte.
    pub fn from_close(byte: u8) -> Option<Self> {
        match byte {
            b'}' => Some(Delimiter::Brace),
            b')' => Some(Delimiter::Paren),
            b']' => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Delimiter::Brace => '{',
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
        }
    }

    /// Plural noun used in messages ("braces").
    pub fn plural(self) -> &'static str {
        match self {
            Delimiter::Brace => "braces",
            Delimiter::Paren => "parentheses",
            Delimiter::Bracket => "brackets",
        }
    }
}

/// Running `{`/`}` counts for code-mode text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BraceCounter {
    opened: u32,
    closed: u32,
    /// Open-minus-close, never below zero.
    depth: u32,
    /// A `}` arrived while `depth` was zero.
    out_of_order: bool,
}

impl BraceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.opened = self.opened.saturating_add(1);
        self.depth = self.depth.saturating_add(1);
    }

    /// Count a `}`. Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        self.closed = self.closed.saturating_add(1);
        if self.depth == 0 {
            self.out_of_order = true;
            false
        } else {
            self.depth -= 1;
            true
        }
    }

    pub fn opened(&self) -> u32 {
        self.opened
    }

    pub fn closed(&self) -> u32 {
        self.closed
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_out_of_order(&self) -> bool {
        self.out_of_order
    }

    /// Brace flags implied by the final counts.
    pub fn flags(&self) -> DiagnosticSet {
        let mut flags = DiagnosticSet::empty();
        if self.opened > self.closed {
            flags |= DiagnosticSet::TOO_MANY_OPEN_BRACES;
        }
        if self.closed > self.opened {
            flags |= DiagnosticSet::TOO_MANY_CLOSE_BRACES;
        }
        if self.out_of_order {
            flags |= DiagnosticSet::BRACES_OUT_OF_ORDER;
        }
        flags
    }
}

/// Result of offering a closing delimiter to the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Closed the innermost open delimiter.
    Matched,
    /// Nothing was open.
    Unmatched,
    /// The innermost open delimiter is of another kind; it stays open.
    Mismatched { expected: Delimiter },
}

/// Open delimiters with the location of each opener.
#[derive(Clone, Debug, Default)]
pub struct DelimiterStack {
    open: Vec<(Delimiter, Location)>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delimiter: Delimiter, location: Location) {
        self.open.push((delimiter, location));
    }

    pub fn close(&mut self, delimiter: Delimiter) -> CloseOutcome {
        match self.open.last() {
            None => CloseOutcome::Unmatched,
            Some(&(top, _)) if top == delimiter => {
                self.open.pop();
                CloseOutcome::Matched
            }
            Some(&(top, _)) => CloseOutcome::Mismatched { expected: top },
        }
    }

    /// The innermost delimiter still open, with where it was opened.
    pub fn innermost(&self) -> Option<(Delimiter, Location)> {
        self.open.last().copied()
    }
}
