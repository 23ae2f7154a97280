//! One-line and single-statement shape of a fragment.
//!
//! The scanner feeds every code-mode character to [`StatementShape`] as a
//! [`Piece`]. Comment and literal contents are never observed, and comment
//! openers are skipped.
//!
//! - `oneline` holds until the first code line break or `;`.
//! - `single_statement` becomes true when that first event is a `;`, and
//!   stays true only while inline whitespace follows.

use crate::DiagnosticSet;

/// Classification of one code-mode character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Space, tab, or form feed.
    InlineWhitespace,
    LineBreak,
    Semicolon,
    Other,
}

impl Piece {
    pub fn classify(byte: u8) -> Self {
        match byte {
            b' ' | b'\t' | 0x0C => Piece::InlineWhitespace,
            b'\n' => Piece::LineBreak,
            b';' => Piece::Semicolon,
            _ => Piece::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatementShape {
    oneline: bool,
    single_statement: bool,
}

impl Default for StatementShape {
    fn default() -> Self {
        StatementShape {
            oneline: true,
            single_statement: false,
        }
    }
}

impl StatementShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, piece: Piece) {
        self.single_statement &= piece == Piece::InlineWhitespace;
        if self.oneline && matches!(piece, Piece::LineBreak | Piece::Semicolon) {
            self.oneline = false;
            self.single_statement = piece == Piece::Semicolon;
        }
    }

    pub fn is_oneline(&self) -> bool {
        self.oneline
    }

    pub fn is_single_statement(&self) -> bool {
        self.single_statement
    }

    pub fn flags(&self) -> DiagnosticSet {
        let mut flags = DiagnosticSet::empty();
        if self.oneline {
            flags |= DiagnosticSet::ONELINE;
        }
        if self.single_statement {
            flags |= DiagnosticSet::ONELINE_WITH_SEMICOLON;
        }
        flags
    }
}

#[cfg(test)]
mod tests;
