//! Scan report.
//!
//! [`ScanResult`] is the complete, immutable outcome of one scan: both
//! texts, the flag set, every recorded error, and the primary `errmsg`.
//! It serializes as one flat mapping in which every flag of the vocabulary is
//! present as a boolean.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::braces::BraceCounter;
use crate::lex_error::{primary_error, LexError};
use crate::scanner::ScanOutcome;
use crate::DiagnosticSet;

/// Line facts gathered before the structural pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineFacts {
    pub(crate) line_count: u32,
    pub(crate) mixed_terminators: bool,
}

/// Outcome of scanning one fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    text: String,
    text_nocomments: String,
    errmsg: String,
    diagnostics: DiagnosticSet,
    errors: Vec<LexError>,
    line_count: u32,
    braces: BraceCounter,
}

impl ScanResult {
    pub(crate) fn assemble(text: String, lines: LineFacts, outcome: ScanOutcome) -> Self {
        let mut diagnostics = outcome.flags;
        if lines.mixed_terminators {
            diagnostics |= DiagnosticSet::MIXED_LINE_TERMINATORS;
        }
        let errmsg = primary_error(&outcome.errors)
            .map(ToString::to_string)
            .unwrap_or_default();

        ScanResult {
            text,
            text_nocomments: outcome.stripped,
            errmsg,
            diagnostics,
            errors: outcome.errors,
            line_count: lines.line_count,
            braces: outcome.braces,
        }
    }

    /// Input after escape translation and line normalization.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// [`text()`](Self::text) with every comment removed.
    pub fn text_nocomments(&self) -> &str {
        &self.text_nocomments
    }

    /// The primary error message, or `""`.
    pub fn errmsg(&self) -> &str {
        &self.errmsg
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errmsg.is_empty()
    }

    pub fn diagnostics(&self) -> DiagnosticSet {
        self.diagnostics
    }

    #[inline]
    pub fn has(&self, flag: DiagnosticSet) -> bool {
        self.diagnostics.contains(flag)
    }

    /// Every problem found, in encounter order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Line breaks in [`text()`](Self::text) plus one.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn braces(&self) -> BraceCounter {
        self.braces
    }
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + DiagnosticSet::VOCABULARY.len()))?;
        map.serialize_entry("text", &self.text)?;
        map.serialize_entry("text_nocomments", &self.text_nocomments)?;
        map.serialize_entry("errmsg", &self.errmsg)?;
        map.serialize_entry("valid", &self.is_valid())?;
        map.serialize_entry("line_count", &self.line_count)?;
        for (name, flag) in DiagnosticSet::VOCABULARY {
            map.serialize_entry(name, &self.diagnostics.contains(flag))?;
        }
        map.end()
    }
}
