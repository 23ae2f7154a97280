//! Diagnostic flag vocabulary.
//!
//! A [`DiagnosticSet`] records which lexical conditions held for one scan.
//! Flags that are not set are false. Each flag has a stable kebab-case name
//! used as its key in the serialized report.

use bitflags::bitflags;

bitflags! {
    /// Named boolean conditions observed during a scan.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct DiagnosticSet: u16 {
        // === Structural (fatal) ===

        /// A string or char literal was not closed before end of input or a
        /// raw line break.
        const UNTERMINATED_LITERAL = 1 << 0;
        /// A string or char literal contained a raw line break.
        const LITERAL_SPANS_LINE_BREAK = 1 << 1;
        /// A block comment was not closed before end of input.
        const UNTERMINATED_COMMENT = 1 << 2;

        // === Delimiters (warnings) ===

        /// More `{` than `}`.
        const TOO_MANY_OPEN_BRACES = 1 << 3;
        /// More `}` than `{`.
        const TOO_MANY_CLOSE_BRACES = 1 << 4;
        /// A `}` arrived with no `{` open.
        const BRACES_OUT_OF_ORDER = 1 << 5;
        /// A closing delimiter did not match the innermost open one.
        const MISMATCHED_DELIMITERS = 1 << 6;

        // === Shape ===

        /// A comment body contained a line break.
        const MULTI_LINE_COMMENT = 1 << 7;
        /// More than one line terminator style appeared.
        const MIXED_LINE_TERMINATORS = 1 << 8;
        /// Nothing but whitespace and comments.
        const EMPTY_FRAGMENT = 1 << 9;
        /// Last significant code character is `;`.
        const ENDS_WITH_SEMICOLON = 1 << 10;
        /// Non-empty, and the last significant code character is neither
        /// `;` nor `}`.
        const TERMINATED_BADLY = 1 << 11;
        /// No line break and no `;` in code.
        const ONELINE = 1 << 12;
        /// One `;`-terminated statement on one line, then only whitespace
        /// or comments.
        const ONELINE_WITH_SEMICOLON = 1 << 13;
        /// Input ended inside a line comment.
        const ENDS_WITH_LINE_COMMENT = 1 << 14;
    }
}

impl DiagnosticSet {
    /// Every flag with its report name, in report order.
    pub const VOCABULARY: [(&'static str, DiagnosticSet); 15] = [
        ("unterminated-literal", Self::UNTERMINATED_LITERAL),
        ("literal-spans-line-break", Self::LITERAL_SPANS_LINE_BREAK),
        ("unterminated-comment", Self::UNTERMINATED_COMMENT),
        ("too-many-open-braces", Self::TOO_MANY_OPEN_BRACES),
        ("too-many-close-braces", Self::TOO_MANY_CLOSE_BRACES),
        ("braces-out-of-order", Self::BRACES_OUT_OF_ORDER),
        ("mismatched-delimiters", Self::MISMATCHED_DELIMITERS),
        ("multi-line-comment", Self::MULTI_LINE_COMMENT),
        ("mixed-line-terminators", Self::MIXED_LINE_TERMINATORS),
        ("empty-fragment", Self::EMPTY_FRAGMENT),
        ("ends-with-semicolon", Self::ENDS_WITH_SEMICOLON),
        ("terminated-badly", Self::TERMINATED_BADLY),
        ("oneline", Self::ONELINE),
        ("oneline-with-semicolon", Self::ONELINE_WITH_SEMICOLON),
        ("ends-with-line-comment", Self::ENDS_WITH_LINE_COMMENT),
    ];

    /// Flags that make a fragment structurally unsound.
    pub const STRUCTURAL: Self = Self::UNTERMINATED_LITERAL
        .union(Self::LITERAL_SPANS_LINE_BREAK)
        .union(Self::UNTERMINATED_COMMENT);

    /// Flags describing unbalanced or misnested delimiters.
    pub const DELIMITER_PROBLEMS: Self = Self::TOO_MANY_OPEN_BRACES
        .union(Self::TOO_MANY_CLOSE_BRACES)
        .union(Self::BRACES_OUT_OF_ORDER)
        .union(Self::MISMATCHED_DELIMITERS);

    /// Report name of a single flag.
    ///
    /// Returns `None` for the empty set and for combinations.
    pub fn report_name(self) -> Option<&'static str> {
        Self::VOCABULARY
            .iter()
            .find(|(_, flag)| *flag == self)
            .map(|(name, _)| *name)
    }

    /// Look a flag up by its report name.
    pub fn from_report_name(name: &str) -> Option<Self> {
        Self::VOCABULARY
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }

    /// Report names of every flag that is set, in report order.
    pub fn report_names(self) -> impl Iterator<Item = &'static str> {
        Self::VOCABULARY
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }

    /// Whether any structural flag is set.
    #[inline]
    pub const fn is_structurally_broken(self) -> bool {
        self.intersects(Self::STRUCTURAL)
    }

    /// Whether any delimiter flag is set.
    #[inline]
    pub const fn has_delimiter_problems(self) -> bool {
        self.intersects(Self::DELIMITER_PROBLEMS)
    }
}
