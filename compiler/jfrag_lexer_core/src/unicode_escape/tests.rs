use std::borrow::Cow;

use super::*;
use pretty_assertions::assert_eq;

fn translate(raw: &str) -> String {
    translate_unicode_escapes(raw, EscapeRange::Unicode).into_owned()
}

// === Backslash parity ===

#[test]
fn one_backslash_decodes() {
    assert_eq!(translate("\\u0041"), "A");
}

#[test]
fn two_backslashes_do_not_decode() {
    assert_eq!(translate("\\\\u0041"), "\\\\u0041");
}

#[test]
fn three_backslashes_keep_two_and_decode() {
    assert_eq!(translate("\\\\\\u0041"), "\\\\A");
}

#[test]
fn four_backslashes_do_not_decode() {
    assert_eq!(translate("\\\\\\\\u0041"), "\\\\\\\\u0041");
}

#[test]
fn escape_is_live_by_parity() {
    assert!(escape_is_live(0));
    assert!(!escape_is_live(1));
    assert!(escape_is_live(2));
    assert!(!escape_is_live(3));
}

#[test]
fn parity_resets_after_other_characters() {
    // The escaped backslash pair is followed by `x`, so the next escape
    // starts a fresh run.
    assert_eq!(translate("\\\\x\\u0041"), "\\\\xA");
}

#[test]
fn five_backslashes_from_escaped_backslash() {
    // Raw: three backslashes, an escaped backslash, two backslashes.
    assert_eq!(translate("\\\\\\u005c\\\\."), "\\\\\\\\\\.");
}

#[test]
fn decoded_backslash_does_not_protect_next_escape() {
    assert_eq!(translate("\\u005c\\u0041"), "\\A");
}

#[test]
fn decoded_backslash_does_not_start_escape() {
    assert_eq!(translate("\\u005cu0041"), "\\u0041");
}

// === Recognized form ===

#[test]
fn redundant_u_markers() {
    assert_eq!(translate("\\uu0041"), "A");
    assert_eq!(translate("\\uuuuu0041"), "A");
    assert_eq!(translate("New\\uu000aline"), "New\nline");
    assert_eq!(translate("line\\uuu000dfeed"), "line\rfeed");
}

#[test]
fn hex_digits_are_case_insensitive() {
    assert_eq!(translate("\\u004A\\u004a"), "JJ");
}

#[test]
fn exactly_four_digits_are_consumed() {
    assert_eq!(translate("\\u00411"), "A1");
}

#[test]
fn malformed_escapes_pass_through() {
    for raw in ["\\u004", "\\u00G1", "\\x0041", "\\", "\\u", "\\uuu", "end\\u12"] {
        assert_eq!(translate(raw), raw, "malformed escape {raw:?} changed");
    }
}

#[test]
fn escapes_can_manufacture_comment_delimiters() {
    assert_eq!(translate("/\\u002a\\u002a/"), "/**/");
    assert_eq!(translate("\\u002f\\u002f note"), "// note");
}

#[test]
fn escape_inside_would_be_string() {
    assert_eq!(translate("\"a\\u0022"), "\"a\"");
}

#[test]
fn non_ascii_text_around_escapes() {
    assert_eq!(translate("\u{e9}\\u0041\u{e9}"), "\u{e9}A\u{e9}");
}

// === Ranges and surrogates ===

#[test]
fn ascii_range_leaves_high_code_points() {
    assert_eq!(
        translate_unicode_escapes("\\u0088 \\u0041", EscapeRange::Ascii),
        "\\u0088 A"
    );
    assert_eq!(translate("\\u0088"), "\u{88}");
}

#[test]
fn surrogate_pair_combines() {
    assert_eq!(translate("\\uD83D\\uDE00"), "\u{1F600}");
}

#[test]
fn lone_surrogates_pass_through() {
    assert_eq!(translate("\\uD83D!"), "\\uD83D!");
    assert_eq!(translate("\\uDE00"), "\\uDE00");
    assert_eq!(translate("\\uD83D\\u0041"), "\\uD83DA");
}

#[test]
fn nul_escape_decodes() {
    assert_eq!(translate("a\\u0000b"), "a\0b");
}

// === Borrowing ===

#[test]
fn unchanged_text_is_borrowed() {
    assert!(matches!(
        translate_unicode_escapes("int x = 1;", EscapeRange::Unicode),
        Cow::Borrowed(_)
    ));
    assert!(matches!(
        translate_unicode_escapes("a \\\\u0041 \\n", EscapeRange::Unicode),
        Cow::Borrowed(_)
    ));
}

// === Window helpers ===

#[test]
fn parse_escape_reports_length() {
    assert_eq!(parse_escape(b"\\u0041rest"), Some((0x41, 6)));
    assert_eq!(parse_escape(b"\\uuu000a"), Some((0x0a, 8)));
    assert_eq!(parse_escape(b"\\uFFFF"), Some((0xFFFF, 6)));
}

#[test]
fn parse_escape_rejects_non_escapes() {
    assert_eq!(parse_escape(b""), None);
    assert_eq!(parse_escape(b"u0041"), None);
    assert_eq!(parse_escape(b"\\0041"), None);
    assert_eq!(parse_escape(b"\\u004"), None);
    assert_eq!(parse_escape(b"\\u00z1"), None);
}

// === Property tests ===

mod proptest_translate {
    use super::super::{translate_unicode_escapes, EscapeRange};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn backslash_free_text_is_identity(raw in "[a-zA-Z0-9 ;{}()\"'/*\n\t]{0,64}") {
            let out = translate_unicode_escapes(&raw, EscapeRange::Unicode);
            prop_assert_eq!(out.as_ref(), raw.as_str());
        }

        #[test]
        fn never_panics_and_never_grows(raw in "[\\\\u0-9a-fA-FDE ]{0,64}") {
            let out = translate_unicode_escapes(&raw, EscapeRange::Unicode);
            // A decoded character is at most 4 bytes; every escape is at least 6.
            prop_assert!(out.len() <= raw.len());
        }

        #[test]
        fn ascii_range_never_decodes_more(raw in "[\\\\u0-9a-f]{0,48}") {
            let ascii = translate_unicode_escapes(&raw, EscapeRange::Ascii);
            let full = translate_unicode_escapes(&raw, EscapeRange::Unicode);
            // Ascii mode decodes a subset, so it never produces shorter text.
            prop_assert!(ascii.len() >= full.len());
        }
    }
}
