use super::*;
use pretty_assertions::assert_eq;

fn shape_of(code: &str) -> StatementShape {
    let mut shape = StatementShape::new();
    for b in code.bytes() {
        shape.observe(Piece::classify(b));
    }
    shape
}

#[test]
fn empty_is_oneline() {
    let shape = shape_of("");
    assert!(shape.is_oneline());
    assert!(!shape.is_single_statement());
    assert_eq!(shape.flags(), DiagnosticSet::ONELINE);
}

#[test]
fn line_break_ends_oneline() {
    let shape = shape_of("a single line with newline at end\n");
    assert_eq!(shape.flags(), DiagnosticSet::empty());
}

#[test]
fn trailing_semicolon_is_single_statement() {
    assert_eq!(
        shape_of("x = 1;").flags(),
        DiagnosticSet::ONELINE_WITH_SEMICOLON
    );
    assert_eq!(
        shape_of("x = 1;\t \x0C").flags(),
        DiagnosticSet::ONELINE_WITH_SEMICOLON
    );
}

#[test]
fn anything_after_semicolon_breaks_single_statement() {
    assert_eq!(shape_of("two semicolons;;").flags(), DiagnosticSet::empty());
    assert_eq!(shape_of("x;\n").flags(), DiagnosticSet::empty());
    assert_eq!(shape_of("x; y").flags(), DiagnosticSet::empty());
}

#[test]
fn semicolon_after_line_break_does_not_count() {
    assert_eq!(shape_of("x\ny;").flags(), DiagnosticSet::empty());
}

#[test]
fn classify_bytes() {
    assert_eq!(Piece::classify(b' '), Piece::InlineWhitespace);
    assert_eq!(Piece::classify(0x0C), Piece::InlineWhitespace);
    assert_eq!(Piece::classify(b'\n'), Piece::LineBreak);
    assert_eq!(Piece::classify(b';'), Piece::Semicolon);
    assert_eq!(Piece::classify(b'}'), Piece::Other);
}
