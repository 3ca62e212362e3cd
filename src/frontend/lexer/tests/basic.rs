//! Basic tests - identifiers, whitespace, comments, positions

use crate::frontend::lexer::{tokenize, TokenKind};

#[test]
fn empty_source_is_just_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn whitespace_only_is_just_eof() {
    let tokens = tokenize("   \t\n\r   ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn nul_terminates_the_scan() {
    let tokens = tokenize("foo\0bar").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Alnumus);
    assert_eq!(tokens[0].literal, "foo");
}

#[test]
fn single_number() {
    let tokens = tokenize("1").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[0].literal, "1");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn identifiers() {
    let tokens = tokenize("foo _bar baz_9").unwrap();
    assert_eq!(tokens.len(), 4);
    for t in &tokens[..3] {
        assert_eq!(t.kind, TokenKind::Alnumus);
    }
    assert_eq!(tokens[1].literal, "_bar");
    assert_eq!(tokens[2].literal, "baz_9");
}

#[test]
fn single_line_comment_is_skipped() {
    let tokens = tokenize("a // comment with ; and ()\nb").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].literal, "a");
    assert_eq!(tokens[1].literal, "b");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn line_and_column_tracking() {
    let tokens = tokenize("a\n  b").unwrap();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].col, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].col, 3);
}

#[test]
fn newline_inside_string_advances_line_counter() {
    let tokens = tokenize("'a\nb' c").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].literal, "c");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn token_count_matches_lexeme_count() {
    let tokens = tokenize("foo = 1 + 2 * bar(3, 4);").unwrap();
    // 13 lexemes plus the eof
    assert_eq!(tokens.len(), 14);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}
