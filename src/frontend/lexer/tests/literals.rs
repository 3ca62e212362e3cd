//! Literal tests - numbers, suffixes, strings, octet character form

use crate::frontend::lexer::{tokenize, unescape_string, LexError, TokenKind};

#[test]
fn number_literal() {
    let tokens = tokenize("42").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[0].literal, "42");
}

#[test]
fn real_literal() {
    let tokens = tokenize("42.42").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::RealLiteral);
    assert_eq!(tokens[0].literal, "42.42");
}

#[test]
fn number_followed_by_period_is_not_a_real() {
    // member access on a number stays two tokens
    let tokens = tokenize("1.foo").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[1].kind, TokenKind::Period);
    assert_eq!(tokens[2].kind, TokenKind::Alnumus);
}

#[test]
fn unsigned_literal() {
    let tokens = tokenize("1u").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::UnsignedLiteral);
    assert_eq!(tokens[0].literal, "1u");
}

#[test]
fn unsigned_literal_range_checked() {
    assert!(tokenize("4294967295u").is_ok());
    assert!(matches!(
        tokenize("4294967296u"),
        Err(LexError::InvalidNumber { .. })
    ));
}

#[test]
fn bit_literal() {
    let tokens = tokenize("1b 0b").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::BitLiteral);
    assert_eq!(tokens[1].kind, TokenKind::BitLiteral);
}

#[test]
fn bit_literal_only_zero_or_one() {
    assert!(matches!(
        tokenize("2b"),
        Err(LexError::InvalidNumber { .. })
    ));
}

#[test]
fn octet_literal() {
    let tokens = tokenize("42c 255c").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::OctetLiteral);
    assert_eq!(tokens[0].literal, "42c");
    assert_eq!(tokens[1].literal, "255c");
}

#[test]
fn octet_literal_range_checked() {
    assert!(matches!(
        tokenize("256c"),
        Err(LexError::InvalidNumber { .. })
    ));
}

#[test]
fn octet_character_form() {
    let tokens = tokenize("'a'c").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::OctetLiteral);
    assert_eq!(tokens[0].literal, "'a'c");
}

#[test]
fn octet_character_form_must_be_one_byte() {
    assert!(tokenize("'ab'c").is_err());
}

#[test]
fn string_literal_keeps_raw_lexeme() {
    let tokens = tokenize("'string literal'").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].literal, "'string literal'");
}

#[test]
fn string_escapes() {
    let tokens = tokenize(r"'Hello\'World'").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(unescape_string(&tokens[0].literal), "Hello'World");

    let tokens = tokenize(r"'a\nb\tc\\d'").unwrap();
    assert_eq!(unescape_string(&tokens[0].literal), "a\nb\tc\\d");
}

#[test]
fn invalid_escape_is_rejected() {
    assert!(matches!(
        tokenize(r"'\q'"),
        Err(LexError::InvalidEscape { .. })
    ));
}

#[test]
fn unterminated_string_is_rejected() {
    assert!(matches!(
        tokenize("'no end"),
        Err(LexError::UnterminatedString { .. })
    ));
}

#[test]
fn none_literal() {
    let tokens = tokenize("#none").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::NoneLiteral);
    assert_eq!(tokens[0].literal, "#none");
}
