//! Operator, delimiter, and sigil tests

use crate::frontend::lexer::{tokenize, TokenKind};

#[test]
fn multi_character_operators_win_over_prefixes() {
    let tokens = tokenize("== != <= >= && || += -= *= /= %= :: ...").unwrap();
    let expected = [
        TokenKind::Equality,
        TokenKind::Inequality,
        TokenKind::LessEq,
        TokenKind::GreaterEq,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::AdditionAssignment,
        TokenKind::SubtractionAssignment,
        TokenKind::MultiplicationAssignment,
        TokenKind::DivisionAssignment,
        TokenKind::ModulusAssignment,
        TokenKind::DoubleColon,
        TokenKind::Ellipsis,
    ];
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind, "wrong kind for {:?}", token.literal);
    }
}

#[test]
fn single_character_operators() {
    let tokens = tokenize("+ - * / % = < > ! . ,").unwrap();
    let expected = [
        TokenKind::Addition,
        TokenKind::Subtraction,
        TokenKind::Multiplication,
        TokenKind::Division,
        TokenKind::Modulus,
        TokenKind::SimpleAssignment,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Negation,
        TokenKind::Period,
        TokenKind::Comma,
    ];
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn scope_delimiters() {
    let tokens = tokenize("( ) { } [ ] ;").unwrap();
    let expected = [
        TokenKind::OpenScope,
        TokenKind::CloseScope,
        TokenKind::OpenList,
        TokenKind::CloseList,
        TokenKind::OpenFrame,
        TokenKind::CloseFrame,
        TokenKind::Eos,
    ];
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn type_sigils() {
    let tokens =
        tokenize("&int &uint &real &octet &bit &type &value &identity &pointer &array &str")
            .unwrap();
    let expected = [
        TokenKind::AInt,
        TokenKind::AUint,
        TokenKind::AReal,
        TokenKind::AOctet,
        TokenKind::ABit,
        TokenKind::AType,
        TokenKind::AValue,
        TokenKind::AIdentity,
        TokenKind::APointer,
        TokenKind::AArray,
        TokenKind::AStr,
    ];
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind, "wrong kind for {:?}", token.literal);
    }
    assert_eq!(tokens[0].literal, "&int");
}

#[test]
fn sigils_do_not_fix_the_keyword_style() {
    // &int is an operator form, not a keyword spelling
    let tokens = tokenize("&int #var").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::AInt);
    assert_eq!(tokens[1].kind, TokenKind::Var);
}

#[test]
fn double_ampersand_is_logical_and() {
    let tokens = tokenize("a && b").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::LogicalAnd);
}
