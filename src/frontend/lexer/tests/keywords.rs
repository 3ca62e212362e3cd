//! Keyword and directive tests

use crate::frontend::lexer::{tokenize, LexError, TokenKind};

#[test]
fn plain_keywords() {
    let source = "include macro enter start type var class obj private public \
                  func const static if else elif while for on break continue return print \
                  none int uint real octet bit str";
    let expected = [
        TokenKind::Include,
        TokenKind::Macro,
        TokenKind::Enter,
        TokenKind::Start,
        TokenKind::Type,
        TokenKind::Var,
        TokenKind::Class,
        TokenKind::Obj,
        TokenKind::Private,
        TokenKind::Public,
        TokenKind::Func,
        TokenKind::Const,
        TokenKind::Static,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Elif,
        TokenKind::While,
        TokenKind::For,
        TokenKind::On,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::Return,
        TokenKind::Print,
        TokenKind::NoneLiteral,
        TokenKind::AInt,
        TokenKind::AUint,
        TokenKind::AReal,
        TokenKind::AOctet,
        TokenKind::ABit,
        TokenKind::AStr,
        TokenKind::Eof,
    ];

    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), expected.len());
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind, "wrong kind for {:?}", token.literal);
    }
}

#[test]
fn directive_keywords() {
    let source = "#include #macro #enter #start #type #var #class #obj #private #public \
                  #func #const #static #if #else #elif #while #for #on #break #continue \
                  #return #print #none #int #uint #real #octet #bit #str";
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Include);
    assert_eq!(tokens[0].literal, "#include");
    assert_eq!(tokens[23].kind, TokenKind::NoneLiteral);
    assert_eq!(tokens[24].kind, TokenKind::AInt);
    assert_eq!(tokens[29].kind, TokenKind::AStr);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn mixing_directive_and_plain_keywords_is_rejected() {
    let result = tokenize("#include #macro var");
    assert!(matches!(result, Err(LexError::MixedKeywordStyle { .. })));

    let result = tokenize("include macro #var");
    assert!(matches!(result, Err(LexError::MixedKeywordStyle { .. })));
}

#[test]
fn misspelled_directive_reports_early() {
    let result = tokenize("#inclde");
    match result {
        Err(LexError::MisspelledDirective { literal, line, .. }) => {
            assert_eq!(literal, "#inclde");
            assert_eq!(line, 1);
        }
        other => panic!("expected misspelled directive error, got {:?}", other),
    }
}

#[test]
fn directive_must_be_followed_by_a_word() {
    assert!(tokenize("# foo").is_err());
    assert!(tokenize("#1").is_err());
}

#[test]
fn non_keyword_words_are_identifiers() {
    let tokens = tokenize("includes vars classy").unwrap();
    for t in &tokens[..3] {
        assert_eq!(t.kind, TokenKind::Alnumus);
    }
}

#[test]
fn identifiers_do_not_fix_the_keyword_style() {
    // Only keywords participate in the style rule.
    let tokens = tokenize("foo bar #var").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Var);
}
