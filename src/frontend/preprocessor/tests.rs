//! Preprocessor tests

use super::{expand_macros, preprocess, PreprocessError};
use crate::frontend::lexer::{tokenize, TokenKind};
use std::fs;
use std::io::Write;

fn kinds(tokens: &[crate::frontend::lexer::Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn stream_without_directives_passes_through() {
    let tokens = tokenize("#var a = 1;").unwrap();
    let expanded = preprocess(tokens.clone(), None).unwrap();
    assert_eq!(expanded, tokens);
}

#[test]
fn include_splices_the_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let included = dir.path().join("defs.candi");
    fs::write(&included, "#var a = 1;").unwrap();

    let main_path = dir.path().join("main.candi");
    let mut main = fs::File::create(&main_path).unwrap();
    write!(main, "#include 'defs.candi'; #var b = 2;").unwrap();
    drop(main);

    let source = fs::read_to_string(&main_path).unwrap();
    let tokens = tokenize(&source).unwrap();
    let expanded = preprocess(tokens, Some(&main_path)).unwrap();

    assert_eq!(
        kinds(&expanded),
        vec![
            TokenKind::Var,
            TokenKind::Alnumus,
            TokenKind::SimpleAssignment,
            TokenKind::NumberLiteral,
            TokenKind::Eos,
            TokenKind::Var,
            TokenKind::Alnumus,
            TokenKind::SimpleAssignment,
            TokenKind::NumberLiteral,
            TokenKind::Eos,
            TokenKind::Eof,
        ]
    );
    // Spliced tokens keep their originating positions.
    assert_eq!(expanded[0].line, 1);
}

#[test]
fn includes_nest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("inner.candi"), "#var a = 1;").unwrap();
    fs::write(
        dir.path().join("middle.candi"),
        "#include 'inner.candi'; #var b = 2;",
    )
    .unwrap();
    let main_path = dir.path().join("main.candi");
    fs::write(&main_path, "#include 'middle.candi'; #var c = 3;").unwrap();

    let source = fs::read_to_string(&main_path).unwrap();
    let tokens = tokenize(&source).unwrap();
    let expanded = preprocess(tokens, Some(&main_path)).unwrap();

    let var_count = expanded.iter().filter(|t| t.kind == TokenKind::Var).count();
    assert_eq!(var_count, 3);
    // Still exactly one eof, at the end.
    let eof_count = expanded.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eof_count, 1);
    assert_eq!(expanded.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn include_cycle_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let a_path = dir.path().join("a.candi");
    let b_path = dir.path().join("b.candi");
    fs::write(&a_path, "#include 'b.candi';").unwrap();
    fs::write(&b_path, "#include 'a.candi';").unwrap();

    let source = fs::read_to_string(&a_path).unwrap();
    let tokens = tokenize(&source).unwrap();
    let result = preprocess(tokens, Some(&a_path));
    assert!(matches!(result, Err(PreprocessError::IncludeCycle { .. })));
}

#[test]
fn self_include_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.candi");
    fs::write(&path, "#include 'a.candi';").unwrap();

    let source = fs::read_to_string(&path).unwrap();
    let tokens = tokenize(&source).unwrap();
    let result = preprocess(tokens, Some(&path));
    assert!(matches!(result, Err(PreprocessError::IncludeCycle { .. })));
}

#[test]
fn missing_include_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.candi");
    fs::write(&path, "#include 'nowhere.candi';").unwrap();

    let source = fs::read_to_string(&path).unwrap();
    let tokens = tokenize(&source).unwrap();
    let result = preprocess(tokens, Some(&path));
    assert!(matches!(result, Err(PreprocessError::Io { .. })));
}

#[test]
fn include_must_name_a_string() {
    let tokens = tokenize("#include 42;").unwrap();
    let result = preprocess(tokens, None);
    assert!(matches!(
        result,
        Err(PreprocessError::MalformedInclude { .. })
    ));
}

#[test]
fn macro_expands_with_arguments() {
    // macro twice(x) { x + x };  twice(21);
    let tokens = tokenize("#macro twice(x) { x + x }; twice(21);").unwrap();
    let expanded = expand_macros(tokens).unwrap();
    assert_eq!(
        kinds(&expanded),
        vec![
            TokenKind::NumberLiteral,
            TokenKind::Addition,
            TokenKind::NumberLiteral,
            TokenKind::Eos,
            TokenKind::Eof,
        ]
    );
    assert_eq!(expanded[0].literal, "21");
    assert_eq!(expanded[2].literal, "21");
}

#[test]
fn macro_arguments_may_hold_token_sequences() {
    let tokens = tokenize("#macro wrap(x) { (x) }; wrap(1 + 2);").unwrap();
    let expanded = expand_macros(tokens).unwrap();
    assert_eq!(
        kinds(&expanded),
        vec![
            TokenKind::OpenScope,
            TokenKind::NumberLiteral,
            TokenKind::Addition,
            TokenKind::NumberLiteral,
            TokenKind::CloseScope,
            TokenKind::Eos,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn macros_expand_transitively() {
    let tokens =
        tokenize("#macro one() { 1 }; #macro two() { one() + one() }; two();").unwrap();
    let expanded = expand_macros(tokens).unwrap();
    assert_eq!(
        kinds(&expanded),
        vec![
            TokenKind::NumberLiteral,
            TokenKind::Addition,
            TokenKind::NumberLiteral,
            TokenKind::Eos,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn expanded_tokens_take_the_call_site_position() {
    let tokens = tokenize("#macro answer() { 42 };\n\n\nanswer();").unwrap();
    let expanded = expand_macros(tokens).unwrap();
    assert_eq!(expanded[0].literal, "42");
    assert_eq!(expanded[0].line, 4);
}

#[test]
fn recursive_macro_is_rejected() {
    let tokens = tokenize("#macro looped() { looped() }; looped();").unwrap();
    let result = expand_macros(tokens);
    assert!(matches!(result, Err(PreprocessError::Macro { .. })));
}

#[test]
fn macro_argument_count_is_checked() {
    let tokens = tokenize("#macro twice(x) { x + x }; twice(1, 2);").unwrap();
    assert!(matches!(
        expand_macros(tokens),
        Err(PreprocessError::Macro { .. })
    ));
}

#[test]
fn macro_name_without_call_is_left_alone() {
    let tokens = tokenize("#macro twice(x) { x + x }; twice;").unwrap();
    let expanded = expand_macros(tokens).unwrap();
    assert_eq!(
        kinds(&expanded),
        vec![TokenKind::Alnumus, TokenKind::Eos, TokenKind::Eof]
    );
}
