//! End-to-end pipeline tests: source text through tokenizer, preprocessor,
//! parser, and constant evaluator.

use candic::{ConstEvaluator, NodeKind, Value};
use std::fs;

#[test]
fn run_evaluates_statements() {
    assert_eq!(candic::run("1 + 1;").unwrap(), Value::Number(2));
    assert_eq!(
        candic::run("#var answer = 40 + 2; answer;").unwrap(),
        Value::Number(42)
    );
}

#[test]
fn run_reports_errors_with_positions() {
    let err = candic::run("#var a = ;").unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("Line:"), "message was: {}", message);
    assert!(message.contains("Col:"), "message was: {}", message);
}

#[test]
fn run_file_compiles_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.candi");
    fs::write(
        &path,
        "#var greeting = 'hello';\n#func shout { #return greeting; };\n",
    )
    .unwrap();

    candic::run_file(&path).unwrap();
}

#[test]
fn includes_resolve_relative_to_the_including_file() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("lib");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("shared.candi"), "#var base = 40;").unwrap();
    fs::write(
        sub.join("middle.candi"),
        "#include 'shared.candi';\n#var offset = 2;",
    )
    .unwrap();
    let main = dir.path().join("main.candi");
    fs::write(
        &main,
        "#include 'lib/middle.candi';\n#var answer = base + offset;",
    )
    .unwrap();

    let ast = candic::compile_file(&main).unwrap();
    let mut evaluator = ConstEvaluator::new();
    evaluator.evaluate(&ast).unwrap();
    assert_eq!(
        candic::frontend::const_eval::env::lookup(evaluator.global(), "answer"),
        Some(Value::Number(42))
    );
}

#[test]
fn macros_feed_the_parser() {
    let value = candic::run("#macro twice(x) { x + x }; #var a = twice(21); a;").unwrap();
    assert_eq!(value, Value::Number(42));
}

#[test]
fn full_program_shape() {
    let source = "\
#class Counter {
    #var count = 0;
};
#func bump(n) {
    #return n + 1;
};
#var start = 0;
#var next = bump(start);
";
    let ast = candic::compile("<test>", source, None).unwrap();
    assert_eq!(ast.kind, NodeKind::PragmaticBlock);
    assert_eq!(ast.children.len(), 4);
    assert_eq!(ast.children[0].kind, NodeKind::ClassDefinition);
    assert_eq!(ast.children[1].kind, NodeKind::MethodDefinition);

    let mut evaluator = ConstEvaluator::new();
    evaluator.evaluate(&ast).unwrap();
    assert_eq!(
        candic::frontend::const_eval::env::lookup(evaluator.global(), "next"),
        Some(Value::Number(1))
    );
}

#[test]
fn keyword_styles_are_per_file() {
    // A directive-style file may include a plain-style file; the rule is
    // scoped to each source file.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("plain.candi"), "var base = 40;").unwrap();
    let main = dir.path().join("main.candi");
    fs::write(&main, "#include 'plain.candi';\n#var answer = base + 2;").unwrap();

    candic::run_file(&main).unwrap();
}

#[test]
fn dump_is_an_indented_tree() {
    let ast = candic::compile("<test>", "#var a = 1 + 2;", None).unwrap();
    let dump = ast.pretty();
    let lines: Vec<&str> = dump.lines().collect();
    assert!(lines[0].starts_with("[PragmaticBlock]"));
    assert!(lines[1].starts_with("  [AnonVariableDefinitionAssignment]"));
    assert!(lines[2].starts_with("    [Alnumus] a"));
    assert!(lines[3].starts_with("    [Addition] +"));
}
