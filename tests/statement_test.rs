mod common;
use common::*;
use jlang::mach::Event;

#[test]
fn test_print_literal() {
    assert_eq!(output(r#"print "Hello, World""#), vec!["Hello, World"]);
    assert_eq!(output(r#"print "say "hi" twice""#), vec![r#"say "hi" twice"#]);
    assert_eq!(output("print"), vec![""]);
}

#[test]
fn test_val_strips_quotes_and_semicolon() {
    assert_eq!(output("@VAL x = \"abc\";\nprint @x"), vec!["abc"]);
    assert_eq!(output("@VAL n = 42;\nprint @n"), vec!["42"]);
}

#[test]
fn test_string_definition() {
    let (host, runtime) = run("string greeting = \"hello there\"\nprint @greeting");
    assert_eq!(host.output(), vec!["hello there"]);
    assert_eq!(runtime.variable("greeting"), Some("hello there"));
}

#[test]
fn test_typographic_quotes() {
    let (host, runtime) = run("string s = \u{201C}caf\u{e9}\u{201D}\nprint @s");
    assert_eq!(runtime.variable("s"), Some("café"));
    assert_eq!(host.output(), vec!["café"]);
    let (_, runtime) = run("string s = \"café\"");
    assert_eq!(runtime.variable("s"), Some("café"));
}

#[test]
fn test_undefined_variable() {
    let (host, _) = run("print \"a\"\nprint @nope\nprint \"b\"");
    assert_eq!(host.output(), vec!["a", "b"]);
    assert_eq!(diagnostics(&host), vec!["UNDEFINED VARIABLE IN 2; @nope"]);
}

#[test]
fn test_unknown_command() {
    let (host, _) = run("shout \"x\"\nprint \"still here\"");
    assert_eq!(host.output(), vec!["still here"]);
    assert_eq!(diagnostics(&host), vec!["UNKNOWN COMMAND IN 1; 'shout'"]);
}

#[test]
fn test_rem_is_ignored() {
    let (host, _) = run("@REM print \"no\"\nprint \"yes\"");
    assert_eq!(host.output(), vec!["yes"]);
    assert!(diagnostics(&host).is_empty());
}

#[test]
fn test_stdo_remove() {
    let (host, _) = run("print \"a\"\n@STDO REMOVE\n@STDO REMOVE\nprint \"b\"");
    assert_eq!(count(&host, &Event::ClearOutput), 2);
    assert_eq!(host.output(), vec!["b"]);
    let (host, _) = run("@STDO REMOVE");
    assert_eq!(count(&host, &Event::ClearOutput), 1);
    let (host, _) = run("@STDO KEEP");
    assert_eq!(count(&host, &Event::ClearOutput), 0);
}

#[test]
fn test_debug_remove() {
    let (host, _) = run("print @nope\n@DEBUG REMOVE");
    assert_eq!(count(&host, &Event::ClearDebug), 1);
    assert!(diagnostics(&host).is_empty());
}

#[test]
fn test_line_endings() {
    assert_eq!(output("print \"a\"\r\n\r\nprint \"b\"\rprint \"c\""), vec!["a", "b", "c"]);
}
