mod common;
use common::*;
use jlang::lang::Line;

#[test]
fn test_first_argument() {
    let script = "function f {\nprint @ARGUMENTS.STRING\n}\ncall f[a,b]";
    assert_eq!(output(script), vec!["a"]);
    let script = "function f {\nprint @ARGUMENTS.STRING\n}\ncall f[\"x y\", z]";
    assert_eq!(output(script), vec!["x y"]);
}

#[test]
fn test_body_recorded() {
    let (_, runtime) = run("function greet {\nprint \"hi\"\n@VAL x = 1;\n}\nprint \"top\"");
    assert_eq!(
        runtime.function("greet"),
        Some(&[Line::new(2, "print \"hi\""), Line::new(3, "@VAL x = 1;")][..])
    );
}

#[test]
fn test_defined_after_call() {
    assert_eq!(output("call late[]\nfunction late {\nprint \"late\"\n}"), vec!["late"]);
}

#[test]
fn test_call_without_brackets() {
    assert_eq!(output("function f {\nprint \"ran\"\n}\ncall f"), vec!["ran"]);
}

#[test]
fn test_undefined_function() {
    let (host, _) = run("call undefined_fn[]");
    assert!(host.output().is_empty());
    assert!(diagnostics(&host).is_empty());
}

// Current behavior: the last definition replaces earlier ones.
#[test]
fn test_last_definition_wins() {
    let script = "function f {\nprint \"one\"\n}\nfunction f {\nprint \"two\"\n}\ncall f[]";
    assert_eq!(output(script), vec!["two"]);
}

#[test]
fn test_missing_argument() {
    let (host, _) = run("function f {\nprint @ARGUMENTS.STRING\n}\ncall f[]");
    assert!(host.output().is_empty());
    assert_eq!(
        diagnostics(&host),
        vec!["UNSUPPORTED ARGUMENT IN 2; NO ARGUMENT TO PRINT"]
    );
}

#[test]
fn test_unclosed_function() {
    let (host, runtime) = run("function f {\nprint \"x\"");
    assert_eq!(runtime.function("f"), None);
    assert_eq!(host.output(), vec!["x"]);
    assert_eq!(
        diagnostics(&host),
        vec!["SYNTAX ERROR IN 1; EXPECTED '}' TO CLOSE FUNCTION 'f'"]
    );
}

#[test]
fn test_missing_name() {
    let (host, _) = run("function {\nprint \"x\"\n}");
    assert_eq!(
        diagnostics(&host)[0],
        "SYNTAX ERROR IN 1; MISSING FUNCTION NAME"
    );
}

#[test]
fn test_functions_share_variables() {
    let script = "function set {\nstring v = \"inside\"\n}\ncall set[]\nprint @v";
    assert_eq!(output(script), vec!["inside"]);
}
