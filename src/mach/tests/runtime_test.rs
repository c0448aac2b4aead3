use super::*;
use crate::lang::{Action, Line};
use crate::mach::{Budget, MAX_DEPTH};
use std::path::PathBuf;

#[test]
fn test_trace_order() {
    let (host, _) = run("print \"a\"\nstring s = \"b\"");
    assert_eq!(
        host.debug(),
        vec![
            "--- Running main script ---",
            "> EXECUTING: print \"a\"",
            "> EXECUTING: string s = \"b\"",
            "Variable 's' defined with value 'b'.",
        ]
    );
}

#[test]
fn test_dropped_host_is_tolerated() {
    let host = Rc::new(Transcript::new());
    let mut runtime = Runtime::new(&host);
    drop(host);
    runtime.run("string s = \"kept\"\nprint @s\n@STDO REMOVE\ncall f[x]", Path::new("."));
    assert_eq!(runtime.variable("s"), Some("kept"));
}

#[test]
fn test_function_lookup() {
    let (_, runtime) = run("function f {\nprint \"x\"\n}");
    assert_eq!(runtime.function("f"), Some(&[Line::new(2, "print \"x\"")][..]));
    assert_eq!(runtime.function("g"), None);
}

#[test]
fn test_budget_inspection() {
    let (_, runtime) = run("string a = \"x\"");
    assert_eq!(runtime.budget(), None);
    let (_, runtime) = run("MAX_MEM 100;\nstring a = \"x\"");
    let budget = runtime.budget().unwrap();
    assert_eq!(budget.ceiling(), 100);
    assert_eq!(budget.used(), Budget::size_of("x"));
}

#[test]
fn test_max_mem_resets_usage() {
    let (_, runtime) = run("MAX_MEM 100;\nstring a = \"x\"\nMAX_MEM 50;");
    assert_eq!(runtime.budget().map(Budget::used), Some(0));
    assert_eq!(runtime.budget().map(Budget::ceiling), Some(50));
}

#[test]
fn test_free_is_not_a_command() {
    let (host, runtime) = run("string a = \"kept\"\n@FREE a");
    assert_eq!(runtime.variable("a"), Some("kept"));
    assert_eq!(diagnostics(&host), vec!["UNKNOWN COMMAND IN 2; '@FREE'"]);
}

#[test]
fn test_recursion_is_bounded() {
    let (host, _) = run("function loop {\nprint \"tick\"\ncall loop[]\n}\ncall loop[]");
    assert_eq!(host.output().len(), MAX_DEPTH);
    assert_eq!(
        diagnostics(&host),
        vec!["NESTING TOO DEEP IN 3; MAXIMUM NESTING IS 64"]
    );
}

#[test]
fn test_press_uses_action_directory() {
    let host = Rc::new(Transcript::new());
    let mut runtime = Runtime::new(&host);
    runtime.run("string who = \"world\"", Path::new("."));
    runtime.press(&Action {
        statement: "print @who".to_string(),
        directory: PathBuf::from("/nowhere"),
    });
    assert_eq!(host.output(), vec!["world"]);
    runtime.press(&Action {
        statement: "print @missing".to_string(),
        directory: PathBuf::from("/nowhere"),
    });
    assert_eq!(diagnostics(&host), vec!["UNDEFINED VARIABLE; @missing"]);
}

#[test]
fn test_clear_events() {
    let (host, _) = run("print \"a\"\n@STDO REMOVE\n@STDO REMOVE\n@DEBUG REMOVE\nprint \"b\"");
    assert_eq!(count(&host, &Event::ClearOutput), 2);
    assert_eq!(count(&host, &Event::ClearDebug), 1);
    assert_eq!(host.output(), vec!["b"]);
    assert_eq!(host.debug(), vec!["> EXECUTING: print \"b\""]);
}
