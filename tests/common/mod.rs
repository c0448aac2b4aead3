#![allow(dead_code)]

use jlang::mach::{Event, Runtime, Transcript};
use std::path::Path;
use std::rc::Rc;

pub fn run(script: &str) -> (Rc<Transcript>, Runtime) {
    run_in(script, Path::new("."))
}

pub fn run_in(script: &str, directory: &Path) -> (Rc<Transcript>, Runtime) {
    let host = Rc::new(Transcript::new());
    let mut runtime = Runtime::new(&host);
    runtime.run(script, directory);
    (host, runtime)
}

pub fn output(script: &str) -> Vec<String> {
    run(script).0.output()
}

const TRACE: [&str; 4] = ["> EXECUTING: ", "--- ", "Variable '", "Memory budget "];

/// Debug lines that are not part of the execution trace.
pub fn diagnostics(host: &Transcript) -> Vec<String> {
    host.debug()
        .into_iter()
        .filter(|s| !TRACE.iter().any(|t| s.starts_with(t)))
        .collect()
}

pub fn count(host: &Transcript, event: &Event) -> usize {
    host.events().iter().filter(|e| *e == event).count()
}
