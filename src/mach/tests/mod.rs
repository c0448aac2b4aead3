use crate::mach::{Event, Runtime, Transcript};
use std::path::Path;
use std::rc::Rc;

mod runtime_test;

fn run(script: &str) -> (Rc<Transcript>, Runtime) {
    let host = Rc::new(Transcript::new());
    let mut runtime = Runtime::new(&host);
    runtime.run(script, Path::new("."));
    (host, runtime)
}

const TRACE: [&str; 4] = ["> EXECUTING: ", "--- ", "Variable '", "Memory budget "];

fn diagnostics(host: &Transcript) -> Vec<String> {
    host.debug()
        .into_iter()
        .filter(|s| !TRACE.iter().any(|t| s.starts_with(t)))
        .collect()
}

fn count(host: &Transcript, event: &Event) -> usize {
    host.events().iter().filter(|e| *e == event).count()
}
