//! # JLang
//!
//! Runs JLang scripts from a terminal.
//!

mod term;

fn main() {
    term::main();
}
