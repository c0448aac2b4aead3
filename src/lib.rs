//! # JLang
//!
//! A small line-oriented scripting language with string variables,
//! functions, auxiliary windows and an optional memory budget.
//!
//! Scripts are plain text files, conventionally named `*.jlsh`. Run one
//! from a terminal with `jlang hello.jlsh` or start an interactive
//! session with `jlang`.
//! ```text
//! print "Hello World"
//! Hello World
//! ```
//!
//! Embedding the interpreter takes a [`Host`](mach::Host) to receive
//! output and a [`Runtime`](mach::Runtime) to run scripts on it.
//! ```
//! use jlang::mach::{Runtime, Transcript};
//! use std::path::Path;
//! use std::rc::Rc;
//!
//! let host = Rc::new(Transcript::new());
//! let mut runtime = Runtime::new(&host);
//! runtime.run("@VAL who = world;\nprint @who", Path::new("."));
//! assert_eq!(host.output(), vec!["world"]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
