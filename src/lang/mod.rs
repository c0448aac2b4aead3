/*!
# Rust Language Module

This Rust module provides line scanning and parsing of the JLang language.

*/

pub type LineNumber = Option<usize>;

mod cursor;
mod error;
mod lex;
mod line;
mod parse;
mod structure;
mod token;
mod window;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use structure::structure;
pub use structure::Block;
pub use structure::Outline;
pub use token::Command;
pub use window::Action;
pub use window::Button;
pub use window::Window;

pub mod ast;

#[cfg(test)]
mod tests;
