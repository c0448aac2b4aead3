/*!
## Rust Machine Module

This Rust module executes parsed JLang scripts on behalf of a host.

*/

mod budget;
mod function;
mod host;
mod runtime;
mod stack;
mod transcript;
mod var;

pub use budget::Budget;
pub use budget::VALUE_OVERHEAD;
pub use function::Function;
pub use host::load;
pub use host::run_external;
pub use host::Host;
pub use runtime::Runtime;
pub use runtime::MAX_DEPTH;
pub use stack::Stack;
pub use transcript::Event;
pub use transcript::Transcript;
pub use var::Var;

#[cfg(test)]
mod tests;
