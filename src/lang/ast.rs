/// ## Abstract syntax tree
///
/// One statement per logical line. Blocks (`function`, `@NEW WINDOW`)
/// never reach this level; the structural pass removes them first.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Print(Printable),
    Define(String, String),
    MaxMem(i64),
    Rem,
    ClearOutput,
    ClearDebug,
    External(String),
    UpdateWindow(String),
    Call(String, Vec<String>),
    Nop,
}

/// What a `print` statement resolves at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printable {
    Empty,
    Literal(String),
    Var(String),
    Argument,
}

impl std::fmt::Display for Printable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Printable::*;
        match self {
            Empty => Ok(()),
            Literal(s) => write!(f, "\"{}\"", s),
            Var(s) => write!(f, "@{}", s),
            Argument => write!(f, "@ARGUMENTS.STRING"),
        }
    }
}
