use std::collections::HashMap;

thread_local!(
    static STRING_TO_COMMAND: HashMap<&'static str, Command> = Command::ALL
        .iter()
        .map(|c| (c.keyword(), *c))
        .collect();
);

/// The leading token of a statement.
///
/// Keywords are case sensitive and must be followed by whitespace or
/// end the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Print,
    String,
    Val,
    MaxMem,
    Rem,
    Stdo,
    Debug,
    External,
    New,
    Update,
    Call,
}

impl Command {
    const ALL: [Command; 11] = [
        Command::Print,
        Command::String,
        Command::Val,
        Command::MaxMem,
        Command::Rem,
        Command::Stdo,
        Command::Debug,
        Command::External,
        Command::New,
        Command::Update,
        Command::Call,
    ];

    pub fn from_string(s: &str) -> Option<Command> {
        STRING_TO_COMMAND.with(|stc| stc.get(s).copied())
    }

    pub fn keyword(&self) -> &'static str {
        use Command::*;
        match self {
            Print => "print",
            String => "string",
            Val => "@VAL",
            MaxMem => "MAX_MEM",
            Rem => "@REM",
            Stdo => "@STDO",
            Debug => "@DEBUG",
            External => "@EXTERNAL",
            New => "@NEW",
            Update => "@UPDATE",
            Call => "call",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
