use super::ast::*;
use super::cursor::{normalize_quotes, unquote, Cursor};
use super::{Command, Error, Line};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Parses one logical line into a statement.
///
/// Errors carry the line's number. Some malformed input is not an error:
/// an unparseable `call` and an unknown `@STDO` operand both become
/// [`Statement::Nop`].
pub fn parse(line: &Line) -> Result<Statement> {
    match Parser::parse(line.text()) {
        Err(e) => Err(e.in_line_number(line.number())),
        Ok(r) => Ok(r),
    }
}

struct Parser;

impl Parser {
    fn parse(text: &str) -> Result<Statement> {
        let text = text.trim();
        let mut words = text.split_whitespace();
        let first = match words.next() {
            Some(word) => word,
            None => return Ok(Statement::Nop),
        };
        let command = match Command::from_string(first) {
            Some(command) => command,
            None => return Err(error!(UnknownCommand; format!("'{}'", first))),
        };
        match command {
            Command::Print => Parser::print(text, words.next()),
            Command::String | Command::Val => Parser::define(command, text),
            Command::MaxMem => Parser::max_mem(words.collect()),
            Command::Rem => Ok(Statement::Rem),
            Command::Stdo => Ok(match words.next() {
                Some("REMOVE") => Statement::ClearOutput,
                _ => Statement::Nop,
            }),
            Command::Debug => Ok(match words.next() {
                Some("REMOVE") => Statement::ClearDebug,
                _ => Statement::Nop,
            }),
            Command::External => Parser::external(words.collect()),
            Command::New => Ok(Statement::Nop),
            Command::Update => Parser::update(text),
            Command::Call => Ok(Parser::call(text).unwrap_or(Statement::Nop)),
        }
    }

    fn print(text: &str, argument: Option<&str>) -> Result<Statement> {
        let argument = match argument {
            Some(argument) => argument,
            None => return Ok(Statement::Print(Printable::Empty)),
        };
        if let Some(kind) = argument.strip_prefix("@ARGUMENTS.") {
            if kind == "STRING" {
                return Ok(Statement::Print(Printable::Argument));
            }
            return Err(error!(UnsupportedArgument; format!("@ARGUMENTS.{}", kind)));
        }
        if let Some(name) = argument.strip_prefix('@') {
            return Ok(Statement::Print(Printable::Var(name.to_string())));
        }
        if argument.starts_with('"') {
            if let (Some(first), Some(last)) = (text.find('"'), text.rfind('"')) {
                if first != last {
                    let literal = &text[first + 1..last];
                    return Ok(Statement::Print(Printable::Literal(literal.to_string())));
                }
            }
            return Err(error!(SyntaxError; "INCOMPLETE STRING LITERAL"));
        }
        Err(error!(SyntaxError; format!("UNRECOGNIZED PRINT ARGUMENT '{}'", argument)))
    }

    fn define(command: Command, text: &str) -> Result<Statement> {
        let normalized = normalize_quotes(text);
        let mut cursor = Cursor::new(&normalized);
        let parsed = match command {
            Command::String => Parser::string_assignment(&mut cursor),
            _ => Parser::val_assignment(&mut cursor),
        };
        match parsed {
            Some((name, value)) => Ok(Statement::Define(name.to_string(), value.to_string())),
            None => Err(error!(SyntaxError; match command {
                Command::String => "USAGE: string <name> = \"<value>\"",
                _ => "USAGE: @VAL <name> = <value>;",
            })),
        }
    }

    // string <name> = "<value>"
    fn string_assignment<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
        if !cursor.keyword(Command::String.keyword()) || cursor.whitespace() == 0 {
            return None;
        }
        let name = cursor.word()?;
        cursor.whitespace();
        cursor.eat('=')?;
        cursor.whitespace();
        let value = cursor.quoted()?;
        Some((name, strip_semicolon(value)))
    }

    // @VAL <name> = <value>
    fn val_assignment<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
        if !cursor.keyword(Command::Val.keyword()) || cursor.whitespace() == 0 {
            return None;
        }
        let name = cursor.word()?;
        cursor.whitespace();
        cursor.eat('=')?;
        let value = strip_semicolon(cursor.rest().trim());
        Some((name, unquote(value)))
    }

    fn max_mem(operands: Vec<&str>) -> Result<Statement> {
        if operands.is_empty() {
            return Err(error!(SyntaxError; "USAGE: MAX_MEM <bytes>;"));
        }
        let digits: String = operands
            .concat()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        match digits.parse::<i64>() {
            Ok(bytes) => Ok(Statement::MaxMem(bytes)),
            Err(_) => Err(error!(SyntaxError; "MEMORY VALUE MUST BE A WHOLE NUMBER")),
        }
    }

    fn external(operands: Vec<&str>) -> Result<Statement> {
        match operands.as_slice() {
            ["RUN", path] => Ok(Statement::External(path.replace('"', ""))),
            _ => Err(error!(SyntaxError; "USAGE: @EXTERNAL RUN \"<file.jlsh>\"")),
        }
    }

    fn update(text: &str) -> Result<Statement> {
        let normalized = normalize_quotes(text);
        let mut cursor = Cursor::new(&normalized);
        match Parser::window_text(&mut cursor) {
            Some(s) => Ok(Statement::UpdateWindow(s.to_string())),
            None => Err(error!(SyntaxError; "USAGE: @UPDATE WINDOW TEXT = \"<text>\"")),
        }
    }

    // @UPDATE WINDOW TEXT = "<text>"
    fn window_text<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
        if !cursor.keyword(Command::Update.keyword()) || cursor.whitespace() == 0 {
            return None;
        }
        if !cursor.keyword("WINDOW") || cursor.whitespace() == 0 || !cursor.keyword("TEXT") {
            return None;
        }
        cursor.whitespace();
        cursor.eat('=')?;
        cursor.whitespace();
        cursor.quoted()
    }

    // call <name>[<arg>, <arg>, ...]
    fn call(text: &str) -> Option<Statement> {
        let mut cursor = Cursor::new(text);
        if !cursor.keyword(Command::Call.keyword()) || cursor.whitespace() == 0 {
            return None;
        }
        let name = cursor.word()?.to_string();
        let rest = cursor.rest();
        let mut args = vec![];
        if rest.starts_with('[') {
            if let Some(close) = rest.rfind(']') {
                let inner = &rest[1..close];
                if !inner.trim().is_empty() {
                    args = inner
                        .split(',')
                        .map(|arg| unquote(arg.trim()).to_string())
                        .collect();
                }
            }
        }
        Some(Statement::Call(name, args))
    }
}

fn strip_semicolon(s: &str) -> &str {
    s.strip_suffix(';').unwrap_or(s)
}
