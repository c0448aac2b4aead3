use super::cursor::Cursor;
use super::{Error, Line};
use crate::error;

const FUNCTION: &str = "function";
const NEW_WINDOW: &str = "@NEW WINDOW";

/// Something the structural pass pulled out of the line sequence.
///
/// Blocks are listed in source order. Errors are included so the runtime
/// can report them at the point they occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Function(String, Vec<Line>),
    Window(Vec<Line>),
    Error(Error),
}

/// The result of one structural pass over a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub blocks: Vec<Block>,
    pub statements: Vec<Line>,
}

/// Separates function and window blocks from top-level statements.
///
/// A failed block consumes only its declaration line; the lines that
/// follow it are scanned again as ordinary input.
pub fn structure(lines: &[Line]) -> Outline {
    let mut outline = Outline::default();
    let mut index = 0;
    while index < lines.len() {
        let line = &lines[index];
        let text = line.text();
        if text.starts_with(FUNCTION) {
            match function(lines, index) {
                Ok((name, body, next)) => {
                    outline.blocks.push(Block::Function(name, body));
                    index = next;
                }
                Err(error) => {
                    outline.blocks.push(Block::Error(error));
                    index += 1;
                }
            }
        } else if text.starts_with(NEW_WINDOW) {
            match window(lines, index) {
                Ok((body, next)) => {
                    outline.blocks.push(Block::Window(body));
                    index = next;
                }
                Err(error) => {
                    outline.blocks.push(Block::Error(error));
                    index += 1;
                }
            }
        } else {
            outline.statements.push(line.clone());
            index += 1;
        }
    }
    outline
}

fn function(lines: &[Line], start: usize) -> Result<(String, Vec<Line>, usize), Error> {
    let declaration = &lines[start];
    let mut cursor = Cursor::new(declaration.text());
    cursor.keyword(FUNCTION);
    let name = match (cursor.whitespace(), cursor.word()) {
        (n, Some(name)) if n > 0 => name.to_string(),
        _ => return Err(error!(SyntaxError, declaration.number(); "MISSING FUNCTION NAME")),
    };
    if !declaration.text().contains('{') {
        return Err(error!(SyntaxError, declaration.number();
            format!("MISSING '{{' IN FUNCTION '{}'", name)));
    }
    let mut body = vec![];
    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if line.text() == "}" {
            return Ok((name, body, index + 1));
        }
        body.push(line.clone());
    }
    Err(error!(SyntaxError, declaration.number();
        format!("EXPECTED '}}' TO CLOSE FUNCTION '{}'", name)))
}

fn window(lines: &[Line], start: usize) -> Result<(Vec<Line>, usize), Error> {
    let declaration = &lines[start];
    let text = declaration.text();
    if !text.ends_with('{') {
        // @NEW WINDOW { @Title = "T" @Content = { TEXT = "hi" } }
        if let (Some(open), true) = (text.find('{'), text.ends_with('}')) {
            let inner = &text[open + 1..text.len() - 1];
            let body = match declaration.number() {
                Some(number) => vec![Line::new(number, inner)],
                None => vec![Line::direct(inner)],
            };
            return Ok((body, start + 1));
        }
        return Err(error!(SyntaxError, declaration.number();
            "EXPECTED '{' TO OPEN @NEW WINDOW"));
    }
    let mut body = vec![];
    let mut depth = 1;
    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if line.text() == "}" {
            depth -= 1;
            if depth == 0 {
                return Ok((body, index + 1));
            }
        } else if line.text().ends_with('{') {
            depth += 1;
        }
        body.push(line.clone());
    }
    Err(error!(SyntaxError, declaration.number();
        "EXPECTED '}' TO CLOSE @NEW WINDOW"))
}
