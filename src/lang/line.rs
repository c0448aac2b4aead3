use super::LineNumber;

/// A trimmed, non-empty line of script text.
///
/// Lines produced by [`lex`](super::lex) are numbered from 1 in scanner
/// order. Blank source lines are dropped before numbering, so a number
/// counts logical lines, not lines of the file. Button actions are
/// direct lines with no number at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    pub fn new(number: usize, text: &str) -> Line {
        Line {
            number: Some(number),
            text: text.trim().to_string(),
        }
    }

    pub fn direct(text: &str) -> Line {
        Line {
            number: None,
            text: text.trim().to_string(),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let line = Line::new(4, "  print \"x\"\t");
        assert_eq!(line.text(), "print \"x\"");
        assert_eq!(line.number(), Some(4));
        assert_eq!(Line::direct(" call f ").number(), None);
    }
}
