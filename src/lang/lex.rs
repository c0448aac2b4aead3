use super::Line;

/// Splits script text into logical lines.
///
/// Both `\n` and `\r` end a line. Every line is trimmed and empty
/// lines are discarded.
pub fn lex(s: &str) -> Vec<Line> {
    s.split(is_line_break)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(index, text)| Line::new(index + 1, text))
        .collect()
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}
