/// Forward-only reader over a piece of script text.
///
/// The statement and window parsers are written against this instead of
/// pattern engines so that every match is leftmost and single pass.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Cursor<'a> {
        Cursor { src, pos: 0 }
    }

    pub fn rest(&self) -> &'a str {
        let src: &'a str = self.src;
        &src[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let src: &'a str = self.src;
        let s = &src[self.pos..self.pos + len];
        self.pos += len;
        s
    }

    /// Consumes `kw` if the text continues with it.
    pub fn keyword(&mut self, kw: &str) -> bool {
        if self.rest().starts_with(kw) {
            self.advance(kw.len());
            true
        } else {
            false
        }
    }

    /// Consumes any whitespace, line breaks included, returning how much.
    pub fn whitespace(&mut self) -> usize {
        let len = self
            .rest()
            .find(|c: char| !c.is_whitespace())
            .unwrap_or_else(|| self.rest().len());
        self.advance(len).chars().count()
    }

    pub fn eat(&mut self, ch: char) -> Option<()> {
        if self.peek() == Some(ch) {
            self.advance(ch.len_utf8());
            Some(())
        } else {
            None
        }
    }

    /// One or more word characters.
    pub fn word(&mut self) -> Option<&'a str> {
        let len = self
            .rest()
            .find(|c: char| !is_word_char(c))
            .unwrap_or_else(|| self.rest().len());
        if len == 0 {
            return None;
        }
        Some(self.advance(len))
    }

    /// Text up to the next `ch`, which is consumed but not returned.
    pub fn until(&mut self, ch: char) -> Option<&'a str> {
        let len = self.rest().find(ch)?;
        let s = self.advance(len);
        self.advance(ch.len_utf8());
        Some(s)
    }

    /// Like `until` but refuses to cross a line break.
    pub fn until_in_line(&mut self, ch: char) -> Option<&'a str> {
        let len = self.rest().find(|c: char| c == ch || c == '\n')?;
        if !self.rest()[len..].starts_with(ch) {
            return None;
        }
        self.until(ch)
    }

    /// A double quoted run of text on a single line, quotes removed.
    pub fn quoted(&mut self) -> Option<&'a str> {
        self.eat('"')?;
        self.until_in_line('"')
    }
}

/// Tries `pattern` at every occurrence of `needle` in `src`, returning the
/// first success. The cursor handed to `pattern` is positioned on the needle.
pub fn search<'a, T, F>(src: &'a str, needle: &str, mut pattern: F) -> Option<T>
where
    F: FnMut(Cursor<'a>) -> Option<T>,
{
    src.match_indices(needle).find_map(|(pos, _)| {
        let cursor = Cursor { src, pos };
        pattern(cursor)
    })
}

/// Replaces typographic quotes with their ASCII forms.
pub fn normalize_quotes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{2033}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{2032}' => '\'',
            _ => c,
        })
        .collect()
}

/// Removes one pair of surrounding double quotes. A lone `"` becomes empty.
pub fn unquote(s: &str) -> &str {
    if s.starts_with('"') && s.ends_with('"') {
        if s.len() >= 2 {
            &s[1..s.len() - 1]
        } else {
            ""
        }
    } else {
        s
    }
}
