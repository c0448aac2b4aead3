use super::cursor::{normalize_quotes, search, Cursor};
use super::Line;
use std::path::{Path, PathBuf};

/// An auxiliary display surface declared with `@NEW WINDOW { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub title: String,
    pub content: String,
    pub button: Option<Button>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

/// A single statement bound to a button together with the directory
/// that was current when the window was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub statement: String,
    pub directory: PathBuf,
}

const DEFAULT_TITLE: &str = "Window";

impl Window {
    /// Builds a window from the lines between the braces of its block.
    ///
    /// ```text
    /// @NEW WINDOW {
    ///     @Title = "Greeter"
    ///     @Content = {
    ///         TEXT = "Press the button"
    ///         BUTTON = "Hello" : { call hello[] }
    ///     }
    /// }
    /// ```
    pub fn hydrate(body: &[Line], directory: &Path) -> Window {
        let source = normalize_quotes(
            &body
                .iter()
                .map(|line| line.text())
                .collect::<Vec<&str>>()
                .join("\n"),
        );
        let title = search(&source, "@Title", |mut c| {
            c.keyword("@Title");
            assign(&mut c)?;
            c.quoted()
        })
        .unwrap_or(DEFAULT_TITLE);

        let mut content = "";
        let mut button = None;
        let region = search(&source, "@Content", |mut c| {
            c.keyword("@Content");
            assign(&mut c)?;
            c.eat('{')?;
            Some(c.rest())
        });
        if let Some(region) = region {
            let inner = match region.find('}') {
                Some(end) => &region[..end],
                None => region,
            };
            content = search(inner, "TEXT", |mut c| {
                c.keyword("TEXT");
                assign(&mut c)?;
                c.quoted()
            })
            .unwrap_or("");
            button = search(&source, "BUTTON", |mut c| {
                c.keyword("BUTTON");
                assign(&mut c)?;
                let label = c.quoted()?;
                c.whitespace();
                c.eat(':')?;
                c.whitespace();
                c.eat('{')?;
                let statement = c.until('}')?;
                Some(Button {
                    label: label.trim().to_string(),
                    action: Action {
                        statement: statement.trim().to_string(),
                        directory: directory.to_path_buf(),
                    },
                })
            });
        }
        Window {
            title: title.to_string(),
            content: content.to_string(),
            button,
        }
    }
}

// \s*=\s*
fn assign(c: &mut Cursor) -> Option<()> {
    c.whitespace();
    c.eat('=')?;
    c.whitespace();
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrate(lines: &[&str]) -> Window {
        let body: Vec<Line> = lines
            .iter()
            .enumerate()
            .map(|(i, s)| Line::new(i + 1, s))
            .collect();
        Window::hydrate(&body, Path::new("/scripts"))
    }

    #[test]
    fn test_title_and_text() {
        let w = hydrate(&["@Title = \"T\"", "@Content = {", "TEXT = \"hi\"", "}"]);
        assert_eq!(w.title, "T");
        assert_eq!(w.content, "hi");
        assert_eq!(w.button, None);
    }

    #[test]
    fn test_defaults() {
        let w = hydrate(&["nothing here"]);
        assert_eq!(w.title, "Window");
        assert_eq!(w.content, "");
        assert_eq!(w.button, None);
    }

    #[test]
    fn test_button() {
        let w = hydrate(&[
            "@Title=\"Buttons\"",
            "@Content = {",
            "TEXT = \"Click it\"",
            "BUTTON = \" Go \" : { print \"clicked\" }",
            "}",
        ]);
        assert_eq!(w.title, "Buttons");
        assert_eq!(w.content, "Click it");
        let button = w.button.unwrap();
        assert_eq!(button.label, "Go");
        assert_eq!(button.action.statement, "print \"clicked\"");
        assert_eq!(button.action.directory, PathBuf::from("/scripts"));
    }

    #[test]
    fn test_button_needs_content() {
        let w = hydrate(&["@Title = \"T\"", "BUTTON = \"Go\" : { print \"x\" }"]);
        assert_eq!(w.button, None);
    }

    #[test]
    fn test_text_outside_content_ignored() {
        let w = hydrate(&["TEXT = \"stray\"", "@Content = {", "}"]);
        assert_eq!(w.content, "");
    }

    #[test]
    fn test_typographic_quotes() {
        let w = hydrate(&["@Title = \u{201C}Caf\u{e9}\u{201D}"]);
        assert_eq!(w.title, "Café");
    }
}
