use ansi_term::Style;
use chrono::Local;
use jlang::lang::{Action, Window};
use jlang::mach::Host;
use std::cell::RefCell;
use std::io::Write;

/// Host for the terminal: output on stdout, debug log on stderr.
pub struct Console {
    debug: bool,
    windows: RefCell<Vec<Window>>,
}

impl Console {
    pub fn new(debug: bool) -> Console {
        Console {
            debug,
            windows: RefCell::new(vec![]),
        }
    }

    pub fn windows(&self) -> Vec<Window> {
        self.windows.borrow().clone()
    }

    /// The button action of window `number`, counting from 1.
    pub fn action(&self, number: usize) -> Option<Action> {
        let windows = self.windows.borrow();
        let window = windows.get(number.checked_sub(1)?)?;
        window.button.as_ref().map(|button| button.action.clone())
    }
}

pub fn render(number: usize, window: &Window) {
    let bold = Style::new().bold();
    println!("{}", bold.paint(format!("┌─ [{}] {}", number, window.title)));
    for line in window.content.lines() {
        println!("│ {}", line);
    }
    if let Some(button) = &window.button {
        println!(
            "│ {}  (:press {})",
            Style::new().underline().paint(format!("[ {} ]", button.label)),
            number
        );
    }
    println!("└─");
}

impl Host for Console {
    fn print_output(&self, text: &str) {
        println!("{}", text);
    }

    fn print_debug(&self, text: &str) {
        if !self.debug {
            return;
        }
        let dimmed = Style::new().dimmed();
        let stamp = Local::now().format("%H:%M:%S%.3f").to_string();
        if text.starts_with("> ") || text.starts_with("--- ") {
            eprintln!("{} {}", dimmed.paint(stamp), dimmed.paint(text));
        } else {
            eprintln!("{} {}", dimmed.paint(stamp), text);
        }
    }

    fn clear_output(&self) {
        print!("\x1b[2J\x1b[1;1H");
        let _ = std::io::stdout().flush();
    }

    fn clear_debug(&self) {
        if self.debug {
            eprintln!("{}", Style::new().dimmed().paint("--- debug log cleared ---"));
        }
    }

    fn open_new_window(&self, window: Window) {
        let number = {
            let mut windows = self.windows.borrow_mut();
            windows.push(window);
            windows.len()
        };
        if let Some(window) = self.windows.borrow().last() {
            render(number, window);
        }
    }

    fn update_secondary_window_content(&self, text: &str) {
        let mut windows = self.windows.borrow_mut();
        let number = windows.len();
        if let Some(window) = windows.last_mut() {
            window.content.push('\n');
            window.content.push_str(text);
            println!("{} {}", Style::new().bold().paint(format!("[{}]", number)), text);
        }
    }
}
