use super::Host;
use crate::lang::Window;
use std::cell::RefCell;

/// A callback received by a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Output(String),
    Debug(String),
    ClearOutput,
    ClearDebug,
    Window(Window),
    WindowContent(String),
}

/// A host that keeps everything in memory.
///
/// Each callback is appended to an event log. Output and debug text can
/// also be read back the way a user would see it, with clears applied.
/// External scripts are read from the file system.
#[derive(Debug, Default)]
pub struct Transcript {
    events: RefCell<Vec<Event>>,
    windows: RefCell<Vec<Window>>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Output lines written since the last clear.
    pub fn output(&self) -> Vec<String> {
        let events = self.events.borrow();
        let start = events
            .iter()
            .rposition(|e| *e == Event::ClearOutput)
            .map_or(0, |i| i + 1);
        events[start..]
            .iter()
            .filter_map(|e| match e {
                Event::Output(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Debug lines written since the last clear.
    pub fn debug(&self) -> Vec<String> {
        let events = self.events.borrow();
        let start = events
            .iter()
            .rposition(|e| *e == Event::ClearDebug)
            .map_or(0, |i| i + 1);
        events[start..]
            .iter()
            .filter_map(|e| match e {
                Event::Debug(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Windows in the order they were opened, updates applied.
    pub fn windows(&self) -> Vec<Window> {
        self.windows.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Host for Transcript {
    fn print_output(&self, text: &str) {
        self.push(Event::Output(text.to_string()));
    }

    fn print_debug(&self, text: &str) {
        self.push(Event::Debug(text.to_string()));
    }

    fn clear_output(&self) {
        self.push(Event::ClearOutput);
    }

    fn clear_debug(&self) {
        self.push(Event::ClearDebug);
    }

    fn open_new_window(&self, window: Window) {
        self.windows.borrow_mut().push(window.clone());
        self.push(Event::Window(window));
    }

    fn update_secondary_window_content(&self, text: &str) {
        if let Some(window) = self.windows.borrow_mut().last_mut() {
            window.content.push('\n');
            window.content.push_str(text);
        }
        self.push(Event::WindowContent(text.to_string()));
    }
}
