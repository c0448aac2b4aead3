use crate::lang::Line;
use std::collections::HashMap;

/// Function bodies by name.
///
/// A later definition replaces an earlier one with the same name.
#[derive(Debug, Default)]
pub struct Function {
    bodies: HashMap<String, Vec<Line>>,
}

impl Function {
    pub fn new() -> Function {
        Function::default()
    }

    /// Returns the body that was replaced, if any.
    pub fn define(&mut self, name: String, body: Vec<Line>) -> Option<Vec<Line>> {
        self.bodies.insert(name, body)
    }

    pub fn body(&self, name: &str) -> Option<&[Line]> {
        self.bodies.get(name).map(Vec::as_slice)
    }
}
