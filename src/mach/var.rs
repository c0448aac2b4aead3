use std::collections::HashMap;

/// ## Variable memory
///
/// One table for the whole run. Function calls and button actions see
/// and modify the same variables as the top level.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Option<&str> {
        self.vars.get(var_name).map(String::as_str)
    }

    pub fn store(&mut self, var_name: &str, value: &str) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value.to_string(),
            None => {
                self.vars.insert(var_name.to_string(), value.to_string());
            }
        };
    }

}
