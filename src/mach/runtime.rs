use super::{Budget, Function, Host, Stack, Var};
use crate::error;
use crate::lang::ast::{Printable, Statement};
use crate::lang::{lex, parse, structure, Action, Block, Error, Line, Window};
use std::path::Path;
use std::rc::{Rc, Weak};

type Result<T> = std::result::Result<T, Error>;

/// How deep function calls and external scripts may nest.
pub const MAX_DEPTH: usize = 64;

/// ## Interpreter
///
/// Owns the variable table, the function table and the memory budget for
/// one host. Nothing here is shared between runtimes; scripts that must
/// not see each other's state need separate instances.
pub struct Runtime {
    host: Weak<dyn Host>,
    functions: Function,
    vars: Var,
    budget: Option<Budget>,
    frames: Stack<String>,
}

impl Runtime {
    pub fn new<H: Host + 'static>(host: &Rc<H>) -> Runtime {
        let host: Weak<H> = Rc::downgrade(host);
        Runtime {
            host,
            functions: Function::new(),
            vars: Var::new(),
            budget: None,
            frames: Stack::new("MAXIMUM NESTING IS 64", MAX_DEPTH),
        }
    }

    /// Parses and executes a script.
    ///
    /// Functions are registered and windows opened during the structural
    /// pass, so every window in the script exists before the first
    /// top-level statement runs. Relative paths resolve against `directory`.
    pub fn run(&mut self, script: &str, directory: &Path) {
        let outline = structure(&lex(script));
        for block in outline.blocks {
            match block {
                Block::Function(name, body) => {
                    self.functions.define(name, body);
                }
                Block::Window(body) => {
                    let window = Window::hydrate(&body, directory);
                    self.with_host(|host| host.open_new_window(window));
                }
                Block::Error(error) => self.report(&error),
            }
        }
        self.debug("--- Running main script ---");
        self.execute(&outline.statements, &[], directory);
    }

    /// Runs a button action, as a host does when the button is pressed.
    pub fn press(&mut self, action: &Action) {
        let line = Line::direct(&action.statement);
        self.execute(&[line], &[], &action.directory);
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.vars.fetch(name)
    }

    pub fn function(&self, name: &str) -> Option<&[Line]> {
        self.functions.body(name)
    }

    /// `None` until a script sets one with `MAX_MEM`.
    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }

    fn with_host<F: FnOnce(&dyn Host)>(&self, f: F) {
        if let Some(host) = self.host.upgrade() {
            f(&*host);
        }
    }

    fn output(&self, text: &str) {
        self.with_host(|host| host.print_output(text));
    }

    fn debug(&self, text: &str) {
        self.with_host(|host| host.print_debug(text));
    }

    fn report(&self, error: &Error) {
        self.debug(&error.to_string());
    }

    fn execute(&mut self, lines: &[Line], args: &[String], directory: &Path) {
        for line in lines {
            self.debug(&format!("> EXECUTING: {}", line));
            let result = parse(line).and_then(|statement| self.statement(statement, args, directory));
            if let Err(error) = result {
                self.report(&error.in_line_number(line.number()));
            }
        }
    }

    fn statement(&mut self, statement: Statement, args: &[String], directory: &Path) -> Result<()> {
        match statement {
            Statement::Print(printable) => self.print(printable, args),
            Statement::Define(name, value) => self.define(&name, &value),
            Statement::MaxMem(bytes) => {
                self.budget = Some(Budget::new(bytes));
                self.debug(&format!("Memory budget set to {} bytes.", bytes));
                Ok(())
            }
            Statement::ClearOutput => {
                self.with_host(|host| host.clear_output());
                Ok(())
            }
            Statement::ClearDebug => {
                self.with_host(|host| host.clear_debug());
                Ok(())
            }
            Statement::External(path) => self.external(&path, directory),
            Statement::UpdateWindow(text) => {
                self.with_host(|host| host.update_secondary_window_content(&text));
                Ok(())
            }
            Statement::Call(name, call_args) => self.call(&name, &call_args, directory),
            Statement::Rem | Statement::Nop => Ok(()),
        }
    }

    fn print(&self, printable: Printable, args: &[String]) -> Result<()> {
        let text = match &printable {
            Printable::Empty => "",
            Printable::Literal(s) => s.as_str(),
            Printable::Argument => match args.first() {
                Some(arg) => arg.as_str(),
                None => return Err(error!(UnsupportedArgument; "NO ARGUMENT TO PRINT")),
            },
            Printable::Var(name) => match self.vars.fetch(name) {
                Some(value) => value,
                None => return Err(error!(UndefinedVariable; printable.to_string())),
            },
        };
        self.output(text);
        Ok(())
    }

    fn define(&mut self, name: &str, value: &str) -> Result<()> {
        let size = Budget::size_of(value);
        let granted = match &mut self.budget {
            Some(budget) => budget.allocate(size),
            None => true,
        };
        if !granted {
            return Err(error!(OutOfBudget; format!("CREATING VARIABLE '{}'", name)));
        }
        self.vars.store(name, value);
        self.debug(&format!("Variable '{}' defined with value '{}'.", name, value));
        Ok(())
    }

    fn call(&mut self, name: &str, args: &[String], directory: &Path) -> Result<()> {
        let body = self.functions.body(name).map(<[Line]>::to_vec).unwrap_or_default();
        self.frames.push(name.to_string())?;
        self.execute(&body, args, directory);
        self.frames.pop()?;
        Ok(())
    }

    fn external(&mut self, path: &str, directory: &Path) -> Result<()> {
        let host = match self.host.upgrade() {
            Some(host) => host,
            None => return Ok(()),
        };
        self.frames.push(path.to_string())?;
        host.run_external_script(path, directory, self);
        self.frames.pop()?;
        Ok(())
    }
}
