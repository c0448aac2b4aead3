use super::Runtime;
use crate::error;
use crate::lang::{Error, Window};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What the interpreter needs from the application around it.
///
/// Every method is a one-way notification. The runtime keeps only a weak
/// reference to its host, so methods take `&self`; a host with state to
/// update uses interior mutability.
pub trait Host {
    /// Appends a line of user-visible output.
    fn print_output(&self, text: &str);

    /// Appends a line to the diagnostic log.
    fn print_debug(&self, text: &str);

    fn clear_output(&self);

    fn clear_debug(&self);

    /// Presents a window. A button's action is run later with
    /// [`Runtime::press`].
    fn open_new_window(&self, window: Window);

    /// Appends to the content of the most recently opened window.
    fn update_secondary_window_content(&self, text: &str);

    /// Loads the script at `path`, resolved against `from`, and runs it to
    /// completion on `runtime` before returning.
    fn run_external_script(&self, path: &str, from: &Path, runtime: &mut Runtime) {
        run_external(self, path, from, runtime)
    }
}

/// The file system behavior behind [`Host::run_external_script`].
///
/// The external script shares variables, functions and budget with its
/// caller. Its own directory becomes the base for paths it uses.
pub fn run_external<H: Host + ?Sized>(host: &H, path: &str, from: &Path, runtime: &mut Runtime) {
    let target = from.join(path);
    match load(&target) {
        Ok(script) => {
            host.print_output(&format!("--- Running external script: {} ---", path));
            let directory = match target.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => from.to_path_buf(),
            };
            runtime.run(&script, &directory);
            host.print_output(&format!("--- End of {} ---", path));
        }
        Err(error) => {
            host.print_output(&format!("Error: could not read {}.", path));
            host.print_output(&format!(
                "Check that the file exists at: {}",
                target.display()
            ));
            host.print_debug(&error.to_string());
        }
    }
}

/// Reads a script file.
pub fn load(path: &Path) -> Result<String, Error> {
    match fs::read_to_string(path) {
        Ok(script) => Ok(script),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            }
        }
    }
}
