extern crate ansi_term;
extern crate clap;
extern crate linefeed;

mod console;

use ansi_term::Style;
use clap::Parser;
use console::{render, Console};
use jlang::mach::{load, Runtime};
use linefeed::{Interface, ReadResult};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "jlang", version, about = "Runs JLang (.jlsh) scripts")]
struct Args {
    /// Script to run
    script: Option<PathBuf>,

    /// Show the debug log on stderr
    #[arg(short, long)]
    debug: bool,

    /// Stay in the interactive session after the script finishes
    #[arg(short, long)]
    interactive: bool,
}

pub fn main() {
    let args = Args::parse();
    let console = Rc::new(Console::new(args.debug));
    let mut runtime = Runtime::new(&console);
    if let Some(script) = &args.script {
        match load(script) {
            Ok(text) => runtime.run(&text, &directory_of(script)),
            Err(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                std::process::exit(1);
            }
        }
    }
    if args.script.is_none() || args.interactive {
        if let Err(error) = main_loop(&mut runtime, &console) {
            eprintln!("{}", error);
        }
    }
}

fn directory_of(script: &Path) -> PathBuf {
    match script.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn main_loop(runtime: &mut Runtime, console: &Console) -> std::io::Result<()> {
    let interface = Interface::new("jlang")?;
    let directory = std::env::current_dir()?;
    let mut chunk = String::new();
    let mut depth = 0usize;
    interface.set_prompt("> ")?;

    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let trimmed = input.trim();
        if depth == 0 {
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with(':') {
                if !meta(trimmed, runtime, console) {
                    break;
                }
                continue;
            }
        }
        interface.add_history_unique(input.clone());
        // Blocks open on a trailing brace and close on a lone one.
        if trimmed == "}" {
            depth = depth.saturating_sub(1);
        } else if trimmed.ends_with('{') {
            depth += 1;
        }
        chunk.push_str(&input);
        chunk.push('\n');
        if depth == 0 {
            runtime.run(&chunk, &directory);
            chunk.clear();
            interface.set_prompt("> ")?;
        } else {
            interface.set_prompt("... ")?;
        }
    }
    Ok(())
}

/// Handles a `:` command. Returns false when the session should end.
fn meta(command: &str, runtime: &mut Runtime, console: &Console) -> bool {
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some(":quit"), _) => return false,
        (Some(":windows"), _) => {
            let windows = console.windows();
            if windows.is_empty() {
                println!("No windows.");
            }
            for (index, window) in windows.iter().enumerate() {
                render(index + 1, window);
            }
        }
        (Some(":press"), Some(number)) => {
            match number.parse::<usize>().ok().and_then(|n| console.action(n)) {
                Some(action) => runtime.press(&action),
                None => println!("No button on window {}.", number),
            }
        }
        _ => println!(":windows  :press <n>  :quit"),
    }
    true
}
