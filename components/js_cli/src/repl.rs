//! REPL (Read-Parse-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// Each line is parsed as a standalone program and its syntax tree printed.
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for parsing
///
/// # Returns
/// `Ok(())` when the REPL exits normally
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("nanojs v0.1.0");
    println!("Type a statement to see its syntax tree, or 'exit' to quit.");
    println!();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                if trimmed == "exit" || trimmed == ".exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }

                let _ = editor.add_history_entry(&line);

                match runtime.execute_string(&line) {
                    Ok(tree) => tree.print_tree(),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("Press Ctrl-D or type 'exit' to quit");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}
