//! nanojs CLI
//!
//! Entry point for the nanojs front end. Parses CLI arguments and delegates
//! to the Runtime, printing the resulting syntax tree.

use clap::Parser as ClapParser;
use js_cli::{repl, Cli, CliError, Runtime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut runtime = Runtime::new()
        .with_strict(cli.strict)
        .with_print_tokens(cli.print_tokens);

    if let Some(file) = cli.file {
        match runtime.execute_file(&file) {
            Ok(tree) => tree.print_tree(),
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(CliError::Js(e)) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(code) = cli.eval {
        match runtime.execute_string(&code) {
            Ok(tree) => tree.print_tree(),
            Err(CliError::Js(e)) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if cli.repl {
        repl::run_repl(&mut runtime)?;
    } else {
        // Default: show usage
        println!("nanojs v0.1.0");
        println!();
        println!("Usage:");
        println!("  nanojs --file <FILE>     Parse a JavaScript file");
        println!("  nanojs --eval <CODE>     Parse inline JavaScript code");
        println!("  nanojs --repl            Start interactive REPL");
        println!();
        println!("Run 'nanojs --help' for more options.");
    }

    Ok(())
}
