//! CLI argument definitions

use clap::Parser as ClapParser;

/// Command-line arguments for the nanojs front end
#[derive(ClapParser, Debug)]
#[command(
    name = "nanojs",
    version,
    about = "nanojs - a minimal JavaScript front end"
)]
pub struct Cli {
    /// Parse a JavaScript file and print its syntax tree
    #[arg(short, long)]
    pub file: Option<String>,

    /// Parse inline source text and print its syntax tree
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the classified token stream before the tree
    #[arg(long)]
    pub print_tokens: bool,

    /// Report unrecognized tokens as syntax errors instead of stopping silently
    #[arg(long)]
    pub strict: bool,
}
