//! Runtime orchestration for the nanojs front end
//!
//! The Runtime struct wires a source string through the pipeline:
//! Tokenizer -> Lexer -> Parser -> AST. It is the only place the CLI touches
//! the parser component.

use crate::error::CliResult;
use parser::{AstNode, Lexer, Parser, TokenKind};

/// Orchestrates parsing for the CLI and REPL
pub struct Runtime {
    /// Whether to report unrecognized tokens as syntax errors
    strict: bool,
    /// Whether to print the token stream before parsing
    print_tokens: bool,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Example
    /// ```
    /// use js_cli::Runtime;
    ///
    /// let runtime = Runtime::new();
    /// ```
    pub fn new() -> Self {
        Self {
            strict: false,
            print_tokens: false,
        }
    }

    /// Enable strict parsing (unrecognized tokens become errors)
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Enable token stream printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Parse a JavaScript file
    ///
    /// # Arguments
    /// * `path` - Path to the file
    ///
    /// # Returns
    /// The syntax tree parsed from the file's contents
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or parsing fails
    pub fn execute_file(&mut self, path: &str) -> CliResult<AstNode> {
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Parse a JavaScript source string
    ///
    /// # Arguments
    /// * `source` - Source text to parse
    ///
    /// # Returns
    /// The syntax tree rooted at a `SourceFile` node
    ///
    /// # Errors
    /// Returns `CliError` if the source is empty or, in strict mode, if it
    /// contains an unrecognized token
    ///
    /// # Example
    /// ```
    /// use js_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new();
    /// let tree = runtime.execute_string("let a = 1;").unwrap();
    /// assert_eq!(tree.children.len(), 1);
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<AstNode> {
        if self.print_tokens {
            self.dump_tokens(source)?;
        }

        let mut parser = Parser::new(source)?;
        let tree = if self.strict {
            parser.parse_strict()?
        } else {
            parser.parse()
        };

        Ok(tree)
    }

    /// Print the classified token stream for a source string
    fn dump_tokens(&self, source: &str) -> CliResult<()> {
        let mut lexer = Lexer::new(source)?;

        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                println!("End of source reached.");
                break;
            }
            println!("Token: Kind = {:?}, Value = '{}'", token.kind, token.text);
        }

        Ok(())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
