//! Statement parser building the AST from the token stream

use core_types::JsError;

use crate::ast::{AstNode, NodeKind};
use crate::error::{syntax_error, unrecognized_token};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// Parser for nanojs source code.
///
/// Owns the [`Lexer`] (which owns the tokenizer) for the duration of the
/// parse; dropping the parser releases the whole chain. The parser pulls
/// tokens one at a time - nothing buffers the input beyond the source
/// string itself.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    ///
    /// # Errors
    /// Propagates the lexer's construction failure (`InvalidSource` for an
    /// empty source).
    pub fn new(source: &'a str) -> Result<Self, JsError> {
        let lexer = Lexer::new(source)?;
        Ok(Self { lexer })
    }

    /// Parse the token stream into a tree rooted at a `SourceFile` node.
    ///
    /// Scans until end of input. An `Unknown` token or a failed statement
    /// parse terminates the scan and the partial tree built so far is
    /// returned; use [`parse_strict`](Self::parse_strict) to turn those into
    /// errors instead. Number and operator tokens at program level are
    /// skipped without producing nodes.
    pub fn parse(&mut self) -> AstNode {
        let mut program = AstNode::new(NodeKind::SourceFile);

        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Eof | TokenKind::Unknown => break,
                TokenKind::Keyword(Keyword::Let) => match self.parse_statement(token) {
                    Ok(statement) => program.add_child(statement),
                    Err(_) => break,
                },
                _ => {}
            }
        }

        program
    }

    /// Parse the token stream, reporting unrecognized tokens as errors.
    ///
    /// Identical to [`parse`](Self::parse) except that an `Unknown` token
    /// produces a `SyntaxError` naming the offending lexeme and its source
    /// position, and statement parse failures propagate.
    ///
    /// # Errors
    /// Returns a `SyntaxError` for the first unrecognized token or failed
    /// statement.
    pub fn parse_strict(&mut self) -> Result<AstNode, JsError> {
        let mut program = AstNode::new(NodeKind::SourceFile);

        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Unknown => {
                    return Err(unrecognized_token(&token.text, token.position));
                }
                TokenKind::Keyword(Keyword::Let) => {
                    program.add_child(self.parse_statement(token)?);
                }
                _ => {}
            }
        }

        Ok(program)
    }

    /// Parse a single statement from the token that introduced it.
    ///
    /// Only the variable-declaration form is recognized. The declaration's
    /// `= <expr> ;` tail is not consumed into the tree yet.
    fn parse_statement(&mut self, token: Token) -> Result<AstNode, JsError> {
        match token.kind {
            TokenKind::Keyword(Keyword::Let) => Ok(AstNode::new(NodeKind::VariableDeclaration)),
            _ => Err(syntax_error(
                format!("unexpected token '{}' in statement", token.text),
                token.position,
            )),
        }
    }
}

/// Parse source text into a tree rooted at a `SourceFile` node.
///
/// This is the single entry point external drivers call. Construction
/// errors (an empty source) surface here; after construction the lenient
/// scan cannot fail.
///
/// # Errors
/// Returns an `InvalidSource` error when `source` is empty.
///
/// # Examples
///
/// ```
/// let tree = parser::parse("let a = 1;").unwrap();
/// assert_eq!(tree.children.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<AstNode, JsError> {
    let mut parser = Parser::new(source)?;
    Ok(parser.parse())
}
