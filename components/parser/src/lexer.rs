//! Lexer - classifies raw lexemes into typed tokens

use core_types::{JsError, SourcePosition};

use crate::tokenizer::Tokenizer;

/// Maximum number of characters kept in a token's text.
///
/// Lexemes longer than this are truncated; the remainder is silently
/// discarded, so round-trip fidelity is not guaranteed for pathologically
/// long input.
pub const MAX_TOKEN_LENGTH: usize = 256;

/// Keyword types recognized by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// let keyword
    Let,
}

/// Punctuators (operators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    /// Plus
    Plus,
    /// Assignment
    Assign,
}

/// The semantic kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal (first character is a decimal digit)
    Number,
    /// Keyword
    Keyword(Keyword),
    /// Punctuator/operator
    Punctuator(Punctuator),
    /// End of input
    Eof,
    /// Unrecognized lexeme
    Unknown,
}

/// Token produced by the lexer.
///
/// `text` preserves the lexeme verbatim up to [`MAX_TOKEN_LENGTH`]
/// characters. `Eof` tokens carry empty text and no position; `Unknown`
/// tokens keep their text so the parser can name the offending lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The semantic kind of the token
    pub kind: TokenKind,
    /// The lexeme text the token was classified from
    pub text: String,
    /// Position of the first character of the lexeme
    pub position: Option<SourcePosition>,
}

impl Token {
    fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            position: None,
        }
    }
}

/// Classify a lexeme into a token kind.
///
/// Rules are evaluated in order, first match wins. Classification is
/// shallow: it looks at the first character (or the exact text for
/// keywords) and never validates the remainder, so `12x` and `1et` both
/// classify as `Number`.
fn classify(text: &str) -> TokenKind {
    let first = match text.chars().next() {
        Some(c) => c,
        None => return TokenKind::Unknown,
    };

    if first.is_ascii_digit() {
        return TokenKind::Number;
    }
    if text == "let" {
        return TokenKind::Keyword(Keyword::Let);
    }
    if first == '+' {
        return TokenKind::Punctuator(Punctuator::Plus);
    }
    if first == '=' {
        return TokenKind::Punctuator(Punctuator::Assign);
    }

    TokenKind::Unknown
}

/// Lexer for nanojs source code.
///
/// Owns the underlying [`Tokenizer`] and turns its raw lexemes into typed
/// tokens. Once constructed, the lexer never fails: exhaustion is reported
/// as an `Eof` token and unrecognized input as an `Unknown` token, leaving
/// all syntactic judgment to the parser.
pub struct Lexer<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    ///
    /// # Errors
    /// Propagates the tokenizer's construction failure (`InvalidSource` for
    /// an empty source).
    pub fn new(source: &'a str) -> Result<Self, JsError> {
        let tokenizer = Tokenizer::new(source)?;
        Ok(Self { tokenizer })
    }

    /// Get the next token from the source.
    ///
    /// Returns an `Eof` token when the source is exhausted - callers detect
    /// the end of the stream by checking `kind`, there is no separate
    /// "has more" signal.
    pub fn next_token(&mut self) -> Token {
        let lexeme = match self.tokenizer.next_lexeme() {
            Some(lexeme) => lexeme,
            None => return Token::eof(),
        };

        let kind = classify(&lexeme.text);
        let text = if lexeme.text.chars().count() > MAX_TOKEN_LENGTH {
            lexeme.text.chars().take(MAX_TOKEN_LENGTH).collect()
        } else {
            lexeme.text
        };

        Token {
            kind,
            text,
            position: Some(lexeme.position),
        }
    }
}
