//! Raw tokenizer - slices source text into delimiter-separated lexemes
//!
//! This is the lowest layer of the front end. It has no semantic knowledge:
//! it only splits the source into maximal runs of non-delimiter characters.
//! Classification happens one layer up, in the [`Lexer`](crate::Lexer).

use core_types::{JsError, SourcePosition};

use crate::error::invalid_source;

/// A raw, unclassified lexeme produced by the tokenizer.
///
/// The text is an owned copy of a maximal run of non-delimiter characters;
/// `position` points at its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The lexeme text, delimiters stripped
    pub text: String,
    /// Position of the first character of the lexeme
    pub position: SourcePosition,
}

/// Check if a character separates lexemes.
///
/// Delimiters never appear inside a produced lexeme. This set is the
/// grammar's extension point: recognizing `(` or `)` starts here.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | ';')
}

/// Cursor over immutable source text.
///
/// The tokenizer borrows the source for its whole lifetime and advances a
/// character cursor over it. `position` never exceeds the character count
/// and never moves backwards.
pub struct Tokenizer<'a> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given source code.
    ///
    /// # Errors
    /// Returns an `InvalidSource` error when `source` is empty; an empty
    /// source never yields a usable tokenizer.
    pub fn new(source: &'a str) -> Result<Self, JsError> {
        if source.is_empty() {
            return Err(invalid_source("source must not be empty"));
        }

        Ok(Self {
            source,
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        })
    }

    /// The source text this tokenizer was created with.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Position of the next unscanned character.
    pub fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    /// Produce the next lexeme, or `None` once the source is exhausted.
    ///
    /// Skips any leading run of delimiter characters, then scans the maximal
    /// run of non-delimiter characters. Exhaustion is the normal termination
    /// signal, not an error; every call performs at most one forward scan.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        while !self.is_at_end() && is_delimiter(self.peek()) {
            self.advance();
        }

        if self.is_at_end() {
            return None;
        }

        let position = self.current_position();
        let start = self.position;

        while !self.is_at_end() && !is_delimiter(self.peek()) {
            self.advance();
        }

        let text: String = self.chars[start..self.position].iter().collect();
        Some(Lexeme { text, position })
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars[self.position]
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.position];
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }
}
