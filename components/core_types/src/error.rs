//! Front-end error types.
//!
//! This module provides the error type shared by the tokenizer, lexer and
//! parser. Construction failures and syntax errors are both reported through
//! [`JsError`]; end-of-input is never an error (it is a token kind).

use std::fmt;

use crate::SourcePosition;

/// The kind of front-end error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Syntax error in the scanned source
    SyntaxError,
    /// The source text is empty or otherwise unusable
    InvalidSource,
    /// Internal front-end error
    InternalError,
}

/// A front-end error with message and optional source position.
///
/// # Examples
///
/// ```
/// use core_types::{JsError, ErrorKind};
///
/// let error = JsError {
///     kind: ErrorKind::InvalidSource,
///     message: "source must not be empty".to_string(),
///     source_position: None,
/// };
///
/// assert!(matches!(error.kind, ErrorKind::InvalidSource));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub source_position: Option<SourcePosition>,
}

impl fmt::Display for JsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::InvalidSource => "InvalidSource",
            ErrorKind::InternalError => "InternalError",
        };
        match &self.source_position {
            Some(pos) => write!(
                f,
                "{}: {} (line {}, column {})",
                kind, self.message, pos.line, pos.column
            ),
            None => write!(f, "{}: {}", kind, self.message),
        }
    }
}

impl std::error::Error for JsError {}
