//! Core types shared by the nanojs front end.
//!
//! This crate provides the foundational types used across the tokenizer,
//! lexer and parser: error types and source location tracking.
//!
//! # Overview
//!
//! - [`JsError`] - Front-end errors with an optional source position
//! - [`ErrorKind`] - Types of front-end errors
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{JsError, ErrorKind};
//!
//! let error = JsError {
//!     kind: ErrorKind::SyntaxError,
//!     message: "unrecognized token".to_string(),
//!     source_position: None,
//! };
//!
//! assert_eq!(error.message, "unrecognized token");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, JsError};
pub use source::SourcePosition;
