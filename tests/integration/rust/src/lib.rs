//! Integration test suite for the nanojs front end
//!
//! This crate provides integration tests that verify the tokenizer, lexer,
//! parser and CLI runtime work together correctly across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use js_cli;
    pub use parser;
}
