//! Conduit Compiler Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: error reporting and rendering
//! - `unit`: one-call lex + parse of a single compilation unit

// Syntax components are provided by the shared conduit_syntax crate.
pub use conduit_syntax::{ast, diagnostics, lexer, parser};

mod unit;

pub use unit::{FrontendError, ParsedUnit, parse_source};
