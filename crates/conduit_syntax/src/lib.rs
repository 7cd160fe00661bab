//! Syntax frontend for the Conduit resource definition language: lexer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names, check types, or validate that
//!   referenced resources exist.
//! - Vocabulary identity (keywords, primitive types, annotations, operators, punctuation) comes from
//!   `conduit_core::lang` registries.
//! - Neither phase stops at the first problem. [`lexer::lex`] and [`parser::parse`] always return
//!   their output together with every diagnostic collected on the way.
//!
//! ## Examples
//! ```rust
//! use conduit_syntax::{lexer, parser};
//!
//! let (tokens, lex_errors) = lexer::lex("resource User { name: string! }");
//! let (program, parse_errors) = parser::parse(&tokens);
//! assert!(lex_errors.is_empty() && parse_errors.is_empty());
//! assert_eq!(program.resources[0].node.fields.len(), 1);
//! ```
//!
//! ## See also
//! - `conduit_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
