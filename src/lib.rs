#![forbid(unsafe_code)]
//! Conduit resource definition language front end
//!
//! Conduit describes backend resources (fields, relationships, lifecycle hooks, validations)
//! in a small declarative language. This crate bundles the front end: lexer, parser, AST, and
//! diagnostics, plus a one-call entrypoint in [`frontend`].
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Lexing and
//!   parsing never panic on malformed input; they return a best-effort tree and every error.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! let unit = conduit::parse_source("resource Post { title: string! author: User! }");
//! assert!(!unit.has_errors());
//! let post = &unit.program.resources[0].node;
//! assert_eq!(post.fields.len(), 1);
//! assert_eq!(post.relationships.len(), 1);
//! ```

pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use conduit_core::lang;

pub use frontend::{FrontendError, ParsedUnit, parse_source};
