//! Canonical token vocabulary for the Conduit resource definition language.
//!
//! This crate is intentionally dependency-free. It holds the classification tables that both the
//! lexer and the parser consult (keywords, primitive types, annotations, operators, punctuation),
//! so that spellings are defined in exactly one place.
//!
//! ## Notes
//!
//! - **No IO**, no global mutable state, no syntax tree types.
//! - Every table is a `const` slice, so lookups are safe to share across threads.

pub mod lang;
