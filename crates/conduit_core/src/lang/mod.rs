//! Conduit language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, primitive type
//! keywords, `@` annotations, operators, and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `AnnotationId`) and look up spellings and
//! metadata via registry tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   highlighting, documentation).
//!
//! ## Examples
//! ```rust
//! use conduit_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("resource"), Some(KeywordId::Resource));
//! assert_eq!(keywords::as_str(KeywordId::Resource), "resource");
//! ```

pub mod annotations;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
