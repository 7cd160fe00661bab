//! Parser for the Conduit resource definition language
//!
//! Converts a token stream into a [`Program`]. Parsing never stops at the first error: every
//! construct returns a `Result`, failures are recorded, and the parser resynchronizes at the
//! nearest safe point (next member, next block entry, or next `resource`).
//!
//! ## Examples
//!
//! ```rust
//! use conduit_syntax::{lexer, parser};
//!
//! let (tokens, _) = lexer::lex("resource Post { author: User! }");
//! let (program, errors) = parser::parse(&tokens);
//! assert!(errors.is_empty());
//! assert_eq!(program.resources[0].node.relationships.len(), 1);
//! ```

use std::borrow::Cow;

use crate::ast::*;
use crate::diagnostics::{CompileError, errors};
use crate::lexer::{Token, TokenKind};
use conduit_core::lang::annotations::{self, AnnotationId, AnnotationPosition};
use conduit_core::lang::keywords::KeywordId;
use conduit_core::lang::operators::OperatorId;
use conduit_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
