//! Token types for the Conduit lexer

use std::fmt;

use crate::ast::{Literal, Span};
use conduit_core::lang::annotations::{self, AnnotationId};
use conduit_core::lang::keywords::{self, KeywordId};
use conduit_core::lang::operators::{self, OperatorId};
use conduit_core::lang::punctuation::{self, PunctuationId};
use conduit_core::lang::types::{self, PrimitiveTypeId};

/// Token kinds for Conduit.
///
/// Vocabulary tokens carry a registry id from `conduit_core::lang`; data tokens carry their decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(KeywordId),
    /// Primitive type name (`string`, `uuid`, ...). Also valid as a field or member name.
    PrimitiveType(PrimitiveTypeId),
    /// `@name` where `name` is a registered annotation.
    Annotation(AnnotationId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    Ident(String),
    Int(i64),
    Float(f64),
    /// Decoded string contents (escapes applied, quotes removed).
    String(String),

    /// Placeholder for a lexical error; the matching diagnostic is in the error list.
    Error(String),
    Eof,
}

/// A token with its raw source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source slice the token was scanned from.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-indexed line of the first character.
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// 1-indexed column (in characters) of the first character.
    pub fn column(&self) -> usize {
        self.span.column
    }

    /// Decoded literal value for literal tokens and the `true`/`false`/`nil` keywords.
    pub fn literal(&self) -> Option<Literal> {
        match &self.kind {
            TokenKind::Int(i) => Some(Literal::Int(*i)),
            TokenKind::Float(f) => Some(Literal::Float(*f)),
            TokenKind::String(s) => Some(Literal::String(s.clone())),
            TokenKind::Keyword(KeywordId::True) => Some(Literal::Bool(true)),
            TokenKind::Keyword(KeywordId::False) => Some(Literal::Bool(false)),
            TokenKind::Keyword(KeywordId::Nil) => Some(Literal::Nil),
            _ => None,
        }
    }
}

/// Short description used in "expected X, found Y" diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword '{}'", keywords::as_str(*id)),
            TokenKind::PrimitiveType(id) => write!(f, "type '{}'", types::as_str(*id)),
            TokenKind::Annotation(id) => write!(f, "annotation '@{}'", annotations::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::Int(i) => write!(f, "integer {}", i),
            TokenKind::Float(x) => write!(f, "float {}", x),
            TokenKind::String(_) => write!(f, "string literal"),
            TokenKind::Error(_) => write!(f, "invalid token"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Resolve an identifier spelling to a keyword id.
pub fn keyword_id(spelling: &str) -> Option<KeywordId> {
    keywords::from_str(spelling)
}

/// Resolve an identifier spelling to a primitive type id.
pub fn primitive_type_id(spelling: &str) -> Option<PrimitiveTypeId> {
    types::from_str(spelling)
}
