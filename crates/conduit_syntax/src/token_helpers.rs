//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers reduce repetitive `matches!(...)` at call sites and make it easy to work with
//! ID-based tokens.

use crate::lexer::{Token, TokenKind};
use conduit_core::lang::annotations::{self, AnnotationId, AnnotationPosition};
use conduit_core::lang::keywords::{self, KeywordId};
use conduit_core::lang::operators::OperatorId;
use conduit_core::lang::punctuation::PunctuationId;
use conduit_core::lang::types::{self, PrimitiveTypeId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the annotation id, if this is an annotation token.
    pub fn annotation_id(&self) -> Option<AnnotationId> {
        match self {
            TokenKind::Annotation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given annotation.
    pub fn is_annotation(&self, id: AnnotationId) -> bool {
        matches!(self, TokenKind::Annotation(a) if *a == id)
    }

    /// Return `true` if this is an annotation registered for `position`.
    pub fn is_annotation_in(&self, position: AnnotationPosition) -> bool {
        self.annotation_id().is_some_and(|id| annotations::position(id) == position)
    }

    /// Return the primitive type id, if this is a primitive type token.
    pub fn primitive_type_id(&self) -> Option<PrimitiveTypeId> {
        match self {
            TokenKind::PrimitiveType(id) => Some(*id),
            _ => None,
        }
    }

    /// Spelling usable as a name: identifiers, keywords, and primitive type names.
    ///
    /// Member names, block property keys and hash keys accept all three (`self.email`, `{ match: 1 }`).
    pub fn name_spelling(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            TokenKind::Keyword(id) => Some(keywords::as_str(*id)),
            TokenKind::PrimitiveType(id) => Some(types::as_str(*id)),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.annotation_id()`.
    pub fn annotation_id(&self) -> Option<AnnotationId> {
        self.kind.annotation_id()
    }
}
