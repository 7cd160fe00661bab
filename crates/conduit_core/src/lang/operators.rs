//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators
//! like `and`) along with precedence, associativity, and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`and`, `or`, `not`) are lexed as keywords; their entries here have
//!   [`OperatorInfo::is_keyword_spelling`] set and exist so precedence lives in one table.
//! - `&&`/`and` and `||`/`or` are distinct ids with equal precedence: the parser keeps the spelling
//!   apart only for diagnostics.
//!
//! ## Examples
//! ```rust
//! use conduit_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("??"), Some(OperatorId::QuestionQuestion));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

use super::registry::{Since, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator, in [`OPERATORS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,

    // Logical / null handling
    Bang,
    AndAnd,
    OrOr,
    QuestionQuestion,

    // Word operators
    And,
    Or,
    Not,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter; prefix operators bind tighter than every
///   infix operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Minus, "-", 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Star, "*", 70, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::StarStar, "**", 80, Associativity::Right, Fixity::Infix, false),
    op(OperatorId::Slash, "/", 70, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Percent, "%", 70, Associativity::Left, Fixity::Infix, false),
    // Comparison
    op(OperatorId::EqEq, "==", 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::NotEq, "!=", 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Lt, "<", 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::LtEq, "<=", 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Gt, ">", 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::GtEq, ">=", 50, Associativity::Left, Fixity::Infix, false),
    // Assignment
    op(OperatorId::Eq, "=", 0, Associativity::None, Fixity::Infix, false),
    // Logical / null handling
    op(OperatorId::Bang, "!", 90, Associativity::Right, Fixity::Prefix, false),
    op(OperatorId::AndAnd, "&&", 30, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::OrOr, "||", 20, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::QuestionQuestion, "??", 10, Associativity::Left, Fixity::Infix, false),
    // Word operators
    op(OperatorId::And, "and", 30, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Or, "or", 20, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Not, "not", 90, Associativity::Right, Fixity::Prefix, true),
];

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        is_keyword_spelling,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
