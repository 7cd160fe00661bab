//! Define the reserved keyword vocabulary for the Conduit language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! aliases, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined.
//! - Primitive type names (`string`, `int`, ...) are *not* keywords; see [`crate::lang::types`].
//! - Some reserved words are also “word operators” (e.g. `and`). If you need operator precedence, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use conduit_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elsif"), Some(KeywordId::Elsif));
//! assert_eq!(keywords::from_str("null"), Some(KeywordId::Nil)); // alias
//! assert_eq!(keywords::as_str(KeywordId::Nil), "nil");
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
///
/// The declaration order matches [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Resource,

    // Control flow / statements
    If,
    Elsif,
    Else,
    Return,
    Let,
    Match,
    When,

    // Word operators
    And,
    Or,
    Not,

    // Literals / receivers
    True,
    False,
    Nil,
    SelfKw,

    // Type constructors
    Array,
    Hash,
    Enum,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Operator,
    Literal,
    TypeConstructor,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and diagnostics.
/// - `aliases` are additional spellings accepted by the lexer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Resource, "resource", &[], KeywordCategory::Declaration),
    info(KeywordId::If, "if", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Elsif, "elsif", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Let, "let", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Match, "match", &[], KeywordCategory::ControlFlow),
    info(KeywordId::When, "when", &[], KeywordCategory::ControlFlow),
    info(KeywordId::And, "and", &[], KeywordCategory::Operator),
    info(KeywordId::Or, "or", &[], KeywordCategory::Operator),
    info(KeywordId::Not, "not", &[], KeywordCategory::Operator),
    info(KeywordId::True, "true", &[], KeywordCategory::Literal),
    info(KeywordId::False, "false", &[], KeywordCategory::Literal),
    info(KeywordId::Nil, "nil", &["null"], KeywordCategory::Literal),
    info(KeywordId::SelfKw, "self", &[], KeywordCategory::Literal),
    info(KeywordId::Array, "array", &[], KeywordCategory::TypeConstructor),
    info(KeywordId::Hash, "hash", &[], KeywordCategory::TypeConstructor),
    info(KeywordId::Enum, "enum", &[], KeywordCategory::TypeConstructor),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**: `Resource` is an identifier, `resource` is a keyword.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_ids() {
        for (idx, k) in KEYWORDS.iter().enumerate() {
            assert_eq!(k.id as usize, idx, "KEYWORDS[{idx}] is out of order ({:?})", k.id);
        }
    }

    #[test]
    fn test_every_keyword_round_trips() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("Resource"), None);
        assert_eq!(from_str("NIL"), None);
        assert_eq!(from_str("null"), Some(KeywordId::Nil));
    }
}
