//! Shareable metadata for `conduit_core::lang` registries.
//!
//! Every vocabulary module in `conduit_core::lang` is a `const` table of info structs. This submodule
//! provides the small metadata types reused across all of them.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the lexer/parser.

/// Language version (`major`, `minor`) a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use conduit_core::lang::registry::Since;
///
/// assert!(Since(0, 1) < Since(0, 2));
/// assert_eq!(Since(0, 1).to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// A small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use conduit_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "@operations [create, update]",
///     note: Some("Enable the generated create and update operations."),
/// };
/// assert!(ex.code.starts_with('@'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for registry items that need no extra per-item data.
///
/// Registries that carry more (operator precedence, keyword category) define their own info type
/// with the same core fields.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}
