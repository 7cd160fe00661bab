//! Primitive type vocabulary.
//!
//! Primitive type names are reserved spellings the lexer classifies separately from keywords, so the
//! parser can tell `email: email!` (field named `email` of primitive type `email`) apart from a
//! resource reference such as `author: User!`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Categories are metadata for tooling and downstream type mapping; the parser treats every
//!   primitive the same way.
//!
//! ## Examples
//! ```rust
//! use conduit_core::lang::types::{self, PrimitiveCategory, PrimitiveTypeId};
//!
//! assert_eq!(types::from_str("uuid"), Some(PrimitiveTypeId::Uuid));
//! assert_eq!(types::category(PrimitiveTypeId::Decimal), PrimitiveCategory::Numeric);
//! assert_eq!(types::from_str("User"), None);
//! ```

use super::registry::{LangItemInfo, Since, Stability};

/// Stable identifier for every primitive type name, in [`PRIMITIVE_TYPES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    // Textual
    String,
    Text,
    Markdown,

    // Numeric
    Int,
    BigInt,
    Float,
    Decimal,
    Bool,

    // Temporal
    Timestamp,
    Date,
    Time,

    // Identifiers
    Uuid,
    Ulid,

    // Validated strings
    Email,
    Url,
    Phone,

    // Structured
    Json,
}

/// Broad grouping of primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveCategory {
    Textual,
    Numeric,
    Temporal,
    Identifier,
    ValidatedString,
    Structured,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub item: LangItemInfo<PrimitiveTypeId>,
    pub category: PrimitiveCategory,
}

/// Registry of all primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveTypeId::String, "string", "Short single-line text.", PrimitiveCategory::Textual),
    info(PrimitiveTypeId::Text, "text", "Unbounded text.", PrimitiveCategory::Textual),
    info(PrimitiveTypeId::Markdown, "markdown", "Markdown-formatted text.", PrimitiveCategory::Textual),
    info(PrimitiveTypeId::Int, "int", "64-bit signed integer.", PrimitiveCategory::Numeric),
    info(PrimitiveTypeId::BigInt, "bigint", "Arbitrary-size integer.", PrimitiveCategory::Numeric),
    info(PrimitiveTypeId::Float, "float", "64-bit floating point number.", PrimitiveCategory::Numeric),
    info(PrimitiveTypeId::Decimal, "decimal", "Exact decimal number.", PrimitiveCategory::Numeric),
    info(PrimitiveTypeId::Bool, "bool", "Boolean.", PrimitiveCategory::Numeric),
    info(PrimitiveTypeId::Timestamp, "timestamp", "Date and time with zone.", PrimitiveCategory::Temporal),
    info(PrimitiveTypeId::Date, "date", "Calendar date.", PrimitiveCategory::Temporal),
    info(PrimitiveTypeId::Time, "time", "Time of day.", PrimitiveCategory::Temporal),
    info(PrimitiveTypeId::Uuid, "uuid", "RFC 4122 UUID.", PrimitiveCategory::Identifier),
    info(PrimitiveTypeId::Ulid, "ulid", "Sortable ULID.", PrimitiveCategory::Identifier),
    info(PrimitiveTypeId::Email, "email", "Email address.", PrimitiveCategory::ValidatedString),
    info(PrimitiveTypeId::Url, "url", "Absolute URL.", PrimitiveCategory::ValidatedString),
    info(PrimitiveTypeId::Phone, "phone", "Phone number.", PrimitiveCategory::ValidatedString),
    info(PrimitiveTypeId::Json, "json", "Arbitrary JSON document.", PrimitiveCategory::Structured),
];

/// Return the canonical spelling for a primitive type.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the category for a primitive type.
pub fn category(id: PrimitiveTypeId) -> PrimitiveCategory {
    info_for(id).category
}

/// Return the full metadata entry for a primitive type.
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    &PRIMITIVE_TYPES[id as usize]
}

/// Resolve a primitive type spelling to its identifier.
pub fn from_str(s: &str) -> Option<PrimitiveTypeId> {
    if let Some(t) = PRIMITIVE_TYPES.iter().find(|t| t.item.canonical == s) {
        return Some(t.item.id);
    }
    PRIMITIVE_TYPES
        .iter()
        .find(|t| {
            let aliases: &[&str] = t.item.aliases;
            aliases.contains(&s)
        })
        .map(|t| t.item.id)
}

const fn info(
    id: PrimitiveTypeId,
    canonical: &'static str,
    description: &'static str,
    category: PrimitiveCategory,
) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            since: Since(0, 1),
            stability: Stability::Stable,
            examples: &[],
        },
        category,
    }
}
