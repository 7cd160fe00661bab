//! Annotation vocabulary registry.
//!
//! Annotations are `@name` markers. The lexer turns `@` followed by a registered name into a single
//! annotation token; anything else after `@` stays an `@` punctuation token plus an identifier, and
//! the parser reports it as unknown.
//!
//! Each annotation belongs to exactly one [`AnnotationPosition`]: the resource body (block
//! introducers such as `@validate`), a hook header (`@transaction`), or a field (`@unique`).

use crate::lang::registry::{LangItemInfo, Since, Stability};

/// Stable identifier for supported annotations, in [`ANNOTATIONS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    // Resource body blocks
    Before,
    After,
    Validate,
    Constraint,
    Scope,
    Computed,
    Operations,
    Middleware,

    // Hook modifiers
    Transaction,
    Async,

    // Field constraints
    Primary,
    Unique,
    Auto,
    AutoUpdate,
    Default,
    Min,
    Max,
    Pattern,
    Index,
}

/// Where an annotation may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationPosition {
    /// Introduces a block inside a resource body.
    ResourceBlock,
    /// Modifies a hook (`@before create @transaction { ... }`); `@async` also opens an async statement block.
    HookModifier,
    /// Trails a field type (`email: string! @unique`).
    Field,
}

/// Metadata entry for an annotation.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationInfo {
    pub item: LangItemInfo<AnnotationId>,
    pub position: AnnotationPosition,
}

/// Registry of supported annotations.
pub const ANNOTATIONS: &[AnnotationInfo] = &[
    info(AnnotationId::Before, "before", "Run a hook before a lifecycle event.", AnnotationPosition::ResourceBlock),
    info(AnnotationId::After, "after", "Run a hook after a lifecycle event.", AnnotationPosition::ResourceBlock),
    info(AnnotationId::Validate, "validate", "Declare a named validation rule.", AnnotationPosition::ResourceBlock),
    info(
        AnnotationId::Constraint,
        "constraint",
        "Declare a named constraint checked on selected operations.",
        AnnotationPosition::ResourceBlock,
    ),
    info(AnnotationId::Scope, "scope", "Declare a named, parameterised query filter.", AnnotationPosition::ResourceBlock),
    info(AnnotationId::Computed, "computed", "Declare a derived field.", AnnotationPosition::ResourceBlock),
    info(
        AnnotationId::Operations,
        "operations",
        "List the operations generated for the resource.",
        AnnotationPosition::ResourceBlock,
    ),
    info(
        AnnotationId::Middleware,
        "middleware",
        "List the middleware applied to the resource.",
        AnnotationPosition::ResourceBlock,
    ),
    info(
        AnnotationId::Transaction,
        "transaction",
        "Run the hook inside a database transaction.",
        AnnotationPosition::HookModifier,
    ),
    info(
        AnnotationId::Async,
        "async",
        "Run the hook (or a statement block) asynchronously.",
        AnnotationPosition::HookModifier,
    ),
    info(AnnotationId::Primary, "primary", "Mark the primary key field.", AnnotationPosition::Field),
    info(AnnotationId::Unique, "unique", "Require unique values.", AnnotationPosition::Field),
    info(AnnotationId::Auto, "auto", "Generate the value on insert.", AnnotationPosition::Field),
    info(AnnotationId::AutoUpdate, "auto_update", "Regenerate the value on every update.", AnnotationPosition::Field),
    info(AnnotationId::Default, "default", "Provide a default value.", AnnotationPosition::Field),
    info(AnnotationId::Min, "min", "Lower bound (value or length).", AnnotationPosition::Field),
    info(AnnotationId::Max, "max", "Upper bound (value or length).", AnnotationPosition::Field),
    info(AnnotationId::Pattern, "pattern", "Require values to match a regular expression.", AnnotationPosition::Field),
    info(AnnotationId::Index, "index", "Create a database index on the field.", AnnotationPosition::Field),
];

/// Resolve an annotation name (without the `@`) to its stable id.
pub fn from_str(name: &str) -> Option<AnnotationId> {
    if let Some(info) = ANNOTATIONS.iter().find(|a| a.item.canonical == name) {
        return Some(info.item.id);
    }
    ANNOTATIONS
        .iter()
        .find(|a| {
            let aliases: &[&str] = a.item.aliases;
            aliases.contains(&name)
        })
        .map(|a| a.item.id)
}

/// Return the canonical spelling for an annotation (without the `@`).
pub fn as_str(id: AnnotationId) -> &'static str {
    info_for(id).item.canonical
}

/// Return where an annotation may appear.
pub fn position(id: AnnotationId) -> AnnotationPosition {
    info_for(id).position
}

/// Return the metadata entry for an annotation.
pub fn info_for(id: AnnotationId) -> &'static AnnotationInfo {
    &ANNOTATIONS[id as usize]
}

const fn info(
    id: AnnotationId,
    canonical: &'static str,
    description: &'static str,
    position: AnnotationPosition,
) -> AnnotationInfo {
    AnnotationInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            since: Since(0, 1),
            stability: Stability::Stable,
            examples: &[],
        },
        position,
    }
}
