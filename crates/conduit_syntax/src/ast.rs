//! Abstract Syntax Tree definitions for Conduit
//!
//! A Conduit source file is a sequence of `resource` blocks. Every node owns its children and is
//! wrapped in [`Spanned`] so diagnostics can point back at the source.

use std::fmt;

use conduit_core::lang::annotations::{self, AnnotationId};
use conduit_core::lang::types::{self, PrimitiveTypeId};

/// Source location span: byte offsets `[start, end)` plus the 1-indexed line/column of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Cover both spans. Line/column come from whichever span starts first.
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling as written in the source.
pub type Ident = String;

/// A program is a sequence of resource declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub resources: Vec<Spanned<Resource>>,
}

// ============================================================================
// Resources
// ============================================================================

/// A `resource Name { ... }` declaration.
///
/// Members are grouped by kind; within each list, declaration order is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    pub name: Ident,
    /// String literal written directly before `resource`.
    pub documentation: Option<String>,
    pub fields: Vec<Spanned<Field>>,
    pub relationships: Vec<Spanned<Relationship>>,
    pub hooks: Vec<Spanned<Hook>>,
    pub validations: Vec<Spanned<Validation>>,
    pub constraints: Vec<Spanned<Constraint>>,
    pub scopes: Vec<Spanned<Scope>>,
    pub computed: Vec<Spanned<Computed>>,
    pub operations: Vec<Spanned<Ident>>,
    pub middleware: Vec<Spanned<Ident>>,
}

/// `name: type @constraint(args)...`
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Ident,
    pub ty: Spanned<Type>,
    /// Mirrors `ty.node.nullable`.
    pub nullable: bool,
    pub constraints: Vec<Spanned<FieldConstraint>>,
}

/// A trailing field annotation such as `@unique` or `@min(3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    /// Canonical annotation spelling (no `@`).
    pub name: Ident,
    pub args: Vec<Spanned<Expr>>,
}

impl FieldConstraint {
    /// Registry id for the annotation, if it is a known field annotation.
    pub fn annotation_id(&self) -> Option<AnnotationId> {
        annotations::from_str(&self.name)
    }
}

// ============================================================================
// Types
// ============================================================================

/// A type with its explicit nullability verdict (`!` = required, `?` = optional).
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Primitive(PrimitiveTypeId),
    Array(Box<Spanned<Type>>),
    Hash(Box<Spanned<Type>>, Box<Spanned<Type>>),
    /// `enum["draft", "published"]`
    Enum(Vec<String>),
    /// Reference to another resource by name.
    Resource(Ident),
}

impl Type {
    /// Name of the referenced resource, for `User!` and `array<User!>!`.
    pub fn resource_target(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Resource(name) => Some(name),
            TypeKind::Array(inner) => match &inner.node.kind {
                TypeKind::Resource(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_) | TypeKind::Hash(..))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Primitive(id) => write!(f, "{}", types::as_str(*id))?,
            TypeKind::Array(inner) => write!(f, "array<{}>", inner.node)?,
            TypeKind::Hash(key, value) => write!(f, "hash<{}, {}>", key.node, value.node)?,
            TypeKind::Enum(values) => {
                write!(f, "enum[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", escape(v))?;
                }
                write!(f, "]")?;
            }
            TypeKind::Resource(name) => write!(f, "{}", name)?,
        }
        write!(f, "{}", if self.nullable { "?" } else { "!" })
    }
}

// ============================================================================
// Relationships
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    BelongsTo,
    HasMany,
    HasManyThrough,
}

/// Action taken on dependent rows when the referenced row is deleted or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}

impl ReferentialAction {
    /// Parse the spelling used in relationship bodies (`cascade`, `set_null`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cascade" => Some(Self::Cascade),
            "restrict" => Some(Self::Restrict),
            "set_null" | "nullify" => Some(Self::SetNull),
            "set_default" => Some(Self::SetDefault),
            "no_action" => Some(Self::NoAction),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cascade => "cascade",
            Self::Restrict => "restrict",
            Self::SetNull => "set_null",
            Self::SetDefault => "set_default",
            Self::NoAction => "no_action",
        }
    }
}

/// A field whose type references another resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub name: Ident,
    pub target: Ident,
    pub kind: RelationshipKind,
    pub ty: Spanned<Type>,
    pub nullable: bool,
    pub foreign_key: Option<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
    pub through: Option<String>,
    pub constraints: Vec<Spanned<FieldConstraint>>,
}

// ============================================================================
// Resource blocks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTiming {
    Before,
    After,
}

/// `@before create @transaction { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub timing: HookTiming,
    pub event: Ident,
    pub is_transaction: bool,
    pub is_async: bool,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub name: Ident,
    pub condition: Spanned<Expr>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: Ident,
    /// Operations the constraint applies to (`on: [create, update]`).
    pub on: Vec<Ident>,
    pub when: Option<Spanned<Expr>>,
    pub condition: Spanned<Expr>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub name: Ident,
    pub params: Vec<Spanned<ScopeParam>>,
    pub condition: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScopeParam {
    pub name: Ident,
    pub ty: Option<Spanned<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub name: Ident,
    pub ty: Spanned<Type>,
    pub body: Spanned<Expr>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `if cond { ... } elsif cond { ... } else { ... }`
    If(IfStmt),
    /// `return expr?`
    Return(Option<Spanned<Expr>>),
    /// `let name: type = value`
    Let(LetStmt),
    /// `match subject { when pattern { ... } }`
    Match(MatchStmt),
    /// `target = value`; the target shape is not validated here.
    Assignment(AssignmentStmt),
    /// Expression statement
    Expr(Spanned<Expr>),
    /// `@async { ... }`
    Async(Vec<Spanned<Statement>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_body: Vec<Spanned<Statement>>,
    pub elsif_branches: Vec<ElsifBranch>,
    pub else_body: Option<Vec<Spanned<Statement>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElsifBranch {
    pub condition: Spanned<Expr>,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: Ident,
    pub ty: Option<Spanned<Type>>,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub subject: Spanned<Expr>,
    pub arms: Vec<Spanned<MatchArm>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Spanned<Expr>,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Spanned<Expr>,
    pub value: Spanned<Expr>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// `self`
    SelfExpr,
    Ident(Ident),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Logical(Box<Spanned<Expr>>, LogicalOp, Box<Spanned<Expr>>),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// `lhs ?? rhs`
    NullCoalesce(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// `f(args)`, or `ns.f(args)` when the receiver is a bare identifier.
    Call {
        namespace: Option<Ident>,
        callee: Box<Spanned<Expr>>,
        args: Vec<Spanned<Expr>>,
    },
    /// `obj.field`
    FieldAccess(Box<Spanned<Expr>>, Ident),
    /// `obj?.field`
    SafeNavigation(Box<Spanned<Expr>>, Ident),
    /// `obj[index]`
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    Array(Vec<Spanned<Expr>>),
    Hash(Vec<(HashKey, Spanned<Expr>)>),
    /// `(expr)`
    Paren(Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Nil,
}

/// Key of a hash literal entry.
#[derive(Debug, Clone, PartialEq)]
pub enum HashKey {
    /// `{ name: value }`
    Name(Ident),
    /// `{ "name": value }` or any other computed key
    Expr(Spanned<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Short-circuiting operators. The symbol and word spellings are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `!` or `not`
    Not,
    Neg,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
            BinaryOp::Mod => write!(f, "%"),
            BinaryOp::Pow => write!(f, "**"),
            BinaryOp::Eq => write!(f, "=="),
            BinaryOp::NotEq => write!(f, "!="),
            BinaryOp::Lt => write!(f, "<"),
            BinaryOp::LtEq => write!(f, "<="),
            BinaryOp::Gt => write!(f, ">"),
            BinaryOp::GtEq => write!(f, ">="),
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "&&"),
            LogicalOp::Or => write!(f, "||"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::String(s) => write!(f, "\"{}\"", escape(s)),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

/// Source-like rendering with every operator application parenthesised, so grouping is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::SelfExpr => write!(f, "self"),
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Binary(l, op, r) => write!(f, "({} {} {})", l.node, op, r.node),
            Expr::Logical(l, op, r) => write!(f, "({} {} {})", l.node, op, r.node),
            Expr::Unary(op, e) => write!(f, "({}{})", op, e.node),
            Expr::NullCoalesce(l, r) => write!(f, "({} ?? {})", l.node, r.node),
            Expr::Call {
                namespace,
                callee,
                args,
            } => {
                if let Some(ns) = namespace {
                    write!(f, "{}.", ns)?;
                }
                write!(f, "{}(", callee.node)?;
                write_list(f, args.iter().map(|a| &a.node))?;
                write!(f, ")")
            }
            Expr::FieldAccess(obj, name) => write!(f, "{}.{}", obj.node, name),
            Expr::SafeNavigation(obj, name) => write!(f, "{}?.{}", obj.node, name),
            Expr::Index(obj, idx) => write!(f, "{}[{}]", obj.node, idx.node),
            Expr::Array(items) => {
                write!(f, "[")?;
                write_list(f, items.iter().map(|a| &a.node))?;
                write!(f, "]")
            }
            Expr::Hash(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match key {
                        HashKey::Name(name) => write!(f, "{}: {}", name, value.node)?,
                        HashKey::Expr(e) => write!(f, "{}: {}", e.node, value.node)?,
                    }
                }
                write!(f, "}}")
            }
            Expr::Paren(inner) => write!(f, "({})", inner.node),
        }
    }
}

fn write_list<'a>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'a Expr>) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Re-escape a decoded string so it lexes back to the same value.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Visitor trait for AST traversal
// ============================================================================

/// Read-only traversal. Default methods walk into children; override a method and call the
/// matching `walk_*` function to keep descending.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        for resource in &program.resources {
            self.visit_resource(resource);
        }
    }

    fn visit_resource(&mut self, resource: &Spanned<Resource>) {
        walk_resource(self, resource);
    }

    fn visit_field(&mut self, field: &Spanned<Field>) {
        self.visit_type(&field.node.ty);
        field.node.constraints.iter().for_each(|c| self.visit_field_constraint(c));
    }

    fn visit_relationship(&mut self, rel: &Spanned<Relationship>) {
        self.visit_type(&rel.node.ty);
        rel.node.constraints.iter().for_each(|c| self.visit_field_constraint(c));
    }

    fn visit_field_constraint(&mut self, constraint: &Spanned<FieldConstraint>) {
        constraint.node.args.iter().for_each(|arg| self.visit_expr(arg));
    }

    fn visit_hook(&mut self, hook: &Spanned<Hook>) {
        for stmt in &hook.node.body {
            self.visit_statement(stmt);
        }
    }

    fn visit_validation(&mut self, validation: &Spanned<Validation>) {
        self.visit_expr(&validation.node.condition);
    }

    fn visit_constraint(&mut self, constraint: &Spanned<Constraint>) {
        if let Some(when) = &constraint.node.when {
            self.visit_expr(when);
        }
        self.visit_expr(&constraint.node.condition);
    }

    fn visit_scope(&mut self, scope: &Spanned<Scope>) {
        for param in &scope.node.params {
            if let Some(ty) = &param.node.ty {
                self.visit_type(ty);
            }
        }
        self.visit_expr(&scope.node.condition);
    }

    fn visit_computed(&mut self, computed: &Spanned<Computed>) {
        self.visit_type(&computed.node.ty);
        self.visit_expr(&computed.node.body);
    }

    fn visit_statement(&mut self, stmt: &Spanned<Statement>) {
        walk_statement(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Spanned<Expr>) {
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &Spanned<Type>) {
        walk_type(self, ty);
    }
}

pub fn walk_resource<V: Visitor + ?Sized>(v: &mut V, resource: &Spanned<Resource>) {
    let r = &resource.node;
    r.fields.iter().for_each(|x| v.visit_field(x));
    r.relationships.iter().for_each(|x| v.visit_relationship(x));
    r.hooks.iter().for_each(|x| v.visit_hook(x));
    r.validations.iter().for_each(|x| v.visit_validation(x));
    r.constraints.iter().for_each(|x| v.visit_constraint(x));
    r.scopes.iter().for_each(|x| v.visit_scope(x));
    r.computed.iter().for_each(|x| v.visit_computed(x));
}

/// Visit the element, key and value types of a collection type.
pub fn walk_type<V: Visitor + ?Sized>(v: &mut V, ty: &Spanned<Type>) {
    match &ty.node.kind {
        TypeKind::Array(element) => v.visit_type(element),
        TypeKind::Hash(key, value) => {
            v.visit_type(key);
            v.visit_type(value);
        }
        TypeKind::Primitive(_) | TypeKind::Resource(_) | TypeKind::Enum(_) => {}
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(v: &mut V, stmt: &Spanned<Statement>) {
    match &stmt.node {
        Statement::If(s) => {
            v.visit_expr(&s.condition);
            s.then_body.iter().for_each(|x| v.visit_statement(x));
            for branch in &s.elsif_branches {
                v.visit_expr(&branch.condition);
                branch.body.iter().for_each(|x| v.visit_statement(x));
            }
            if let Some(body) = &s.else_body {
                body.iter().for_each(|x| v.visit_statement(x));
            }
        }
        Statement::Return(value) => {
            if let Some(value) = value {
                v.visit_expr(value);
            }
        }
        Statement::Let(s) => {
            if let Some(ty) = &s.ty {
                v.visit_type(ty);
            }
            v.visit_expr(&s.value);
        }
        Statement::Match(s) => {
            v.visit_expr(&s.subject);
            for arm in &s.arms {
                v.visit_expr(&arm.node.pattern);
                arm.node.body.iter().for_each(|x| v.visit_statement(x));
            }
        }
        Statement::Assignment(s) => {
            v.visit_expr(&s.target);
            v.visit_expr(&s.value);
        }
        Statement::Expr(e) => v.visit_expr(e),
        Statement::Async(body) => body.iter().for_each(|x| v.visit_statement(x)),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Spanned<Expr>) {
    match &expr.node {
        Expr::Literal(_) | Expr::SelfExpr | Expr::Ident(_) => {}
        Expr::Binary(l, _, r) | Expr::Logical(l, _, r) | Expr::NullCoalesce(l, r) | Expr::Index(l, r) => {
            v.visit_expr(l);
            v.visit_expr(r);
        }
        Expr::Unary(_, e) | Expr::FieldAccess(e, _) | Expr::SafeNavigation(e, _) | Expr::Paren(e) => v.visit_expr(e),
        Expr::Call { callee, args, .. } => {
            v.visit_expr(callee);
            args.iter().for_each(|x| v.visit_expr(x));
        }
        Expr::Array(items) => items.iter().for_each(|x| v.visit_expr(x)),
        Expr::Hash(entries) => {
            for (key, value) in entries {
                if let HashKey::Expr(k) = key {
                    v.visit_expr(k);
                }
                v.visit_expr(value);
            }
        }
    }
}
