//! Diagnostics and error reporting for Conduit
//!
//! Both the lexer and the parser accumulate [`CompileError`]s instead of stopping at the first
//! problem. Each error carries the offending lexeme and its position; [`render`] turns a list of
//! errors into miette's graphical report with source snippets.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode};

use crate::ast::Span;
use crate::lexer::Token;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    /// Source text of the offending token (empty at end of input).
    pub lexeme: String,
    pub span: Span,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn lexical(message: String, span: Span, lexeme: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message,
            lexeme: lexeme.into(),
            span,
            hints: Vec::new(),
        }
    }

    /// Syntax error located at `token`.
    pub fn syntax(message: String, token: &Token) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message,
            lexeme: token.lexeme.clone(),
            span: token.span,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reported by the lexer (unterminated string, invalid character, bad number).
    Lexical,
    /// Reported by the parser.
    Syntax,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "conduit::lexical",
            ErrorKind::Syntax => "conduit::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(self.kind.to_string()), miette_span(self.span));
        Some(Box::new(std::iter::once(label)))
    }
}

fn miette_span(span: Span) -> miette::SourceSpan {
    (span.start, span.end.saturating_sub(span.start)).into()
}

// ============================================================================
// Rendering
// ============================================================================

/// Character set used for the graphical report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTheme {
    /// Unicode box drawing with ANSI colors.
    Unicode,
    /// ASCII-only art with ANSI colors.
    Ascii,
    /// ASCII-only art, no colors. Stable for snapshot tests and logs.
    Plain,
}

/// Presentation settings for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub theme: RenderTheme,
    /// Lines of source shown around each label.
    pub context_lines: usize,
    /// Wrap width of the report.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: RenderTheme::Unicode,
            context_lines: 1,
            width: 100,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: RenderTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn handler(&self) -> GraphicalReportHandler {
        let theme = match self.theme {
            RenderTheme::Unicode => GraphicalTheme::unicode(),
            RenderTheme::Ascii => GraphicalTheme::ascii(),
            RenderTheme::Plain => GraphicalTheme::none(),
        };
        GraphicalReportHandler::new_themed(theme)
            .with_context_lines(self.context_lines)
            .with_width(self.width)
    }
}

/// A [`CompileError`] paired with the source it points into.
struct SourceDiagnostic<'a> {
    error: &'a CompileError,
    source: &'a NamedSource<String>,
}

impl fmt::Debug for SourceDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDiagnostic").field("error", &self.error).finish()
    }
}

impl fmt::Display for SourceDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error, f)
    }
}

impl std::error::Error for SourceDiagnostic<'_> {}

impl Diagnostic for SourceDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.source as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.error.labels()
    }
}

/// Render every error as a graphical report against `source`, in order.
pub fn render(file_name: &str, source: &str, errors: &[CompileError], config: &RenderConfig) -> String {
    let handler = config.handler();
    let named = NamedSource::new(file_name, source.to_string());
    let mut out = String::new();
    for error in errors {
        let diagnostic = SourceDiagnostic { error, source: &named };
        if handler.render_report(&mut out, &diagnostic).is_err() {
            // Fall back to the one-line form if the snippet cannot be rendered.
            out.push_str(&format!(
                "{}: {} at {}:{}:{}\n",
                error.kind,
                error.message,
                file_name,
                error.line(),
                error.column()
            ));
        }
    }
    out
}

// ============================================================================
// Error catalog: common syntax errors with hints
// ============================================================================

/// Constructors for recurring parser diagnostics, so wording stays consistent.
pub mod errors {
    use super::*;

    pub fn expected(what: &str, found: &Token) -> CompileError {
        CompileError::syntax(format!("Expected {}, found {}", what, found.kind), found)
    }

    pub fn missing_nullability(found: &Token) -> CompileError {
        CompileError::syntax("Type must have nullability marker".to_string(), found)
            .with_hint("Add `!` for a required value or `?` for an optional one")
    }

    pub fn unknown_annotation(name: &str, at: &Token) -> CompileError {
        CompileError::syntax(format!("Unknown annotation '@{}'", name), at)
    }

    pub fn misplaced_annotation(name: &str, context: &str, at: &Token) -> CompileError {
        CompileError::syntax(format!("Annotation '@{}' is not allowed {}", name, context), at)
    }

    pub fn unknown_property(key: &str, block: &str, at: &Token, known: &[&str]) -> CompileError {
        CompileError::syntax(format!("Unknown {} property '{}'", block, key), at)
            .with_hint(format!("Expected one of: {}", known.join(", ")))
    }

    pub fn nesting_too_deep(max: usize, at: &Token) -> CompileError {
        CompileError::syntax(format!("Nesting too deep (max {})", max), at)
            .with_hint("Split the construct into smaller pieces, e.g. a computed field or a scope")
    }

    pub fn unexpected(context: &str, found: &Token) -> CompileError {
        CompileError::syntax(format!("Unexpected {} in {}", found.kind, context), found)
    }
}
