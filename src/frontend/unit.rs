//! Single compilation unit: lex, parse, and collect diagnostics in one call.

use miette::NamedSource;

use crate::ast::Program;
use crate::diagnostics::{self, CompileError, RenderConfig};
use crate::lexer::{self, Token};
use crate::parser;

/// Everything the front end produces for one source string.
///
/// The program is always present; `errors` lists lexical errors first, then syntax errors.
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub errors: Vec<CompileError>,
}

/// Lex and parse `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> ParsedUnit {
    let (tokens, mut errors) = lexer::lex(source);
    let (program, parse_errors) = parser::parse(&tokens);
    errors.extend(parse_errors);
    tracing::debug!(
        resources = program.resources.len(),
        errors = errors.len(),
        "parsed compilation unit"
    );
    ParsedUnit {
        tokens,
        program,
        errors,
    }
}

impl ParsedUnit {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render all errors as a graphical report against `source`.
    pub fn render_errors(&self, file_name: &str, source: &str, config: &RenderConfig) -> String {
        diagnostics::render(file_name, source, &self.errors, config)
    }

    /// Return the program, or every diagnostic bundled with the named source.
    ///
    /// ## Errors
    /// Returns [`FrontendError`] if lexing or parsing reported anything.
    pub fn into_result(self, file_name: &str, source: &str) -> Result<Program, FrontendError> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(FrontendError::new(file_name, source, self.errors))
        }
    }
}

/// All diagnostics for a failed compilation unit.
///
/// Displays as the first error (with its location) and a count of the rest; the full list is
/// available as miette related diagnostics, rendered against the attached source.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{summary}")]
#[diagnostic(code(conduit::frontend))]
pub struct FrontendError {
    summary: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[related]
    errors: Vec<CompileError>,
}

impl FrontendError {
    fn new(file_name: &str, source: &str, errors: Vec<CompileError>) -> Self {
        let summary = match errors.first() {
            Some(first) => {
                let located = format!("{}:{}:{}: {}", file_name, first.line(), first.column(), first.message);
                match errors.len() {
                    1 => located,
                    n => format!("{} (+{} more)", located, n - 1),
                }
            }
            None => format!("{}: no errors", file_name),
        };
        Self {
            summary,
            source_code: NamedSource::new(file_name, source.to_string()),
            errors,
        }
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }
}
