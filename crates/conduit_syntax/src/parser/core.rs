/// A resource member after classification: plain field or relationship.
enum Member {
    Field(Spanned<Field>),
    Relationship(Spanned<Relationship>),
}

/// Keys found in a relationship body (`{ foreign_key: "author_id", on_delete: cascade }`).
#[derive(Default)]
struct RelationshipOptions {
    foreign_key: Option<String>,
    on_delete: Option<ReferentialAction>,
    on_update: Option<ReferentialAction>,
    through: Option<String>,
}

/// Deepest nesting of expressions, types and blocks the parser descends into.
///
/// Each level costs several stack frames, so the limit keeps pathological input from exhausting
/// the stack of a default-sized thread.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parser state.
///
/// ## Notes
/// - Lexical error tokens are dropped on construction; their diagnostics already live in the
///   lexer's error list.
/// - `eof` backs `peek()` once the token list is exhausted, so callers may pass a slice without
///   a trailing `Eof`.
/// - Tokens are borrowed from the caller; a token is only owned after the parser splits it
///   (see `split_not_eq`).
pub struct Parser<'a> {
    tokens: Vec<Cow<'a, Token>>,
    eof: Token,
    pos: usize,
    /// Current nesting level, see [`MAX_NESTING_DEPTH`].
    depth: usize,
    errors: Vec<CompileError>,
}

/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `conduit_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if matches!(last.kind, TokenKind::Eof) => last.clone(),
            Some(last) => {
                let end = last.span.end;
                let column = last.span.column + last.lexeme.chars().count();
                Token::new(TokenKind::Eof, "", Span::new(end, end, last.span.line, column))
            }
            None => Token::new(TokenKind::Eof, "", Span::new(0, 0, 1, 1)),
        };
        Self {
            tokens: tokens
                .iter()
                .filter(|t| !matches!(t.kind, TokenKind::Error(_)))
                .map(Cow::Borrowed)
                .collect(),
            eof,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Always returns a program; it is empty or partial when errors were reported.
    pub fn parse(mut self) -> (Program, Vec<CompileError>) {
        let mut resources = Vec::new();

        while !self.is_at_end() {
            let start = self.pos;
            let documentation = self.doc_string();
            match self.resource(documentation) {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize(start);
                }
            }
        }

        (Program { resources }, self.errors)
    }

    /// Parse a single expression that must span the whole token stream.
    pub fn parse_expression(mut self) -> (Option<Spanned<Expr>>, Vec<CompileError>) {
        let expr = match self.expression() {
            Ok(expr) => Some(expr),
            Err(e) => {
                self.errors.push(e);
                None
            }
        };
        if expr.is_some() && !self.is_at_end() {
            let err = errors::unexpected("expression", self.peek());
            self.errors.push(err);
        }
        (expr, self.errors)
    }
}
