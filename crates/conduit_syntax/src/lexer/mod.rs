//! Lexer for the Conduit resource definition language
//!
//! Handles tokenization including:
//! - Keywords, primitive type names, and identifiers
//! - `@annotation` markers
//! - Integer, float, and string literals
//! - Operators and punctuation (greedy two-character match first)
//!
//! The lexer never stops early: problems become [`TokenKind::Error`] tokens plus a diagnostic, and
//! scanning resumes at the next character.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning and escapes
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id, primitive_type_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use conduit_core::lang::annotations;
use conduit_core::lang::operators::OperatorId;
use conduit_core::lang::punctuation::PunctuationId;

/// Lexer for Conduit source code.
///
/// Tracks the byte offset plus 1-indexed line/column of the next character; every token records
/// the position of its first character.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    /// Line/column of the token currently being scanned.
    start_line: usize,
    start_column: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with exactly one `Eof` token; lexical errors are returned
    /// alongside it.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<CompileError>) {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.start_line = self.line;
        self.start_column = self.column;
        let eof = self.span_from(self.current_pos);
        self.tokens.push(Token::new(TokenKind::Eof, "", eof));

        (self.tokens, self.errors)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Look `n` characters past the current one without consuming anything.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.current_pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        self.start_line = self.line;
        self.start_column = self.column;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace
            ' ' | '\t' | '\r' | '\n' => {}

            // Comments
            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            // Operators
            '+' => self.add_op(OperatorId::Plus, start),
            '-' => {
                if self.match_char('>') {
                    self.add_punct(PunctuationId::Arrow, start);
                } else {
                    self.add_op(OperatorId::Minus, start);
                }
            }
            '*' => self.operator(start, OperatorId::Star, &[('*', OperatorId::StarStar)]),
            '/' => self.add_op(OperatorId::Slash, start),
            '%' => self.add_op(OperatorId::Percent, start),
            '=' => self.operator(start, OperatorId::Eq, &[('=', OperatorId::EqEq)]),
            '!' => self.operator(start, OperatorId::Bang, &[('=', OperatorId::NotEq)]),
            '<' => self.operator(start, OperatorId::Lt, &[('=', OperatorId::LtEq)]),
            '>' => self.operator(start, OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '&' => {
                if self.match_char('&') {
                    self.add_op(OperatorId::AndAnd, start);
                } else {
                    self.invalid_character(c, start);
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_op(OperatorId::OrOr, start);
                } else {
                    self.add_punct(PunctuationId::Pipe, start);
                }
            }
            '?' => {
                if self.match_char('?') {
                    self.add_op(OperatorId::QuestionQuestion, start);
                } else if self.match_char('.') {
                    self.add_punct(PunctuationId::SafeNav, start);
                } else {
                    self.add_punct(PunctuationId::Question, start);
                }
            }

            // Punctuation
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctuationId::ColonColon, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            '.' => self.add_punct(PunctuationId::Dot, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            '@' => self.scan_at(start),

            // Strings
            '"' => self.scan_string(start),

            // Numbers
            '0'..='9' => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => self.invalid_character(c, start),
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.current_pos, self.start_line, self.start_column)
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let span = self.span_from(start);
        let lexeme = &self.source[start..self.current_pos];
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Record a lexical error and leave an `Error` token in its place.
    fn add_error(&mut self, message: String, start: usize) {
        let span = self.span_from(start);
        let lexeme = &self.source[start..self.current_pos];
        self.errors.push(CompileError::lexical(message.clone(), span, lexeme));
        self.tokens.push(Token::new(TokenKind::Error(message), lexeme, span));
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start);
                return;
            }
        }
        self.add_op(simple, start);
    }

    fn invalid_character(&mut self, c: char, start: usize) {
        self.add_error(format!("Invalid character '{}'", c), start);
    }

    // ========================================================================
    // Identifier / annotation scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else if let Some(id) = primitive_type_id(spelling) {
            self.add_token(TokenKind::PrimitiveType(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }

    /// `@name` becomes one annotation token when `name` is registered; otherwise only `@` is emitted
    /// and the identifier is scanned as its own token on the next pass.
    fn scan_at(&mut self, start: usize) {
        let rest = &self.source[self.current_pos..];
        if rest.starts_with(is_ident_start) {
            let len = rest.find(|c: char| !is_ident_continue(c)).unwrap_or(rest.len());
            if let Some(id) = annotations::from_str(&rest[..len]) {
                for _ in 0..len {
                    self.advance();
                }
                self.add_token(TokenKind::Annotation(id), start);
                return;
            }
        }
        self.add_punct(PunctuationId::At, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (Vec<Token>, Vec<CompileError>) {
    let (tokens, errors) = Lexer::new(source).tokenize();
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "lexical errors");
    }
    (tokens, errors)
}

// ============================================================================
// TESTS
// ============================================================================
