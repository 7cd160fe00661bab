/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error recovery (`synchronize`, `skip_balanced_braces`, `recover_member`)
/// - The nesting guard (`nested`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Token at `index`, or the end-of-input token past the end.
    fn token_at(&self, index: usize) -> &Token {
        match self.tokens.get(index) {
            Some(token) => &**token,
            None => &self.eof,
        }
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.token_at(self.pos + 1)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end of input this returns the `Eof` token and does not move.
    fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.token_at(index)
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(index) => self.token_at(index).span,
            None => self.current_span(),
        }
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn check_annotation(&self, id: AnnotationId) -> bool {
        self.peek().kind.is_annotation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Build a syntax error at the current token: `"{msg}, found {token}"`.
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(format!("{}, found {}", msg, self.peek().kind), self.peek())
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Skip to the next `resource` keyword (or end of input).
    ///
    /// Consumes at least one token when nothing was consumed since `start`.
    fn synchronize(&mut self, start: usize) {
        if self.pos == start {
            self.advance();
        }
        while !self.is_at_end() && !self.check_keyword(KeywordId::Resource) {
            self.advance();
        }
        tracing::debug!(pos = self.pos, "parser resynchronized at top level");
    }

    /// If the current token is `{`, consume through its matching `}` (or end of input).
    fn skip_balanced_braces(&mut self) {
        if !self.check_punct(PunctuationId::LBrace) {
            return;
        }
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return;
                }
            }
            self.advance();
        }
    }

    /// Run `parse` one nesting level deeper.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the rest of the enclosing group is skipped and a
    /// "Nesting too deep" error is returned instead of descending further.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, CompileError>) -> Result<T, CompileError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let err = errors::nesting_too_deep(MAX_NESTING_DEPTH, self.peek());
            self.skip_nested_remainder();
            tracing::debug!(pos = self.pos, "nesting limit reached");
            return Err(err);
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Skip tokens up to (not including) the closer of the group the parser is in, or up to the
    /// next `resource` keyword.
    fn skip_nested_remainder(&mut self) {
        let mut balance = 0usize;
        while !self.is_at_end() && !self.check_keyword(KeywordId::Resource) {
            match self.peek().kind.punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => balance += 1,
                Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    if balance == 0 {
                        return;
                    }
                    balance -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Recovery after a malformed field: skip to the next plausible member start.
    ///
    /// Stops before `}`, any annotation or `@`, `resource`, or a name followed by `:`.
    fn recover_member(&mut self) {
        while !self.is_at_end() {
            let kind = &self.peek().kind;
            let at_member = matches!(kind, TokenKind::Ident(_) | TokenKind::PrimitiveType(_))
                && self.peek_next().kind.is_punctuation(PunctuationId::Colon);
            if at_member
                || kind.is_punctuation(PunctuationId::RBrace)
                || kind.is_punctuation(PunctuationId::At)
                || kind.annotation_id().is_some()
                || kind.is_keyword(KeywordId::Resource)
            {
                return;
            }
            self.advance();
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Check if the current token can start an expression
    fn is_at_expr_start(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Ident(_)
            | TokenKind::PrimitiveType(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::String(_) => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::True | KeywordId::False | KeywordId::Nil | KeywordId::SelfKw | KeywordId::Not
            ),
            TokenKind::Operator(id) => matches!(id, OperatorId::Bang | OperatorId::Minus),
            TokenKind::Punctuation(id) => {
                matches!(id, PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace)
            }
            _ => false,
        }
    }
}
