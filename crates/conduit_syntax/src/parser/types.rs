/// Type parsing.
///
/// Every type ends in a nullability marker: `!` (required) or `?` (optional). Element and value
/// types of `array<...>` and `hash<...>` carry their own marker.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<Type>, CompileError> {
        let start = self.current_span();
        let kind = match &self.peek().kind {
            TokenKind::PrimitiveType(id) => {
                let id = *id;
                self.advance();
                TypeKind::Primitive(id)
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                TypeKind::Resource(name)
            }
            TokenKind::Keyword(KeywordId::Array) => {
                self.advance();
                self.expect_op(OperatorId::Lt, "Expected '<' after 'array'")?;
                let element = self.nested(Self::type_expr)?;
                self.expect_op(OperatorId::Gt, "Expected '>' to close array type")?;
                TypeKind::Array(Box::new(element))
            }
            TokenKind::Keyword(KeywordId::Hash) => {
                self.advance();
                self.expect_op(OperatorId::Lt, "Expected '<' after 'hash'")?;
                let key = self.nested(Self::type_expr)?;
                self.expect_punct(PunctuationId::Comma, "Expected ',' between hash key and value types")?;
                let value = self.nested(Self::type_expr)?;
                self.expect_op(OperatorId::Gt, "Expected '>' to close hash type")?;
                TypeKind::Hash(Box::new(key), Box::new(value))
            }
            TokenKind::Keyword(KeywordId::Enum) => {
                self.advance();
                TypeKind::Enum(self.enum_values()?)
            }
            _ => return Err(errors::expected("a type", self.peek())),
        };

        let nullable = self.nullability();
        Ok(Spanned::new(Type { kind, nullable }, self.span_from(start)))
    }

    /// `["draft", "published"]`
    fn enum_values(&mut self) -> Result<Vec<String>, CompileError> {
        let open = self.peek().clone();
        self.expect_punct(PunctuationId::LBracket, "Expected '[' after 'enum'")?;
        let mut values = Vec::new();
        while !self.check_punct(PunctuationId::RBracket) && !self.is_at_end() {
            values.push(self.string_literal("an enum value string")?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBracket, "Expected ']' to close enum values")?;
        if values.is_empty() {
            self.errors
                .push(CompileError::syntax("Enum type must list at least one value".to_string(), &open));
        }
        Ok(values)
    }

    /// Consume `!` or `?`. A missing marker is reported and the type is treated as required.
    fn nullability(&mut self) -> bool {
        if self.check_op(OperatorId::NotEq) {
            self.split_not_eq();
        }
        if self.match_op(OperatorId::Bang) {
            false
        } else if self.match_punct(PunctuationId::Question) {
            true
        } else {
            let err = errors::missing_nullability(self.peek());
            self.errors.push(err);
            false
        }
    }

    /// Split the current `!=` into `!` and `=`.
    ///
    /// The lexer matches `!=` greedily, so `let total: int!= 0` arrives as `int` `!=` `0`.
    fn split_not_eq(&mut self) {
        let span = self.peek().span;
        let bang = Token::new(
            TokenKind::Operator(OperatorId::Bang),
            "!",
            Span::new(span.start, span.start + 1, span.line, span.column),
        );
        let eq = Token::new(
            TokenKind::Operator(OperatorId::Eq),
            "=",
            Span::new(span.start + 1, span.end, span.line, span.column + 1),
        );
        if let Some(slot) = self.tokens.get_mut(self.pos) {
            *slot = Cow::Owned(bang);
            self.tokens.insert(self.pos + 1, Cow::Owned(eq));
        }
    }
}
