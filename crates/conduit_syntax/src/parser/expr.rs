/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder:
/// `??` → `||`/`or` → `&&`/`and` → equality → comparison → additive → multiplicative → `**` →
/// unary → postfix → primary.
///
/// ## Notes
/// - All binary levels are left-associative except `**`, which recurses on its right operand.
/// - A missing right operand is reported and the level returns its left operand, so one bad
///   operand does not discard the rest of the expression.
/// - `expression`, unary operands and `**` right operands go through `nested()`, which bounds
///   recursion depth.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.nested(Self::null_coalesce)
    }

    /// Parse the right operand of a binary operator, reporting a failure instead of returning it.
    fn operand(&mut self, parse: fn(&mut Self) -> Result<Spanned<Expr>, CompileError>) -> Option<Spanned<Expr>> {
        match parse(self) {
            Ok(expr) => Some(expr),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    fn null_coalesce(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.or_expr()?;
        while self.match_op(OperatorId::QuestionQuestion) {
            let Some(right) = self.operand(Self::or_expr) else {
                return Ok(left);
            };
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::NullCoalesce(Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    fn or_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.and_expr()?;
        while self.match_op(OperatorId::OrOr) || self.match_keyword(KeywordId::Or) {
            let Some(right) = self.operand(Self::and_expr) else {
                return Ok(left);
            };
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Logical(Box::new(left), LogicalOp::Or, Box::new(right)), span);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.equality()?;
        while self.match_op(OperatorId::AndAnd) || self.match_keyword(KeywordId::And) {
            let Some(right) = self.operand(Self::equality) else {
                return Ok(left);
            };
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Logical(Box::new(left), LogicalOp::And, Box::new(right)), span);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_level(
            Self::comparison,
            &[(OperatorId::EqEq, BinaryOp::Eq), (OperatorId::NotEq, BinaryOp::NotEq)],
        )
    }

    fn comparison(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_level(
            Self::additive,
            &[
                (OperatorId::Lt, BinaryOp::Lt),
                (OperatorId::LtEq, BinaryOp::LtEq),
                (OperatorId::Gt, BinaryOp::Gt),
                (OperatorId::GtEq, BinaryOp::GtEq),
            ],
        )
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_level(
            Self::multiplicative,
            &[(OperatorId::Plus, BinaryOp::Add), (OperatorId::Minus, BinaryOp::Sub)],
        )
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_level(
            Self::power,
            &[
                (OperatorId::Star, BinaryOp::Mul),
                (OperatorId::Slash, BinaryOp::Div),
                (OperatorId::Percent, BinaryOp::Mod),
            ],
        )
    }

    /// One left-associative level: `next (op next)*` for the operators in `ops`.
    fn binary_level(
        &mut self,
        next: fn(&mut Self) -> Result<Spanned<Expr>, CompileError>,
        ops: &[(OperatorId, BinaryOp)],
    ) -> Result<Spanned<Expr>, CompileError> {
        let mut left = next(self)?;
        loop {
            let Some(op) = ops.iter().find(|(id, _)| self.check_op(*id)).map(|(_, op)| *op) else {
                break;
            };
            self.advance();
            let Some(right) = self.operand(next) else {
                return Ok(left);
            };
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn power(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let left = self.unary()?;
        if self.match_op(OperatorId::StarStar) {
            // Right-associative: 2 ** 3 ** 2 = 2 ** (3 ** 2)
            let Some(right) = self.operand(|p| p.nested(Self::power)) else {
                return Ok(left);
            };
            let span = left.span.merge(right.span);
            return Ok(Spanned::new(
                Expr::Binary(Box::new(left), BinaryOp::Pow, Box::new(right)),
                span,
            ));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let op = if self.match_op(OperatorId::Bang) || self.match_keyword(KeywordId::Not) {
            UnaryOp::Not
        } else if self.match_op(OperatorId::Minus) {
            UnaryOp::Neg
        } else {
            return self.postfix();
        };
        let start = self.previous_span();
        let operand = self.nested(Self::unary)?;
        let span = start.merge(operand.span);
        Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), span))
    }

    /// Calls, member access and indexing after a primary expression.
    ///
    /// A missing member name or index is reported and the receiver parsed so far is returned.
    fn postfix(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_punct(PunctuationId::LParen) {
                let args = self.arguments()?;
                let span = self.span_from(expr.span);
                expr = Spanned::new(
                    Expr::Call {
                        namespace: None,
                        callee: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else if self.match_punct(PunctuationId::Dot) {
                let member = match self.any_name("a member name after '.'") {
                    Ok(member) => member,
                    Err(e) => {
                        self.errors.push(e);
                        break;
                    }
                };
                // `ns.f(args)` on a bare identifier is a namespaced call, not a method call.
                let namespace = match &expr.node {
                    Expr::Ident(ns) if self.check_punct(PunctuationId::LParen) => Some(ns.clone()),
                    _ => None,
                };
                if let Some(namespace) = namespace {
                    self.advance();
                    let args = self.arguments()?;
                    let span = self.span_from(expr.span);
                    let callee = Spanned::new(Expr::Ident(member.node), member.span);
                    expr = Spanned::new(
                        Expr::Call {
                            namespace: Some(namespace),
                            callee: Box::new(callee),
                            args,
                        },
                        span,
                    );
                } else {
                    let span = self.span_from(expr.span);
                    expr = Spanned::new(Expr::FieldAccess(Box::new(expr), member.node), span);
                }
            } else if self.match_punct(PunctuationId::SafeNav) {
                let member = match self.any_name("a member name after '?.'") {
                    Ok(member) => member,
                    Err(e) => {
                        self.errors.push(e);
                        break;
                    }
                };
                let span = self.span_from(expr.span);
                expr = Spanned::new(Expr::SafeNavigation(Box::new(expr), member.node), span);
            } else if self.match_punct(PunctuationId::LBracket) {
                let Some(index) = self.operand(Self::expression) else {
                    break;
                };
                if let Err(e) = self.expect_punct(PunctuationId::RBracket, "Expected ']' after index") {
                    self.errors.push(e);
                }
                let span = self.span_from(expr.span);
                expr = Spanned::new(Expr::Index(Box::new(expr), Box::new(index)), span);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span();

        if let Some(lit) = self.peek().literal() {
            self.advance();
            return Ok(Spanned::new(Expr::Literal(lit), start));
        }

        if self.match_keyword(KeywordId::SelfKw) {
            return Ok(Spanned::new(Expr::SelfExpr, start));
        }

        // Primitive type names double as plain identifiers (`email`, `date`).
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => Some(name.clone()),
            TokenKind::PrimitiveType(id) => Some(conduit_core::lang::types::as_str(*id).to_string()),
            _ => None,
        };
        if let Some(name) = name {
            self.advance();
            return Ok(Spanned::new(Expr::Ident(name), start));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = match self.expression() {
                Ok(inner) => inner,
                Err(e) => {
                    // Keep the closer balanced so enclosing groups do not report it again.
                    self.match_punct(PunctuationId::RParen);
                    return Err(e);
                }
            };
            self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
            return Ok(Spanned::new(Expr::Paren(Box::new(inner)), self.span_from(start)));
        }

        if self.match_punct(PunctuationId::LBracket) {
            return self.array_literal(start);
        }

        if self.match_punct(PunctuationId::LBrace) {
            return self.hash_literal(start);
        }

        Err(errors::expected("an expression", self.peek()))
    }

    /// `[a, b, c]`, after the opening `[`. A trailing comma is allowed.
    fn array_literal(&mut self, start: Span) -> Result<Spanned<Expr>, CompileError> {
        let mut elements = Vec::new();
        while !self.check_punct(PunctuationId::RBracket) && !self.is_at_end() {
            elements.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after array elements")?;
        Ok(Spanned::new(Expr::Array(elements), self.span_from(start)))
    }

    /// `{ name: value, "key": value, (expr): value }`, after the opening `{`.
    ///
    /// A name-like token directly followed by `:` is a bare key; anything else is an expression key.
    fn hash_literal(&mut self, start: Span) -> Result<Spanned<Expr>, CompileError> {
        let mut entries = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let bare_key = self.peek().kind.name_spelling().is_some()
                && self.peek_next().kind.is_punctuation(PunctuationId::Colon);
            let key = if bare_key {
                HashKey::Name(self.any_name("a hash key")?.node)
            } else {
                HashKey::Expr(self.expression()?)
            };
            self.expect_punct(PunctuationId::Colon, "Expected ':' after hash key")?;
            let value = self.expression()?;
            entries.push((key, value));
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' after hash entries")?;
        Ok(Spanned::new(Expr::Hash(entries), self.span_from(start)))
    }

    /// Call arguments after the opening `(`, through the closing `)`.
    fn arguments(&mut self) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut args = Vec::new();
        while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
            args.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;
        Ok(args)
    }
}
