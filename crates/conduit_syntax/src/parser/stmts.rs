/// Statement parsing methods.
///
/// This chunk parses hook-body statements (`if`, `return`, `let`, `match`, `@async`,
/// assignments) and brace-delimited blocks.
///
/// ## Notes
/// - Statements have no terminator; each one ends where its expression ends.
/// - A failed statement is reported inside `block()` and parsing resumes with the next token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Vec<Spanned<Statement>>, CompileError> {
        self.nested(Self::block_statements)
    }

    /// `{ statement* }`
    fn block_statements(&mut self) -> Result<Vec<Spanned<Statement>>, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{' to start block")?;
        let mut stmts = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let start = self.pos;
            match self.statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    if self.pos == start {
                        self.advance();
                    }
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close block")?;
        Ok(stmts)
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.current_span();

        let stmt = if self.check_keyword(KeywordId::If) {
            self.if_stmt()?
        } else if self.check_keyword(KeywordId::Return) {
            self.return_stmt()
        } else if self.check_keyword(KeywordId::Let) {
            self.let_stmt()?
        } else if self.check_keyword(KeywordId::Match) {
            self.match_stmt()?
        } else if self.check_annotation(AnnotationId::Async) {
            self.advance();
            Statement::Async(self.block()?)
        } else {
            self.assignment_or_expr_stmt()?
        };

        Ok(Spanned::new(stmt, self.span_from(start)))
    }

    /// `if cond { ... } elsif cond { ... } else { ... }`
    fn if_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        let condition = self.expression()?;
        let then_body = self.block()?;

        let mut elsif_branches = Vec::new();
        while self.match_keyword(KeywordId::Elsif) {
            let condition = self.expression()?;
            let body = self.block()?;
            elsif_branches.push(ElsifBranch { condition, body });
        }

        let else_body = if self.match_keyword(KeywordId::Else) {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Statement::If(IfStmt {
            condition,
            then_body,
            elsif_branches,
            else_body,
        }))
    }

    /// `return [expr]`
    ///
    /// The value must start on the same line as `return`; a bare `return` followed by a new
    /// statement on the next line returns nothing.
    fn return_stmt(&mut self) -> Statement {
        let line = self.advance().line();
        if !self.is_at_expr_start() || self.peek().line() != line {
            return Statement::Return(None);
        }
        match self.expression() {
            Ok(value) => Statement::Return(Some(value)),
            Err(e) => {
                self.errors.push(e);
                Statement::Return(None)
            }
        }
    }

    /// `let name[: Type] = expr`
    fn let_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::Let, "Expected 'let'")?;
        let name = self.member_name("a variable name")?.node;
        let ty = if self.match_punct(PunctuationId::Colon) {
            Some(self.type_expr()?)
        } else {
            None
        };
        self.expect_op(OperatorId::Eq, "Expected '=' after variable name")?;
        let value = self.expression()?;
        Ok(Statement::Let(LetStmt { name, ty, value }))
    }

    /// `match subject { when pattern { ... } ... }`
    fn match_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect_keyword(KeywordId::Match, "Expected 'match'")?;
        let subject = self.expression()?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after match subject")?;

        let mut arms = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            let start = self.current_span();
            if !self.match_keyword(KeywordId::When) {
                let err = self.error_here("Expected 'when' in match arm");
                self.errors.push(err);
                self.advance();
                continue;
            }
            let pattern = self.expression()?;
            let body = self.block()?;
            arms.push(Spanned::new(MatchArm { pattern, body }, self.span_from(start)));
        }

        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close match")?;
        Ok(Statement::Match(MatchStmt { subject, arms }))
    }

    /// `target = value` or a bare expression.
    fn assignment_or_expr_stmt(&mut self) -> Result<Statement, CompileError> {
        let expr = self.expression()?;
        if self.match_op(OperatorId::Eq) {
            let value = self.expression()?;
            return Ok(Statement::Assignment(AssignmentStmt { target: expr, value }));
        }
        Ok(Statement::Expr(expr))
    }
}
