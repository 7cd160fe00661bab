/// Declaration parsing methods.
///
/// This chunk is responsible for parsing `resource` declarations and every member kind their
/// bodies can hold: fields, relationships, hooks, validations, constraints, scopes, computed
/// fields, and the `@operations` / `@middleware` lists.
///
/// ## Notes
/// - Most entrypoints in this file return [`Spanned<T>`] to preserve source locations.
/// - A failed member is reported and the body loop resumes; only a malformed resource header
///   bubbles up to `Parser::synchronize()`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Resources
    // ========================================================================

    fn resource(&mut self, documentation: Option<String>) -> Result<Spanned<Resource>, CompileError> {
        let start = self.current_span();
        self.expect_keyword(KeywordId::Resource, "Expected 'resource'")?;
        let name = self.identifier("a resource name")?;
        self.expect_punct(PunctuationId::LBrace, "Expected '{' after resource name")?;
        tracing::trace!(resource = %name, "parsing resource");

        let mut resource = Resource {
            name,
            documentation,
            ..Resource::default()
        };

        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if self.check_keyword(KeywordId::Resource) {
                // The previous body was never closed; let the top-level loop take the next resource.
                break;
            }
            self.resource_item(&mut resource);
        }

        if let Err(e) = self.expect_punct(PunctuationId::RBrace, "Expected '}' to close resource body") {
            self.errors.push(e);
        }

        Ok(Spanned::new(resource, self.span_from(start)))
    }

    /// Parse one member of a resource body, reporting (not returning) any error.
    fn resource_item(&mut self, resource: &mut Resource) {
        let start = self.pos;
        let token = self.peek().clone();

        let result = match &token.kind {
            TokenKind::Ident(_) | TokenKind::PrimitiveType(_) => match self.member() {
                Ok(Member::Field(field)) => {
                    resource.fields.push(field);
                    Ok(())
                }
                Ok(Member::Relationship(rel)) => {
                    resource.relationships.push(rel);
                    Ok(())
                }
                Err(e) => {
                    self.errors.push(e);
                    self.recover_member();
                    return;
                }
            },
            TokenKind::Annotation(id) if annotations::position(*id) == AnnotationPosition::ResourceBlock => {
                self.block_annotation(*id, resource)
            }
            TokenKind::Annotation(id) => {
                self.advance();
                Err(errors::misplaced_annotation(
                    annotations::as_str(*id),
                    "at the top of a resource body",
                    &token,
                ))
            }
            TokenKind::Punctuation(PunctuationId::At) => {
                self.advance();
                self.unknown_annotation(&token);
                return;
            }
            _ => Err(errors::unexpected("resource body", &token)),
        };

        if let Err(e) = result {
            self.errors.push(e);
            if self.check_punct(PunctuationId::LBrace) {
                self.skip_balanced_braces();
            } else if self.pos == start {
                self.advance();
            }
        }
    }

    /// Report `@name` where `name` is not a registered annotation. `at` is the `@` token, already
    /// consumed; the following name (if any) is consumed too.
    fn unknown_annotation(&mut self, at: &Token) {
        let err = match self.peek().kind.name_spelling() {
            Some(name) => {
                let err = errors::unknown_annotation(name, at);
                self.advance();
                err
            }
            None => errors::expected("an annotation name after '@'", self.peek()),
        };
        self.errors.push(err);
    }

    fn block_annotation(&mut self, id: AnnotationId, resource: &mut Resource) -> Result<(), CompileError> {
        match id {
            AnnotationId::Before | AnnotationId::After => resource.hooks.push(self.hook()?),
            AnnotationId::Validate => {
                if let Some(validation) = self.validation()? {
                    resource.validations.push(validation);
                }
            }
            AnnotationId::Constraint => {
                if let Some(constraint) = self.constraint()? {
                    resource.constraints.push(constraint);
                }
            }
            AnnotationId::Scope => resource.scopes.push(self.scope()?),
            AnnotationId::Computed => resource.computed.push(self.computed()?),
            AnnotationId::Operations => {
                self.advance();
                resource.operations.extend(self.name_list("operations list")?);
            }
            AnnotationId::Middleware => {
                self.advance();
                resource.middleware.extend(self.name_list("middleware list")?);
            }
            other => {
                let token = self.advance().clone();
                return Err(errors::misplaced_annotation(
                    annotations::as_str(other),
                    "at the top of a resource body",
                    &token,
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Fields and relationships
    // ========================================================================

    /// `name: Type [@annotation(args)]* [{ relationship options }]`
    fn member(&mut self) -> Result<Member, CompileError> {
        let name = self.member_name("a field name")?;
        self.expect_punct(PunctuationId::Colon, "Expected ':' after field name")?;
        let ty = self.type_expr()?;
        let constraints = self.field_constraints()?;

        let body_token = self.peek().clone();
        let options = if body_token.kind.is_punctuation(PunctuationId::LBrace) {
            Some(self.relationship_options()?)
        } else {
            None
        };

        let span = self.span_from(name.span);
        let nullable = ty.node.nullable;
        let target = ty.node.resource_target().map(str::to_string);

        match target {
            Some(target) => {
                let options = options.unwrap_or_default();
                let kind = if options.through.is_some() {
                    RelationshipKind::HasManyThrough
                } else if ty.node.is_collection() {
                    RelationshipKind::HasMany
                } else {
                    RelationshipKind::BelongsTo
                };
                Ok(Member::Relationship(Spanned::new(
                    Relationship {
                        name: name.node,
                        target,
                        kind,
                        ty,
                        nullable,
                        foreign_key: options.foreign_key,
                        on_delete: options.on_delete,
                        on_update: options.on_update,
                        through: options.through,
                        constraints,
                    },
                    span,
                )))
            }
            None => {
                if options.is_some() {
                    self.errors.push(
                        CompileError::syntax(
                            format!("Relationship options require a resource type, found '{}'", ty.node),
                            &body_token,
                        )
                        .with_hint("Relationship targets are resource names, e.g. `author: User!`"),
                    );
                }
                Ok(Member::Field(Spanned::new(
                    Field {
                        name: name.node,
                        ty,
                        nullable,
                        constraints,
                    },
                    span,
                )))
            }
        }
    }

    /// Zero or more field annotations following a type: `@unique @default("x") @min(1)`.
    fn field_constraints(&mut self) -> Result<Vec<Spanned<FieldConstraint>>, CompileError> {
        let mut constraints = Vec::new();
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Annotation(id) if annotations::position(*id) == AnnotationPosition::Field => {
                    self.advance();
                    let args = if self.match_punct(PunctuationId::LParen) {
                        self.arguments()?
                    } else {
                        Vec::new()
                    };
                    constraints.push(Spanned::new(
                        FieldConstraint {
                            name: annotations::as_str(*id).to_string(),
                            args,
                        },
                        self.span_from(token.span),
                    ));
                }
                TokenKind::Punctuation(PunctuationId::At) => {
                    self.advance();
                    self.unknown_annotation(&token);
                    if self.match_punct(PunctuationId::LParen) {
                        self.arguments()?;
                    }
                }
                _ => return Ok(constraints),
            }
        }
    }

    /// `{ foreign_key: "author_id", on_delete: cascade, on_update: restrict, through: "memberships" }`
    fn relationship_options(&mut self) -> Result<RelationshipOptions, CompileError> {
        const KEYS: &[&str] = &["foreign_key", "on_delete", "on_update", "through"];
        let mut options = RelationshipOptions::default();

        self.property_block("relationship options", "relationship", KEYS, |p, key| {
            let value_token = p.peek().clone();
            let value = match value_token.kind.name_spelling() {
                Some(name) => {
                    p.advance();
                    name.to_string()
                }
                None => p.string_literal("a string or identifier value")?,
            };

            match key.node.as_str() {
                "foreign_key" => options.foreign_key = Some(value),
                "through" => options.through = Some(value),
                "on_delete" | "on_update" => {
                    let Some(action) = ReferentialAction::parse(&value) else {
                        return Err(CompileError::syntax(
                            format!("Unknown referential action '{}'", value),
                            &value_token,
                        )
                        .with_hint("Expected one of: cascade, restrict, set_null, set_default, no_action"));
                    };
                    if key.node == "on_delete" {
                        options.on_delete = Some(action);
                    } else {
                        options.on_update = Some(action);
                    }
                }
                _ => {}
            }
            Ok(())
        })?;

        Ok(options)
    }

    // ========================================================================
    // Hooks
    // ========================================================================

    /// `@before create @transaction { ... }`
    fn hook(&mut self) -> Result<Spanned<Hook>, CompileError> {
        let start = self.current_span();
        let timing = if self.check_annotation(AnnotationId::Before) {
            HookTiming::Before
        } else {
            HookTiming::After
        };
        self.advance();
        let event = self.any_name("a hook event name")?.node;

        let mut is_transaction = false;
        let mut is_async = false;
        loop {
            if self.check_annotation(AnnotationId::Transaction) {
                self.advance();
                is_transaction = true;
            } else if self.check_annotation(AnnotationId::Async) {
                self.advance();
                is_async = true;
            } else {
                break;
            }
        }

        let body = self.block()?;
        Ok(Spanned::new(
            Hook {
                timing,
                event,
                is_transaction,
                is_async,
                body,
            },
            self.span_from(start),
        ))
    }

    // ========================================================================
    // Validations and constraints
    // ========================================================================

    /// `@validate name { condition: expr, error: "message" }`
    ///
    /// Returns `Ok(None)` when the block has no `condition` (the omission is reported).
    fn validation(&mut self) -> Result<Option<Spanned<Validation>>, CompileError> {
        const KEYS: &[&str] = &["condition", "error"];
        let start = self.current_span();
        self.advance();
        let name_token = self.peek().clone();
        let name = self.any_name("a validation name")?.node;

        let mut condition = None;
        let mut error = None;
        self.property_block("validation block", "validation", KEYS, |p, key| {
            match key.node.as_str() {
                "condition" => condition = Some(p.expression()?),
                "error" => error = Some(p.string_literal("an error message string")?),
                _ => {}
            }
            Ok(())
        })?;

        let Some(condition) = condition else {
            self.errors.push(CompileError::syntax(
                format!("Validation '{}' is missing a condition", name),
                &name_token,
            ));
            return Ok(None);
        };
        Ok(Some(Spanned::new(
            Validation { name, condition, error },
            self.span_from(start),
        )))
    }

    /// `@constraint name { on: [create, update], when: expr, condition: expr, error: "message" }`
    fn constraint(&mut self) -> Result<Option<Spanned<Constraint>>, CompileError> {
        const KEYS: &[&str] = &["on", "when", "condition", "error"];
        let start = self.current_span();
        self.advance();
        let name_token = self.peek().clone();
        let name = self.any_name("a constraint name")?.node;

        let mut on = Vec::new();
        let mut when = None;
        let mut condition = None;
        let mut error = None;
        self.property_block("constraint block", "constraint", KEYS, |p, key| {
            match key.node.as_str() {
                "on" => on = p.name_list("event list")?.into_iter().map(|n| n.node).collect(),
                "when" => when = Some(p.expression()?),
                "condition" => condition = Some(p.expression()?),
                "error" => error = Some(p.string_literal("an error message string")?),
                _ => {}
            }
            Ok(())
        })?;

        let Some(condition) = condition else {
            self.errors.push(CompileError::syntax(
                format!("Constraint '{}' is missing a condition", name),
                &name_token,
            ));
            return Ok(None);
        };
        Ok(Some(Spanned::new(
            Constraint {
                name,
                on,
                when,
                condition,
                error,
            },
            self.span_from(start),
        )))
    }

    // ========================================================================
    // Scopes and computed fields
    // ========================================================================

    /// `@scope name(param: Type!, other) { condition }`
    fn scope(&mut self) -> Result<Spanned<Scope>, CompileError> {
        let start = self.current_span();
        self.advance();
        let name = self.any_name("a scope name")?.node;

        let mut params = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
                let param_name = self.member_name("a parameter name")?;
                let ty = if self.match_punct(PunctuationId::Colon) {
                    Some(self.type_expr()?)
                } else {
                    None
                };
                let span = self.span_from(param_name.span);
                params.push(Spanned::new(
                    ScopeParam {
                        name: param_name.node,
                        ty,
                    },
                    span,
                ));
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
            self.expect_punct(PunctuationId::RParen, "Expected ')' after scope parameters")?;
        }

        let condition = self.braced_expression("scope condition")?;
        Ok(Spanned::new(
            Scope {
                name,
                params,
                condition,
            },
            self.span_from(start),
        ))
    }

    /// `@computed name: Type! { expr }`
    fn computed(&mut self) -> Result<Spanned<Computed>, CompileError> {
        let start = self.current_span();
        self.advance();
        let name = self.member_name("a computed field name")?.node;
        self.expect_punct(PunctuationId::Colon, "Expected ':' after computed field name")?;
        let ty = self.type_expr()?;
        let body = self.braced_expression("computed field body")?;
        Ok(Spanned::new(Computed { name, ty, body }, self.span_from(start)))
    }

    /// `{ expr }`
    fn braced_expression(&mut self, what: &str) -> Result<Spanned<Expr>, CompileError> {
        self.expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to start {}", what))?;
        let expr = match self.expression() {
            Ok(expr) => expr,
            Err(e) => {
                self.match_punct(PunctuationId::RBrace);
                return Err(e);
            }
        };
        self.expect_punct(PunctuationId::RBrace, &format!("Expected '}}' to close {}", what))?;
        Ok(expr)
    }
}
