#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms and on the parser’s
/// error recovery behavior (avoiding cascaded errors).
mod tests {
    use super::*;
    use crate::lexer;
    use conduit_core::lang::types::PrimitiveTypeId;

    fn parse_str(source: &str) -> (Program, Vec<CompileError>) {
        let (tokens, lex_errors) = lexer::lex(source);
        assert!(lex_errors.is_empty(), "unexpected lexical errors: {lex_errors:?}");
        parse(&tokens)
    }

    fn parse_ok(source: &str) -> Program {
        let (program, errors) = parse_str(source);
        assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
        program
    }

    fn single_resource(source: &str) -> Resource {
        let mut program = parse_ok(source);
        assert_eq!(program.resources.len(), 1);
        program.resources.remove(0).node
    }

    fn expr_str(source: &str) -> Spanned<Expr> {
        let (tokens, _) = lexer::lex(source);
        let (expr, errors) = parse_expression(&tokens);
        assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
        match expr {
            Some(expr) => expr,
            None => panic!("Expected an expression for {source:?}"),
        }
    }

    fn hook_body(source: &str) -> Vec<Spanned<Statement>> {
        let resource = single_resource(&format!("resource R {{ @before save {{ {source} }} }}"));
        resource.hooks[0].node.body.clone()
    }

    // ========================================================================
    // Resources and fields
    // ========================================================================

    #[test]
    fn test_parse_empty_program() {
        let (program, errors) = parse_str("");
        assert!(program.resources.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_resource_with_fields() {
        let resource = single_resource(
            r#"
resource User {
  id: uuid! @primary @auto
  email: email! @unique
  nickname: string?
  age: int? @min(13) @max(130)
}
"#,
        );
        assert_eq!(resource.name, "User");
        assert_eq!(resource.fields.len(), 4);

        let id = &resource.fields[0].node;
        assert_eq!(id.name, "id");
        assert_eq!(id.ty.node.kind, TypeKind::Primitive(PrimitiveTypeId::Uuid));
        assert!(!id.nullable);
        let names: Vec<_> = id.constraints.iter().map(|c| c.node.name.as_str()).collect();
        assert_eq!(names, ["primary", "auto"]);

        // Primitive type spellings are valid field names.
        assert_eq!(resource.fields[1].node.name, "email");
        assert!(resource.fields[2].node.nullable);

        let age = &resource.fields[3].node;
        assert_eq!(age.constraints[0].node.args.len(), 1);
        assert_eq!(age.constraints[1].node.annotation_id(), Some(AnnotationId::Max));
    }

    #[test]
    fn test_parse_doc_string() {
        let mut program = parse_ok("\"Registered accounts\"\nresource User { name: string! }");
        let resource = program.resources.remove(0).node;
        assert_eq!(resource.documentation.as_deref(), Some("Registered accounts"));
    }

    #[test]
    fn test_resource_span_and_position() {
        let program = parse_ok("\n\n  resource User {\n  name: string!\n}");
        let span = program.resources[0].span;
        assert_eq!((span.line, span.column), (3, 3));
    }

    #[test]
    fn test_parse_collection_types() {
        let resource = single_resource(
            r#"resource Post {
  tags: array<string!>!
  metadata: hash<string!, json?>?
  status: enum["draft", "published"]!
}"#,
        );
        assert_eq!(resource.fields[0].node.ty.node.to_string(), "array<string!>!");
        assert_eq!(resource.fields[1].node.ty.node.to_string(), "hash<string!, json?>?");
        match &resource.fields[2].node.ty.node.kind {
            TypeKind::Enum(values) => assert_eq!(values, &["draft", "published"]),
            other => panic!("Expected enum type, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_field_types() {
        let resource = single_resource(
            r#"resource R {
  a: array<hash<string!, User?>!>?
  b: enum["x", "y"]!
  c: decimal?
}"#,
        );
        let rendered = resource
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.node.name, f.node.ty.node))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r#"
        a: array<hash<string!, User?>!>?
        b: enum["x", "y"]!
        c: decimal?
        "#);
    }

    #[test]
    fn test_missing_nullability_is_reported() {
        let (program, errors) = parse_str("resource User { name: string }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Type must have nullability marker");
        assert_eq!(errors[0].lexeme, "}");
        let field = &program.resources[0].node.fields[0].node;
        assert!(!field.nullable);
    }

    #[test]
    fn test_missing_colon_recovers_resource() {
        let (program, errors) = parse_str("resource User { username string! }");
        assert_eq!(errors.len(), 1, "expected a single error, got {errors:?}");
        assert_eq!(errors[0].lexeme, "string");
        assert_eq!((errors[0].line(), errors[0].column()), (1, 26));
        assert_eq!(program.resources.len(), 1);
        assert_eq!(program.resources[0].node.name, "User");
        assert!(program.resources[0].node.fields.is_empty());
    }

    #[test]
    fn test_field_recovery_keeps_following_members() {
        let (program, errors) = parse_str(
            r#"resource User {
  username string!
  email: string!
  @validate has_email { condition: self.email != "" }
}"#,
        );
        assert_eq!(errors.len(), 1, "{errors:?}");
        let resource = &program.resources[0].node;
        assert_eq!(resource.fields.len(), 1);
        assert_eq!(resource.fields[0].node.name, "email");
        assert_eq!(resource.validations.len(), 1);
    }

    #[test]
    fn test_unexpected_token_in_body_skips_one_token() {
        let (program, errors) = parse_str("resource User { 42 name: string! }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Unexpected integer 42"), "{}", errors[0].message);
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    #[test]
    fn test_bad_resource_header_synchronizes() {
        let (program, errors) = parse_str("resource { x: int! }\nresource Good { y: int! }");
        assert_eq!(errors.len(), 1);
        assert_eq!(program.resources.len(), 1);
        assert_eq!(program.resources[0].node.name, "Good");
    }

    #[test]
    fn test_unclosed_resource_does_not_swallow_next() {
        let (program, errors) = parse_str("resource A { x: int!\nresource B { y: int! }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Expected '}'"));
        let names: Vec<_> = program.resources.iter().map(|r| r.node.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_garbage_input_terminates() {
        let (program, errors) = parse_str("} ] ) : ! ? , . @ 1 \"s\" x");
        assert!(program.resources.is_empty());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_unknown_annotation() {
        let (program, errors) = parse_str("resource User { @cache name: string! @indexed }");
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["Unknown annotation '@cache'", "Unknown annotation '@indexed'"]);
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    #[test]
    fn test_field_annotation_in_item_position() {
        let (program, errors) = parse_str("resource User { @unique name: string! }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'@unique' is not allowed"));
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    // ========================================================================
    // Relationships
    // ========================================================================

    #[test]
    fn test_scalar_resource_field_is_belongs_to() {
        let resource = single_resource("resource Post { author: User! }");
        assert!(resource.fields.is_empty());
        let rel = &resource.relationships[0].node;
        assert_eq!(rel.name, "author");
        assert_eq!(rel.target, "User");
        assert_eq!(rel.kind, RelationshipKind::BelongsTo);
        assert_eq!(rel.foreign_key, None);
        assert_eq!(rel.on_delete, None);
    }

    #[test]
    fn test_relationship_body() {
        let resource = single_resource(
            r#"resource Post {
  author: User! {
    foreign_key: "author_id"
    on_delete: cascade,
    on_update: "restrict"
  }
  comments: array<Comment!>!
  tags: array<Tag!>! { through: "post_tags" }
}"#,
        );
        let rels = &resource.relationships;
        assert_eq!(rels.len(), 3);
        assert_eq!(rels[0].node.foreign_key.as_deref(), Some("author_id"));
        assert_eq!(rels[0].node.on_delete, Some(ReferentialAction::Cascade));
        assert_eq!(rels[0].node.on_update, Some(ReferentialAction::Restrict));
        assert_eq!(rels[1].node.kind, RelationshipKind::HasMany);
        assert_eq!(rels[1].node.target, "Comment");
        assert_eq!(rels[2].node.kind, RelationshipKind::HasManyThrough);
        assert_eq!(rels[2].node.through.as_deref(), Some("post_tags"));
    }

    #[test]
    fn test_relationship_unknown_key_continues() {
        let (program, errors) = parse_str(r#"resource Post { author: User! { inverse: posts, foreign_key: "a" } }"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unknown relationship property 'inverse'");
        assert!(!errors[0].hints.is_empty());
        let rel = &program.resources[0].node.relationships[0].node;
        assert_eq!(rel.foreign_key.as_deref(), Some("a"));
    }

    #[test]
    fn test_relationship_bad_action() {
        let (_, errors) = parse_str("resource Post { author: User! { on_delete: explode } }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unknown referential action 'explode'");
        assert_eq!(errors[0].lexeme, "explode");
    }

    #[test]
    fn test_relationship_body_on_scalar_type() {
        let (program, errors) = parse_str(r#"resource Post { title: string! { foreign_key: "x" } }"#);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Relationship options require a resource type"));
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    // ========================================================================
    // Resource blocks
    // ========================================================================

    #[test]
    fn test_parse_hook() {
        let resource = single_resource(
            r#"resource Post {
  @before create @transaction @async {
    self.slug = String.slugify(self.title)
  }
  @after delete { log(self.id) }
}"#,
        );
        assert_eq!(resource.hooks.len(), 2);
        let before = &resource.hooks[0].node;
        assert_eq!(before.timing, HookTiming::Before);
        assert_eq!(before.event, "create");
        assert!(before.is_transaction && before.is_async);
        match &before.body[0].node {
            Statement::Assignment(assign) => {
                assert_eq!(assign.target.node.to_string(), "self.slug");
                assert_eq!(assign.value.node.to_string(), "String.slugify(self.title)");
            }
            other => panic!("Expected assignment, got {other:?}"),
        }
        assert_eq!(resource.hooks[1].node.timing, HookTiming::After);
    }

    #[test]
    fn test_parse_validation_and_constraint() {
        let resource = single_resource(
            r#"resource Order {
  total: decimal!
  @validate positive_total {
    condition: self.total > 0
    error: "Total must be positive"
  }
  @constraint shipped_has_date {
    on: [create, update]
    when: self.status == "shipped"
    condition: self.shipped_at != nil
    error: "Shipped orders need a date"
  }
}"#,
        );
        let validation = &resource.validations[0].node;
        assert_eq!(validation.name, "positive_total");
        assert_eq!(validation.condition.node.to_string(), "(self.total > 0)");
        assert_eq!(validation.error.as_deref(), Some("Total must be positive"));

        let constraint = &resource.constraints[0].node;
        assert_eq!(constraint.on, ["create", "update"]);
        assert!(constraint.when.is_some());
        assert_eq!(constraint.condition.node.to_string(), "(self.shipped_at != nil)");
    }

    #[test]
    fn test_validation_without_condition_is_dropped() {
        let (program, errors) = parse_str(r#"resource R { @validate v { error: "x" } }"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Validation 'v' is missing a condition");
        assert!(program.resources[0].node.validations.is_empty());
    }

    #[test]
    fn test_validation_unknown_key() {
        let (program, errors) = parse_str(r#"resource R { @validate v { message: "x", condition: true } }"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unknown validation property 'message'");
        assert_eq!(program.resources[0].node.validations.len(), 1);
    }

    #[test]
    fn test_validation_unknown_key_skips_only_that_token() {
        let (program, errors) = parse_str("resource R { @validate v { bogus condition: x > 0 } }");
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(errors[0].message, "Unknown validation property 'bogus'");
        assert_eq!(errors[0].lexeme, "bogus");
        let validations = &program.resources[0].node.validations;
        assert_eq!(validations[0].node.condition.node.to_string(), "(x > 0)");
    }

    #[test]
    fn test_validation_unknown_key_value_is_not_reported_again() {
        let (program, errors) = parse_str("resource R { @validate v { bogus: 1 condition: x > 0 } }");
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(errors[0].lexeme, "bogus");
        assert_eq!(program.resources[0].node.validations.len(), 1);
    }

    #[test]
    fn test_constraint_unknown_keys_each_reported() {
        let (program, errors) =
            parse_str("resource R { @constraint c { level: high, scope: [a, b] condition: ok } }");
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            ["Unknown constraint property 'level'", "Unknown constraint property 'scope'"]
        );
        assert_eq!(program.resources[0].node.constraints.len(), 1);
    }

    #[test]
    fn test_parse_scope_and_computed() {
        let resource = single_resource(
            r#"resource Post {
  @scope published { self.status == "published" }
  @scope by_author(author_id: uuid!, limit) { self.author_id == author_id }
  @computed word_count: int! { String.words(self.body) }
}"#,
        );
        assert_eq!(resource.scopes.len(), 2);
        assert!(resource.scopes[0].node.params.is_empty());
        let params = &resource.scopes[1].node.params;
        assert_eq!(params.len(), 2);
        assert!(params[0].node.ty.is_some());
        assert!(params[1].node.ty.is_none());

        let computed = &resource.computed[0].node;
        assert_eq!(computed.name, "word_count");
        match &computed.body.node {
            Expr::Call { namespace, .. } => assert_eq!(namespace.as_deref(), Some("String")),
            other => panic!("Expected namespaced call, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_operations_and_middleware() {
        let resource = single_resource(
            "resource Post { @operations [list, show, create,] @middleware [auth, rate_limit] }",
        );
        let ops: Vec<_> = resource.operations.iter().map(|o| o.node.as_str()).collect();
        assert_eq!(ops, ["list", "show", "create"]);
        assert_eq!(resource.middleware.len(), 2);
    }

    #[test]
    fn test_failed_block_skips_braces() {
        let (program, errors) = parse_str(r#"resource R { @validate { condition: true } name: string! }"#);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_parse_if_elsif_else() {
        let body = hook_body(
            r#"if self.total > 100 { self.tier = "gold" } elsif self.total > 10 { self.tier = "silver" } else { self.tier = "bronze" }"#,
        );
        match &body[0].node {
            Statement::If(stmt) => {
                assert_eq!(stmt.elsif_branches.len(), 1);
                assert_eq!(stmt.else_body.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("Expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_let_match_return() {
        let body = hook_body(
            r#"
let total: decimal! = self.price * self.quantity
match self.status {
  when "draft" { return }
  when "live" { return total }
}
"#,
        );
        assert_eq!(body.len(), 2);
        match &body[0].node {
            Statement::Let(stmt) => {
                assert_eq!(stmt.name, "total");
                assert!(stmt.ty.is_some());
            }
            other => panic!("Expected let, got {other:?}"),
        }
        match &body[1].node {
            Statement::Match(stmt) => {
                assert_eq!(stmt.arms.len(), 2);
                assert!(matches!(stmt.arms[0].node.body[0].node, Statement::Return(None)));
                assert!(matches!(stmt.arms[1].node.body[0].node, Statement::Return(Some(_))));
            }
            other => panic!("Expected match, got {other:?}"),
        }
    }

    #[test]
    fn test_let_type_marker_glued_to_equals() {
        let body = hook_body("let total: int!= 0");
        match &body[0].node {
            Statement::Let(stmt) => {
                assert_eq!(stmt.ty.as_ref().map(|t| t.node.to_string()).as_deref(), Some("int!"));
                assert_eq!(stmt.value.node.to_string(), "0");
            }
            other => panic!("Expected let, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_return_before_next_line() {
        let body = hook_body("return\nlog(self)");
        assert_eq!(body.len(), 2);
        assert!(matches!(body[0].node, Statement::Return(None)));
        assert!(matches!(body[1].node, Statement::Expr(_)));
    }

    #[test]
    fn test_parse_async_block() {
        let body = hook_body("@async { Mail.send(self.email) }");
        match &body[0].node {
            Statement::Async(stmts) => assert_eq!(stmts.len(), 1),
            other => panic!("Expected async block, got {other:?}"),
        }
    }

    #[test]
    fn test_statement_error_recovers_inside_block() {
        let (program, errors) = parse_str("resource R { @before save { ) log(self) } }");
        assert_eq!(errors.len(), 1);
        assert_eq!(program.resources[0].node.hooks[0].node.body.len(), 1);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_null_coalesce() {
        let expr = expr_str(r#"self.excerpt ?? "No excerpt""#);
        match &expr.node {
            Expr::NullCoalesce(left, right) => {
                assert!(matches!(&left.node, Expr::FieldAccess(obj, name)
                    if matches!(obj.node, Expr::SelfExpr) && name == "excerpt"));
                assert_eq!(right.node, Expr::Literal(Literal::String("No excerpt".to_string())));
            }
            other => panic!("Expected null-coalesce, got {other:?}"),
        }
    }

    #[test]
    fn test_precedence_ladder() {
        assert_eq!(expr_str("a || b && c").node.to_string(), "(a || (b && c))");
        assert_eq!(expr_str("a or b and not c").node.to_string(), "(a || (b && (!c)))");
        assert_eq!(expr_str("1 + 2 * 3 - 4").node.to_string(), "((1 + (2 * 3)) - 4)");
        assert_eq!(expr_str("a == b < c").node.to_string(), "(a == (b < c))");
        assert_eq!(expr_str("a ?? b || c").node.to_string(), "(a ?? (b || c))");
        assert_eq!(expr_str("-a.b").node.to_string(), "(-a.b)");
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(expr_str("2 ** 3 ** 2").node.to_string(), "(2 ** (3 ** 2))");
        assert_eq!(expr_str("8 / 4 / 2").node.to_string(), "((8 / 4) / 2)");
    }

    #[test]
    fn test_namespaced_call_vs_method_call() {
        match expr_str("Math.max(a, b)").node {
            Expr::Call { namespace, callee, args } => {
                assert_eq!(namespace.as_deref(), Some("Math"));
                assert_eq!(callee.node, Expr::Ident("max".to_string()));
                assert_eq!(args.len(), 2);
            }
            other => panic!("Expected call, got {other:?}"),
        }
        // A non-identifier receiver stays a field access followed by a call.
        match expr_str("self.tags.count()").node {
            Expr::Call { namespace, callee, .. } => {
                assert_eq!(namespace, None);
                assert!(matches!(callee.node, Expr::FieldAccess(..)));
            }
            other => panic!("Expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_postfix_chain() {
        assert_eq!(expr_str("self.author?.name").node.to_string(), "self.author?.name");
        assert_eq!(expr_str("items[0].price").node.to_string(), "items[0].price");
        assert_eq!(expr_str("self.date").node.to_string(), "self.date");
    }

    #[test]
    fn test_collection_literals() {
        assert_eq!(expr_str("[1, 2, 3,]").node.to_string(), "[1, 2, 3]");
        match expr_str(r#"{ name: "x", "key": 1, (a): b, }"#).node {
            Expr::Hash(entries) => {
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[0].0, HashKey::Name("name".to_string()));
                assert!(matches!(entries[1].0, HashKey::Expr(_)));
            }
            other => panic!("Expected hash literal, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_operand_keeps_partial_expression() {
        let (tokens, _) = lexer::lex("a + b *");
        let (expr, errors) = parse_expression(&tokens);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Expected an expression"));
        assert_eq!(expr.map(|e| e.node.to_string()).as_deref(), Some("(a + b)"));
    }

    #[test]
    fn test_missing_member_keeps_receiver() {
        for (source, partial) in [("self.", "self"), ("self.author?.", "self.author"), ("items[", "items")] {
            let (tokens, _) = lexer::lex(source);
            let (expr, errors) = parse_expression(&tokens);
            assert_eq!(errors.len(), 1, "{source}: {errors:?}");
            assert_eq!(expr.map(|e| e.node.to_string()).as_deref(), Some(partial), "{source}");
        }
    }

    #[test]
    fn test_unclosed_index_keeps_index() {
        let (tokens, _) = lexer::lex("items[0");
        let (expr, errors) = parse_expression(&tokens);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Expected ']'"));
        assert_eq!(expr.map(|e| e.node.to_string()).as_deref(), Some("items[0]"));
    }

    #[test]
    fn test_trailing_tokens_after_expression() {
        let (tokens, _) = lexer::lex("a b");
        let (expr, errors) = parse_expression(&tokens);
        assert!(expr.is_some());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].lexeme, "b");
    }

    #[test]
    fn test_parser_skips_lexical_error_tokens() {
        let (tokens, lex_errors) = lexer::lex("resource User { name: string! $ }");
        assert_eq!(lex_errors.len(), 1);
        let (program, errors) = parse(&tokens);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    #[test]
    fn test_tokens_without_eof() {
        let (mut tokens, _) = lexer::lex("resource User {");
        tokens.pop();
        let (program, errors) = parse(&tokens);
        assert_eq!(program.resources.len(), 1);
        assert_eq!(errors.len(), 1);
    }

    // ========================================================================
    // Nesting limit
    // ========================================================================

    const DEEP: usize = 10_000;

    fn assert_single_nesting_error(errors: &[CompileError]) {
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(errors[0].message, format!("Nesting too deep (max {MAX_NESTING_DEPTH})"));
    }

    #[test]
    fn test_deep_parentheses_hit_nesting_limit() {
        let source = format!(
            "resource A {{ @computed x: int! {{ {}1{} }} }} resource B {{ id: int! }}",
            "(".repeat(DEEP),
            ")".repeat(DEEP)
        );
        let (program, errors) = parse_str(&source);
        assert_single_nesting_error(&errors);
        assert_eq!(errors[0].lexeme, "(");
        assert_eq!(program.resources.len(), 2);
        assert!(program.resources[0].node.computed.is_empty());
        assert_eq!(program.resources[1].node.name, "B");
    }

    #[test]
    fn test_deep_unary_chain_hits_nesting_limit() {
        let source = format!("resource A {{ @computed x: bool! {{ {}true }} id: int! }}", "!".repeat(DEEP));
        let (program, errors) = parse_str(&source);
        assert_single_nesting_error(&errors);
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    #[test]
    fn test_deep_array_type_hits_nesting_limit() {
        let source = format!(
            "resource A {{ id: int! tags: {}int!{} }} resource B {{ id: int! }}",
            "array<".repeat(DEEP),
            ">!".repeat(DEEP)
        );
        let (program, errors) = parse_str(&source);
        assert_single_nesting_error(&errors);
        assert_eq!(program.resources.len(), 2);
        assert_eq!(program.resources[0].node.fields.len(), 1);
    }

    #[test]
    fn test_deep_blocks_hit_nesting_limit() {
        let source = format!(
            "resource A {{ @before save {{ {}{} }} }}",
            "if x { ".repeat(DEEP),
            "} ".repeat(DEEP)
        );
        let (program, errors) = parse_str(&source);
        assert_single_nesting_error(&errors);
        assert_eq!(program.resources[0].node.hooks.len(), 1);
    }

    #[test]
    fn test_nesting_below_limit_parses() {
        let depth = MAX_NESTING_DEPTH / 2;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(matches!(expr_str(&source).node, Expr::Paren(_)));
    }
}
