//! Property-based tests for the Conduit front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use conduit::ast::Literal;
use conduit::frontend::{lexer, parse_source, parser};
use conduit::lang::keywords;
use conduit::lexer::TokenKind;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Field names: lowercase identifiers that are not reserved keywords. Primitive type
/// spellings (`email`, `date`) are allowed on purpose.
fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
}

fn resource_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,10}"
}

fn primitive_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["string", "int", "decimal", "bool", "uuid", "timestamp", "email", "json"])
}

/// Fragments that look like Conduit, glued together in arbitrary order.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "resource", "User", "name", ":", "string", "!", "?", "{", "}", "[", "]", "(", ")", ",", "@before",
        "@validate", "@unique", "@", "if", "else", "match", "when", "return", "let", "=", "==", "??", "?.",
        ".", "self", "1", "2.5", "\"s\"", "array", "<", ">", "hash", "enum", "&&", "or", "not", "-", "**",
    ])
}

// =============================================================================
// Lexer properties
// =============================================================================

proptest! {
    /// Property: tokenizing the same input twice yields the same tokens and errors.
    #[test]
    fn lexing_is_idempotent(source in "\\PC{0,120}") {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: lines never decrease and columns strictly increase within a line.
    #[test]
    fn positions_are_monotonic(source in "[a-z0-9 \n\t{}():!?.@\"#+*-]{0,120}") {
        let (tokens, _) = lexer::lex(&source);
        for pair in tokens.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(b.line() >= a.line(), "{:?} then {:?}", a, b);
            if b.line() == a.line() && !matches!(b.kind, TokenKind::Eof) {
                prop_assert!(b.column() > a.column(), "{:?} then {:?}", a, b);
            }
        }
    }

    /// Property: re-escaping a decoded string literal lexes back to the same value.
    #[test]
    fn string_literals_round_trip(content in "[ -~\n\t]{0,60}") {
        let quoted = Literal::String(content.clone()).to_string();
        let (tokens, errors) = lexer::lex(&quoted);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::String(content));
        prop_assert_eq!(&tokens[0].lexeme, &quoted);
    }
}

// =============================================================================
// Parser properties
// =============================================================================

proptest! {
    /// Property: parsing terminates on any token soup and every error points into the source.
    #[test]
    fn parser_terminates_on_token_soup(parts in prop::collection::vec(fragment(), 0..80)) {
        let source = parts.join(" ");
        let unit = parse_source(&source);
        prop_assert!(unit.errors.len() <= 2 * unit.tokens.len() + 2);
        for err in &unit.errors {
            prop_assert!(err.span.end <= source.len(), "{:?}", err);
        }
    }

    /// Property: arbitrary text never panics the front end.
    #[test]
    fn parser_survives_arbitrary_text(source in "\\PC{0,200}") {
        let _ = parse_source(&source);
    }

    /// Property: generated well-formed resources parse cleanly with every field kept.
    #[test]
    fn generated_resources_parse_cleanly(
        name in resource_name(),
        fields in prop::collection::btree_map(field_name(), (primitive_type(), any::<bool>()), 1..12),
    ) {
        let body: Vec<String> = fields
            .iter()
            .map(|(field, (ty, optional))| format!("  {}: {}{}", field, ty, if *optional { "?" } else { "!" }))
            .collect();
        let source = format!("resource {} {{\n{}\n}}", name, body.join("\n"));
        let unit = parse_source(&source);
        prop_assert!(unit.errors.is_empty(), "{}\n{:?}", source, unit.errors);
        let resource = &unit.program.resources[0].node;
        prop_assert_eq!(&resource.name, &name);
        prop_assert_eq!(resource.fields.len(), fields.len());
        for (parsed, (field, (_, optional))) in resource.fields.iter().zip(&fields) {
            prop_assert_eq!(&parsed.node.name, field);
            prop_assert_eq!(parsed.node.nullable, *optional);
        }
    }

    /// Property: operators of one level group to the left, `**` to the right.
    #[test]
    fn associativity_follows_the_ladder(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let render = |source: String| {
            let (tokens, _) = lexer::lex(&source);
            let (expr, errors) = parser::parse_expression(&tokens);
            assert!(errors.is_empty(), "{errors:?}");
            expr.map(|e| e.node.to_string())
        };
        prop_assert_eq!(render(format!("{a} - {b} - {c}")), Some(format!("(({a} - {b}) - {c})")));
        prop_assert_eq!(render(format!("{a} ** {b} ** {c}")), Some(format!("({a} ** ({b} ** {c}))")));
        prop_assert_eq!(
            render(format!("{a} ?? {b} ?? {c}")),
            Some(format!("(({a} ?? {b}) ?? {c})"))
        );
    }
}
