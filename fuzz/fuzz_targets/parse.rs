#![no_main]

use conduit::ast::{Expr, Spanned, Visitor, walk_expr};
use conduit::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

/// Renders every expression in the tree.
struct RenderAll;

impl Visitor for RenderAll {
    fn visit_expr(&mut self, expr: &Spanned<Expr>) {
        let _ = expr.node.to_string();
        walk_expr(self, expr);
    }
}

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing never fails outright; error tokens are skipped by the parser.
        let (tokens, _) = lexer::lex(s);
        let (program, _) = parser::parse(&tokens);
        RenderAll.visit_program(&program);
    }
});
