/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `conduit_syntax::lexer`. Lexical error tokens are skipped.
///
/// ## Returns
/// The best-effort program plus every syntax error, in source order. The program is returned
/// even when errors were reported.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> (Program, Vec<CompileError>) {
    let (program, errors) = Parser::new(tokens).parse();
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "parse finished with errors");
    }
    (program, errors)
}

/// Parse a standalone expression (e.g. a condition typed into a tool).
///
/// Tokens left over after the expression are reported as an error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_expression(tokens: &[Token]) -> (Option<Spanned<Expr>>, Vec<CompileError>) {
    Parser::new(tokens).parse_expression()
}
