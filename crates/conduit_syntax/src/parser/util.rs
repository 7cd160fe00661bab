/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types” (e.g. identifier parsing and string literal handling).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Span from `start` through the most recently consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    fn identifier(&mut self, what: &str) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(errors::expected(what, self.peek())),
        }
    }

    /// Parse a field-like name: an identifier or a primitive type spelling (`email: email!`).
    fn member_name(&mut self, what: &str) -> Result<Spanned<Ident>, CompileError> {
        let span = self.current_span();
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::PrimitiveType(id) => conduit_core::lang::types::as_str(*id).to_string(),
            _ => return Err(errors::expected(what, self.peek())),
        };
        self.advance();
        Ok(Spanned::new(name, span))
    }

    /// Parse any name-like token: identifier, keyword, or primitive type spelling.
    ///
    /// Used for property keys, member access, hook events, and operation names.
    fn any_name(&mut self, what: &str) -> Result<Spanned<Ident>, CompileError> {
        let span = self.current_span();
        let name = match self.peek().kind.name_spelling() {
            Some(name) => name.to_string(),
            None => return Err(errors::expected(what, self.peek())),
        };
        self.advance();
        Ok(Spanned::new(name, span))
    }

    fn string_literal(&mut self, what: &str) -> Result<String, CompileError> {
        match &self.peek().kind {
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(errors::expected(what, self.peek())),
        }
    }

    /// Consume a string literal preceding `resource` and return its contents.
    fn doc_string(&mut self) -> Option<String> {
        let doc = match &self.peek().kind {
            TokenKind::String(s) if self.peek_next().kind.is_keyword(KeywordId::Resource) => s.clone(),
            _ => return None,
        };
        self.advance();
        Some(doc)
    }

    /// Parse a bracketed list of names: `[create, read, update]`.
    ///
    /// A trailing comma is allowed.
    fn name_list(&mut self, what: &str) -> Result<Vec<Spanned<Ident>>, CompileError> {
        self.expect_punct(PunctuationId::LBracket, &format!("Expected '[' to start {}", what))?;
        let mut names = Vec::new();
        while !self.check_punct(PunctuationId::RBracket) && !self.is_at_end() {
            names.push(self.any_name("a name")?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBracket, &format!("Expected ']' to close {}", what))?;
        Ok(names)
    }

    /// Parse the entries of a `{ key: value, ... }` block whose keys are limited to `keys`.
    ///
    /// `entry` is called after a known `key:` has been consumed and must consume the value. A
    /// failed entry is reported and parsing resumes at the next entry; commas between entries are
    /// optional. An unknown key is reported as a `block` property and only that token is skipped;
    /// the tokens after it are passed over without further reports until the next `name:` entry
    /// or the closing `}`. Returns the span from `{` through `}`.
    fn property_block<F>(&mut self, what: &str, block: &str, keys: &[&str], mut entry: F) -> Result<Span, CompileError>
    where
        F: FnMut(&mut Self, &Spanned<Ident>) -> Result<(), CompileError>,
    {
        let open = self
            .expect_punct(PunctuationId::LBrace, &format!("Expected '{{' to start {}", what))?
            .span;

        let mut skipping = false;
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if skipping && !self.at_property_key() {
                if self.check_punct(PunctuationId::LBrace) {
                    self.skip_balanced_braces();
                } else {
                    self.advance();
                }
                continue;
            }
            skipping = false;

            let key_token = self.peek().clone();
            let unknown = key_token.kind.name_spelling().filter(|name| !keys.contains(name));
            if let Some(name) = unknown {
                self.errors.push(errors::unknown_property(name, block, &key_token, keys));
                self.advance();
                skipping = true;
                continue;
            }

            let start = self.pos;
            if let Err(e) = self.property_entry(&mut entry) {
                self.errors.push(e);
                if self.pos == start {
                    self.advance();
                }
            }
            self.match_punct(PunctuationId::Comma);
        }

        self.expect_punct(PunctuationId::RBrace, &format!("Expected '}}' to close {}", what))?;
        Ok(self.span_from(open))
    }

    /// Is the parser at `name:`, the start of a block entry?
    fn at_property_key(&self) -> bool {
        self.peek().kind.name_spelling().is_some() && self.peek_next().kind.is_punctuation(PunctuationId::Colon)
    }

    fn property_entry<F>(&mut self, entry: &mut F) -> Result<(), CompileError>
    where
        F: FnMut(&mut Self, &Spanned<Ident>) -> Result<(), CompileError>,
    {
        let key = self.any_name("a property name")?;
        self.expect_punct(PunctuationId::Colon, &format!("Expected ':' after '{}'", key.node))?;
        entry(self, &key)
    }
}
