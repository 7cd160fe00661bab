//! Number scanning for the Conduit lexer
//!
//! Handles integer and floating-point literals. `_` digit separators are dropped from the value
//! but kept in the lexeme.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        let mut value = String::from(first);
        let mut is_float = false;

        // Integer part
        self.scan_digits(&mut value);

        // Decimal part: only when a digit follows, so `3.14.15` stops after `3.14`.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            value.push('.');
            self.advance();
            self.scan_digits(&mut value);

            // Exponent part
            if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
                value.push('e');
                self.advance();
                if let Some(sign @ ('+' | '-')) = self.peek() {
                    value.push(sign);
                    self.advance();
                }
                self.scan_digits(&mut value);
            }
        }

        if is_float {
            match value.parse::<f64>() {
                Ok(f) => self.add_token(TokenKind::Float(f), start),
                Err(_) => self.add_error(format!("Invalid float literal: {}", value), start),
            }
        } else {
            match value.parse::<i64>() {
                Ok(i) => self.add_token(TokenKind::Int(i), start),
                Err(_) => self.add_error(format!("Invalid integer literal: {}", value), start),
            }
        }
    }

    /// Consume digits and `_` separators, appending the digits to `value`.
    fn scan_digits(&mut self, value: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                if c != '_' {
                    value.push(c);
                }
                self.advance();
            } else {
                break;
            }
        }
    }

    /// With the cursor on `e`/`E`: is this a real exponent (`e5`, `e-5`) rather than an identifier?
    fn exponent_follows(&self) -> bool {
        match self.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }
}
