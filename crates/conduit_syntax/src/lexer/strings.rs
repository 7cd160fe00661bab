//! String scanning for the Conduit lexer
//!
//! Strings are double-quoted and may span lines. Recognised escapes are `\"`, `\\`, `\n` and `\t`;
//! any other escape is kept verbatim (backslash included).

use super::Lexer;
use super::tokens::TokenKind;

/// Result of processing an escape sequence
pub enum EscapeResult {
    /// Successfully parsed escape character
    Char(char),
    /// Unknown escape - preserve as-is (backslash + char)
    Unknown(char),
    /// End of input during escape
    Eof,
}

impl<'a> Lexer<'a> {
    /// Process an escape sequence. Called after consuming the backslash.
    fn scan_escape(&mut self) -> EscapeResult {
        match self.advance() {
            Some('n') => EscapeResult::Char('\n'),
            Some('t') => EscapeResult::Char('\t'),
            Some('\\') => EscapeResult::Char('\\'),
            Some('"') => EscapeResult::Char('"'),
            Some(c) => EscapeResult::Unknown(c),
            None => EscapeResult::Eof,
        }
    }

    pub(super) fn scan_string(&mut self, start: usize) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None => {
                    // Reported at the opening quote; everything to end of input is the lexeme.
                    self.add_error("Unterminated string".to_string(), start);
                    return;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::Unknown(c) => {
                            value.push('\\');
                            value.push(c);
                        }
                        EscapeResult::Eof => {
                            self.add_error("Unterminated string".to_string(), start);
                            return;
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.add_token(TokenKind::String(value), start);
    }
}
