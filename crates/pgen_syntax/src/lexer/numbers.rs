//! Number scanning for the Java lexer
//!
//! Handles decimal, hex, octal and binary integers, floating-point literals, digit separators and type suffixes.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first character (a digit, or `.` followed by a digit) was already consumed.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        let mut is_float = first == '.';

        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            let digits = self.eat_digits(|c| c.is_ascii_hexdigit());
            // Hex floats: 0x1.8p3
            if self.peek() == Some('.') {
                self.advance();
                self.eat_digits(|c| c.is_ascii_hexdigit());
                is_float = true;
            }
            if matches!(self.peek(), Some('p' | 'P')) {
                is_float = true;
                self.advance();
                self.eat_exponent_digits();
            }
            if digits == 0 && !is_float {
                self.number_error("Hexadecimal literal needs at least one digit", start);
                return;
            }
        } else if first == '0' && matches!(self.peek(), Some('b' | 'B')) {
            self.advance();
            if self.eat_digits(|c| c == '0' || c == '1') == 0 {
                self.number_error("Binary literal needs at least one digit", start);
                return;
            }
        } else {
            self.eat_digits(|c| c.is_ascii_digit());

            // A dot after decimal digits always belongs to the literal (`1.`, `1.f`, `1.5`).
            if !is_float && self.peek() == Some('.') {
                is_float = true;
                self.advance();
            }
            if is_float {
                self.eat_digits(|c| c.is_ascii_digit());
            }

            if matches!(self.peek(), Some('e' | 'E')) {
                is_float = true;
                self.advance();
                self.eat_exponent_digits();
            }
        }

        match self.peek() {
            Some('l' | 'L') if !is_float => {
                self.advance();
            }
            Some('f' | 'F' | 'd' | 'D') => {
                self.advance();
                is_float = true;
            }
            _ => {}
        }

        if self.peek().is_some_and(is_ident_like) {
            self.number_error("Invalid character in numeric literal", start);
            return;
        }

        let text = self.source[start..self.current_pos].to_string();
        if text.ends_with('_') {
            self.number_error("Numeric literal cannot end with '_'", start);
            return;
        }
        let kind = if is_float {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        };
        self.add_token(kind, start);
    }

    /// Consume digits matching `accept` plus `_` separators, returning how many real digits were seen.
    fn eat_digits(&mut self, accept: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if accept(c) {
                count += 1;
            } else if c != '_' {
                break;
            }
            self.advance();
        }
        count
    }

    fn eat_exponent_digits(&mut self) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        self.eat_digits(|c| c.is_ascii_digit());
    }

    fn number_error(&mut self, message: &str, start: usize) {
        // Swallow the rest of the malformed literal so it produces one error.
        while self.peek().is_some_and(|c| is_ident_like(c) || c == '.') {
            self.advance();
        }
        self.errors.push(CompileError::new(
            message.to_string(),
            Span::new(start, self.current_pos),
        ));
    }
}

fn is_ident_like(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
