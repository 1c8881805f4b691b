//! String, text block and character literal scanning for the Java lexer.
//!
//! Escapes are validated only as far as needed to find the closing delimiter; bodies are stored as written.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a string literal or text block. The opening `"` was already consumed.
    pub(super) fn scan_string(&mut self, start: usize) {
        if self.peek() == Some('"') && self.peek_next() == Some('"') {
            self.advance();
            self.advance();
            self.scan_text_block(start);
            return;
        }

        let body_start = self.current_pos;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(
                        CompileError::new("Unterminated string literal".to_string(), Span::new(start, self.current_pos))
                            .with_hint("Java string literals cannot span lines; use a text block (\"\"\") instead"),
                    );
                    return;
                }
                Some('"') => break,
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let body = self.source[body_start..self.current_pos].to_string();
        self.advance(); // closing quote
        self.add_token(TokenKind::String(body), start);
    }

    /// Scan a text block body. The opening `"""` was already consumed.
    fn scan_text_block(&mut self, start: usize) {
        // Only whitespace may follow the opening delimiter on its line.
        while matches!(self.peek(), Some(' ' | '\t' | '\x0C')) {
            self.advance();
        }
        match self.peek() {
            Some('\n') => {
                self.advance();
            }
            Some('\r') => {
                self.advance();
                if self.peek() == Some('\n') {
                    self.advance();
                }
            }
            _ => {
                self.errors.push(CompileError::new(
                    "Text block opening delimiter must be followed by a line terminator".to_string(),
                    Span::new(start, self.current_pos),
                ));
                return;
            }
        }

        let body_start = self.current_pos;
        loop {
            match self.peek() {
                None => {
                    self.errors.push(CompileError::new(
                        "Unterminated text block".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('"') if self.source[self.current_pos..].starts_with("\"\"\"") => break,
                Some(_) => {
                    self.advance();
                }
            }
        }
        let body = self.source[body_start..self.current_pos].to_string();
        for _ in 0..3 {
            self.advance();
        }
        self.add_token(TokenKind::TextBlock(body), start);
    }

    /// Scan a character literal. The opening `'` was already consumed.
    pub(super) fn scan_char(&mut self, start: usize) {
        let body_start = self.current_pos;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(CompileError::new(
                        "Unterminated character literal".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some('\'') => break,
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let body = self.source[body_start..self.current_pos].to_string();
        self.advance();
        if body.is_empty() {
            self.errors.push(CompileError::new(
                "Empty character literal".to_string(),
                Span::new(start, self.current_pos),
            ));
            return;
        }
        self.add_token(TokenKind::Char(body), start);
    }
}
