/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error recovery (`synchronize`, `synchronize_member`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `n` positions ahead, clamped to the trailing `Eof`.
    fn peek_at(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Consume the current token and return it. At `Eof` the position does not move.
    fn advance(&mut self) -> &Token {
        let consumed = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[consumed]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// Return `true` if the current token is an identifier spelled `spelling` (contextual keywords).
    fn check_ident(&self, spelling: &str) -> bool {
        self.peek().kind.is_ident(spelling)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Build a syntax error for the current token.
    fn unexpected(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, describe(&self.peek().kind)),
            self.peek().span,
        )
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// End offset of the most recently consumed token.
    fn prev_end(&self) -> usize {
        self.tokens[self.pos.saturating_sub(1)].span.end
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Skip to the start of the next top-level declaration.
    ///
    /// Brace-delimited blocks are skipped whole so members of a broken type are not mistaken for new types.
    fn synchronize(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;
        while !self.is_at_end() {
            if depth == 0 && self.pos > start && self.at_top_level_start() {
                return;
            }
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                depth = depth.saturating_sub(1);
            }
            self.advance();
        }
    }

    fn at_top_level_start(&self) -> bool {
        self.check_keyword(KeywordId::Class)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Enum)
            || self.check_keyword(KeywordId::Public)
            || self.check_keyword(KeywordId::Abstract)
            || self.check_keyword(KeywordId::Final)
            || self.check_keyword(KeywordId::Import)
            || self.check_punct(PunctuationId::At)
    }

    /// Skip the rest of a broken member: up to and including its `;` or its balanced `{ ... }` block.
    ///
    /// Stops in front of the `}` that closes the enclosing type body.
    fn synchronize_member(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                if depth == 0 {
                    return;
                }
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return;
                }
            } else if depth == 0 && self.check_punct(PunctuationId::Semicolon) {
                self.advance();
                return;
            }
            self.advance();
        }
    }
}

/// Human-readable description of a token for error messages.
fn describe(kind: &TokenKind) -> String {
    use pgen_core::lang::{keywords, operators, punctuation};

    match kind {
        TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
        TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
        TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::Int(text) | TokenKind::Float(text) => format!("number {text}"),
        TokenKind::Char(_) => "character literal".to_string(),
        TokenKind::String(_) | TokenKind::TextBlock(_) => "string literal".to_string(),
        TokenKind::Eof => "end of file".to_string(),
    }
}
