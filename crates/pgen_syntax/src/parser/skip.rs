/// Balanced-delimiter skipping.
///
/// Method bodies, initializers, annotation arguments and enum constant arguments are not parsed. These helpers
/// step over them by counting delimiters. On the way they record every `new T(...)` / `new T[...]` and every class
/// type named in a declaration, cast, `catch` clause, `instanceof` test, class literal or explicit type argument
/// list, so the generator can report the types a body uses as dependencies.
impl<'a> Parser<'a> {
    // ========================================================================
    // Skipping
    // ========================================================================

    /// Skip a `{ ... }` block, returning the types it uses.
    fn skip_block(&mut self) -> Result<BodyRefs, CompileError> {
        let open = self.current_span();
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;
        let mut refs = BodyRefs::default();
        let mut depth = 1usize;
        loop {
            if self.is_at_end() {
                return Err(CompileError::syntax("Unclosed '{'".to_string(), open).with_note("the block starts here"));
            }
            if self.scan_reference(&mut refs) {
                continue;
            }
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return Ok(refs);
                }
            }
            self.advance();
        }
    }

    /// Skip an initializer expression up to (not including) the `,` or `;` that ends it.
    fn skip_initializer(&mut self) -> BodyRefs {
        let mut refs = BodyRefs::default();
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.scan_reference(&mut refs) {
                continue;
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    if depth == 0 {
                        return refs;
                    }
                    depth -= 1;
                }
                Some(PunctuationId::Comma | PunctuationId::Semicolon) if depth == 0 => return refs,
                _ => {}
            }
            self.advance();
        }
        refs
    }

    /// Skip `( arg, arg )`, returning one span per top-level argument.
    fn skip_arguments(&mut self) -> Result<(Vec<Span>, BodyRefs), CompileError> {
        let open = self.current_span();
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut spans = Vec::new();
        let mut refs = BodyRefs::default();
        if self.match_punct(PunctuationId::RParen) {
            return Ok((spans, refs));
        }

        let mut depth = 0usize;
        let mut arg_start = self.current_span().start;
        loop {
            if self.is_at_end() {
                return Err(CompileError::syntax("Unclosed '('".to_string(), open));
            }
            if self.scan_reference(&mut refs) {
                continue;
            }
            match self.peek().punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RParen) if depth == 0 => {
                    spans.push(Span::new(arg_start, self.prev_end()));
                    self.advance();
                    return Ok((spans, refs));
                }
                Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    depth = depth.saturating_sub(1);
                }
                Some(PunctuationId::Comma) if depth == 0 => {
                    spans.push(Span::new(arg_start, self.prev_end()));
                    self.advance();
                    arg_start = self.current_span().start;
                    continue;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Skip a balanced `( ... )` group.
    fn skip_parens(&mut self) -> Result<(), CompileError> {
        let open = self.current_span();
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut depth = 1usize;
        while depth > 0 {
            if self.is_at_end() {
                return Err(CompileError::syntax("Unclosed '('".to_string(), open));
            }
            if self.check_punct(PunctuationId::LParen) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RParen) {
                depth -= 1;
            }
            self.advance();
        }
        Ok(())
    }

    // ========================================================================
    // Type references inside skipped code
    // ========================================================================

    /// Record a type reference starting at the current token.
    ///
    /// Returns `true` if tokens were consumed. Whatever is consumed is delimiter-balanced, so the caller's depth
    /// counting stays correct. On `false` the position is unchanged.
    fn scan_reference(&mut self, refs: &mut BodyRefs) -> bool {
        if self.match_keyword(KeywordId::New) {
            self.record_new(refs);
            return true;
        }
        if self.match_keyword(KeywordId::Instanceof) {
            self.record_instanceof(refs);
            return true;
        }
        if self.check_keyword(KeywordId::Catch) {
            self.record_catch(refs);
            return true;
        }
        if self.check_punct(PunctuationId::Dot) && self.peek_next().kind.is_operator(OperatorId::Lt) {
            self.advance();
            self.record_explicit_type_args(refs);
            return true;
        }
        if self.check_punct(PunctuationId::LParen) {
            return self.record_cast(refs);
        }
        if matches!(self.peek().kind, TokenKind::Ident(_)) {
            return self.record_declared_type(refs);
        }
        false
    }

    /// Called right after a `new` keyword: record the instantiated class type, if any.
    ///
    /// Primitive arrays (`new int[3]`) and anything that does not parse as a class type followed by `(`, `[` or `{`
    /// are ignored and the position is restored.
    fn record_new(&mut self, refs: &mut BodyRefs) {
        let save = self.pos;
        let Ok(ty) = self.class_type() else {
            self.pos = save;
            return;
        };
        let instantiates = self.check_punct(PunctuationId::LParen)
            || self.check_punct(PunctuationId::LBracket)
            || self.check_punct(PunctuationId::LBrace);
        if instantiates {
            refs.created.push(ty);
        } else {
            self.pos = save;
        }
    }

    /// Called right after `instanceof`: `x instanceof final Foo f`, `x instanceof Point(int a, int b)`.
    fn record_instanceof(&mut self, refs: &mut BodyRefs) {
        let save = self.pos;
        self.match_keyword(KeywordId::Final);
        match self.class_type() {
            Ok(ty) => {
                self.dims();
                refs.referenced.push(ty);
            }
            Err(_) => self.pos = save,
        }
    }

    /// At `catch`: record every alternative of `catch (A | B e)`. Only the keyword is consumed so the
    /// parenthesis is still counted by the caller.
    fn record_catch(&mut self, refs: &mut BodyRefs) {
        self.advance();
        let resume = self.pos;
        if self.match_punct(PunctuationId::LParen) {
            self.match_keyword(KeywordId::Final);
            let mut caught = Vec::new();
            while self.annotations().is_ok() {
                let Ok(ty) = self.class_type() else {
                    break;
                };
                caught.push(ty);
                if !self.match_op(OperatorId::Pipe) {
                    break;
                }
            }
            if matches!(self.peek().kind, TokenKind::Ident(_)) {
                refs.referenced.extend(caught);
            }
        }
        self.pos = resume;
    }

    /// Called after the `.` of `Collections.<String, Integer>emptyMap()`; consumes the `<...>` group.
    fn record_explicit_type_args(&mut self, refs: &mut BodyRefs) {
        let save = self.pos;
        let Ok(args) = self.type_args() else {
            self.pos = save;
            return;
        };
        for arg in &args {
            if let TypeArg::Type(TypeExpr::Class(ty)) = arg {
                refs.referenced.push(ty.clone());
            }
        }
    }

    /// At `(`: record the target of a class-type cast such as `(Widget) source` or `(List<String>[]) raw`.
    ///
    /// Only parentheses in operand position count, so `if (ready) run();` and `call(arg)` are left alone.
    fn record_cast(&mut self, refs: &mut BodyRefs) -> bool {
        let tokens = self.tokens;
        let operand_position = match self.pos.checked_sub(1).map(|i| &tokens[i].kind) {
            Some(TokenKind::Operator(_)) => true,
            Some(TokenKind::Punctuation(p)) => matches!(
                p,
                PunctuationId::LParen
                    | PunctuationId::LBracket
                    | PunctuationId::LBrace
                    | PunctuationId::Comma
                    | PunctuationId::Arrow
                    | PunctuationId::Question
                    | PunctuationId::Colon
            ),
            Some(TokenKind::Keyword(k)) => matches!(k, KeywordId::Return | KeywordId::Throw),
            _ => false,
        };
        if !operand_position {
            return false;
        }

        let save = self.pos;
        self.advance();
        if let Ok(ty) = self.class_type() {
            self.dims();
            if self.check_punct(PunctuationId::RParen) && starts_cast_operand(&self.peek_next().kind) {
                self.advance();
                refs.referenced.push(ty);
                return true;
            }
        }
        self.pos = save;
        false
    }

    /// At an identifier: record `Type name` declarations (locals, lambda and for-each variables, resources) and
    /// `Type.class` literals. The type is consumed; the declared name is left for the caller.
    fn record_declared_type(&mut self, refs: &mut BodyRefs) -> bool {
        let tokens = self.tokens;
        let continues_name = self.pos.checked_sub(1).is_some_and(|i| {
            let prev = &tokens[i].kind;
            prev.is_punctuation(PunctuationId::Dot) || prev.is_punctuation(PunctuationId::At)
        });
        if continues_name || NON_TYPE_IDENTS.iter().any(|s| self.check_ident(s)) {
            return false;
        }
        let next = &self.peek_next().kind;
        let may_be_type = matches!(next, TokenKind::Ident(_))
            || next.is_punctuation(PunctuationId::Dot)
            || next.is_punctuation(PunctuationId::LBracket)
            || next.is_operator(OperatorId::Lt);
        if !may_be_type {
            return false;
        }

        let save = self.pos;
        let Ok(ty) = self.class_type() else {
            self.pos = save;
            return false;
        };
        self.dims();
        let declares = matches!(self.peek().kind, TokenKind::Ident(_));
        let class_literal =
            self.check_punct(PunctuationId::Dot) && self.peek_next().kind.is_keyword(KeywordId::Class);
        if declares || class_literal {
            refs.referenced.push(ty);
            true
        } else {
            self.pos = save;
            false
        }
    }
}

/// Identifiers that can precede another identifier in a body without naming a type.
const NON_TYPE_IDENTS: &[&str] = &["var", "yield", "record"];

/// Can this token start the operand of a cast?
fn starts_cast_operand(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::Int(_)
        | TokenKind::Float(_)
        | TokenKind::Char(_)
        | TokenKind::String(_)
        | TokenKind::TextBlock(_) => true,
        TokenKind::Keyword(k) => matches!(
            k,
            KeywordId::This | KeywordId::Super | KeywordId::New | KeywordId::True | KeywordId::False | KeywordId::Null
        ),
        TokenKind::Punctuation(p) => *p == PunctuationId::LParen,
        TokenKind::Operator(op) => matches!(op, OperatorId::Bang | OperatorId::Tilde),
        TokenKind::Eof => false,
    }
}
