/// Member parsing methods.
///
/// This chunk parses the members of a type body: fields, methods, constructors, initializer blocks and nested type
/// declarations. Bodies and initializers are handed to the skipping helpers in `skip.rs`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Members
    // ========================================================================

    /// Parse one member of the type named `type_name`.
    fn member(&mut self, type_name: &str) -> Result<Spanned<Member>, CompileError> {
        let start = self.current_span().start;

        // Initializer blocks
        if self.check_punct(PunctuationId::LBrace) {
            let body = self.skip_block()?;
            return Ok(self.spanned_member(Member::Initializer(InitializerBlock { is_static: false, body }), start));
        }
        if self.check_keyword(KeywordId::Static) && self.peek_next().kind.is_punctuation(PunctuationId::LBrace) {
            self.advance();
            let body = self.skip_block()?;
            return Ok(self.spanned_member(Member::Initializer(InitializerBlock { is_static: true, body }), start));
        }

        let modifiers = self.modifiers()?;

        if self.at_type_decl_keyword() {
            let decl = self.type_declaration(modifiers)?;
            return Ok(self.spanned_member(Member::Type(decl), start));
        }

        let type_params = self.type_params_opt()?;

        // Constructors: `Name(` (or `Name {` for a record's compact form).
        if let TokenKind::Ident(name) = &self.peek().kind {
            let next = &self.peek_next().kind;
            if next.is_punctuation(PunctuationId::LParen) {
                let name = name.clone();
                self.advance();
                let ctor = self.constructor_rest(modifiers, type_params, name)?;
                return Ok(self.spanned_member(Member::Constructor(ctor), start));
            }
            if name == type_name && next.is_punctuation(PunctuationId::LBrace) {
                let name = name.clone();
                self.advance();
                let body = self.skip_block()?;
                let ctor = ConstructorDecl {
                    modifiers,
                    type_params,
                    name,
                    params: Vec::new(),
                    throws: Vec::new(),
                    body,
                    is_compact: true,
                };
                return Ok(self.spanned_member(Member::Constructor(ctor), start));
            }
        }

        let ty = self.type_expr()?;
        let name = self.identifier()?;

        if self.check_punct(PunctuationId::LParen) {
            let method = self.method_rest(modifiers, type_params, ty, name)?;
            return Ok(self.spanned_member(Member::Method(method), start));
        }

        if !type_params.is_empty() {
            return Err(self.unexpected("Expected '(' after generic method name"));
        }
        let field = self.field_rest(modifiers, ty, name)?;
        Ok(self.spanned_member(Member::Field(field), start))
    }

    fn spanned_member(&self, member: Member, start: usize) -> Spanned<Member> {
        Spanned::new(member, Span::new(start, self.prev_end()))
    }

    /// Parse the rest of a method after its name: parameters, trailing dims, throws, then body or `;`.
    fn method_rest(
        &mut self,
        modifiers: Modifiers,
        type_params: Vec<TypeParam>,
        return_type: TypeExpr,
        name: Ident,
    ) -> Result<MethodDecl, CompileError> {
        let params = self.formal_params()?;
        // Legacy `int values()[]` form.
        let return_type = return_type.with_dims(self.dims());
        let throws = self.throws_clause()?;

        let body = if self.check_punct(PunctuationId::LBrace) {
            Some(self.skip_block()?)
        } else {
            // Annotation type elements may declare a default value.
            if self.match_keyword(KeywordId::Default) {
                self.skip_initializer();
            }
            self.expect_punct(PunctuationId::Semicolon, "Expected method body or ';'")?;
            None
        };

        Ok(MethodDecl {
            modifiers,
            type_params,
            return_type,
            name,
            params,
            throws,
            body,
        })
    }

    fn constructor_rest(
        &mut self,
        modifiers: Modifiers,
        type_params: Vec<TypeParam>,
        name: Ident,
    ) -> Result<ConstructorDecl, CompileError> {
        let params = self.formal_params()?;
        let throws = self.throws_clause()?;
        let body = self.skip_block()?;
        Ok(ConstructorDecl {
            modifiers,
            type_params,
            name,
            params,
            throws,
            body,
            is_compact: false,
        })
    }

    /// Parse the declarators of a field whose type and first name were already consumed.
    fn field_rest(&mut self, modifiers: Modifiers, ty: TypeExpr, first: Ident) -> Result<FieldDecl, CompileError> {
        let mut declarators = Vec::new();
        let mut name = first;
        loop {
            let extra_dims = self.dims();
            let initializer = if self.match_op(OperatorId::Eq) {
                Some(self.skip_initializer())
            } else {
                None
            };
            declarators.push(VarDeclarator {
                name,
                extra_dims,
                initializer,
            });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
            name = self.identifier()?;
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after field declaration")?;
        Ok(FieldDecl {
            modifiers,
            ty,
            declarators,
        })
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Parse `( params )`. Receiver parameters (`Foo this`) are dropped.
    fn formal_params(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut params = Vec::new();
        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }
        loop {
            if let Some(param) = self.formal_param()? {
                params.push(param);
            }
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;
        Ok(params)
    }

    fn formal_param(&mut self) -> Result<Option<Param>, CompileError> {
        let modifiers = self.modifiers()?;
        let ty = self.type_expr()?;

        self.annotations()?;
        let is_varargs = self.match_punct(PunctuationId::Ellipsis);

        // Receiver parameter: `Foo this` or `Foo Outer.this`.
        if self.match_keyword(KeywordId::This) {
            return Ok(None);
        }
        if matches!(self.peek().kind, TokenKind::Ident(_))
            && self.peek_next().kind.is_punctuation(PunctuationId::Dot)
            && self.peek_at(2).kind.is_keyword(KeywordId::This)
        {
            self.advance();
            self.advance();
            self.advance();
            return Ok(None);
        }

        let name = self.identifier()?;
        // Legacy `String args[]` form.
        let ty = ty.with_dims(self.dims());
        Ok(Some(Param {
            modifiers,
            ty,
            is_varargs,
            name,
        }))
    }

    fn throws_clause(&mut self) -> Result<Vec<ClassType>, CompileError> {
        let mut throws = Vec::new();
        if self.match_keyword(KeywordId::Throws) {
            loop {
                throws.push(self.class_type()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        Ok(throws)
    }
}
