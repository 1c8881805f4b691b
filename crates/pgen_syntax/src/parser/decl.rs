/// Declaration parsing methods.
///
/// This chunk is responsible for the compilation-unit header (package, imports), type declarations (classes,
/// interfaces, enums, records, annotation types) and modifier lists.
///
/// ## Notes
/// - Most entrypoints in this file return [`Spanned<T>`] to preserve source locations.
/// - Error recovery is handled by `Parser::synchronize()` (in `helpers.rs`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Compilation unit header
    // ========================================================================

    /// Parse `[annotations] package a.b.c;` if present.
    ///
    /// Annotations are only consumed when a package declaration follows; otherwise they belong to the first type.
    fn package_decl(&mut self) -> Result<Option<Spanned<QualifiedName>>, CompileError> {
        let save = self.pos;
        self.annotations()?;
        if !self.check_keyword(KeywordId::Package) {
            self.pos = save;
            return Ok(None);
        }
        let start = self.current_span().start;
        self.advance();
        let name = self.qualified_name()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after package name")?;
        Ok(Some(Spanned::new(name, Span::new(start, self.prev_end()))))
    }

    /// Parse `import [static] a.b.C;` / `import [static] a.b.*;`.
    fn import_decl(&mut self) -> Result<Spanned<ImportDecl>, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::Import, "Expected 'import'")?;
        let is_static = self.match_keyword(KeywordId::Static);

        let mut segments = vec![self.identifier()?];
        let mut is_wildcard = false;
        while self.match_punct(PunctuationId::Dot) {
            if self.match_op(OperatorId::Star) {
                is_wildcard = true;
                break;
            }
            segments.push(self.identifier()?);
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after import")?;

        Ok(Spanned::new(
            ImportDecl {
                path: QualifiedName::new(segments),
                is_static,
                is_wildcard,
            },
            Span::new(start, self.prev_end()),
        ))
    }

    /// `[open] module a.b { ... }` from a `module-info.java`.
    fn at_module_decl(&self) -> bool {
        (self.check_ident("module") && matches!(self.peek_next().kind, TokenKind::Ident(_)))
            || (self.check_ident("open") && self.peek_next().kind.is_ident("module"))
    }

    /// Module declarations describe no types; skip the whole declaration.
    fn skip_module_decl(&mut self) -> Result<(), CompileError> {
        if self.check_ident("open") {
            self.advance();
        }
        self.advance(); // `module`
        self.qualified_name()?;
        self.skip_block()?;
        Ok(())
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    fn type_declaration_spanned(&mut self) -> Result<Spanned<TypeDecl>, CompileError> {
        let start = self.current_span().start;
        let modifiers = self.modifiers()?;
        let decl = self.type_declaration(modifiers)?;
        Ok(Spanned::new(decl, Span::new(start, self.prev_end())))
    }

    /// Return `true` if the current position starts a type declaration keyword (after modifiers).
    fn at_type_decl_keyword(&self) -> bool {
        self.check_keyword(KeywordId::Class)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Enum)
            || (self.check_punct(PunctuationId::At) && self.peek_next().kind.is_keyword(KeywordId::Interface))
            || self.at_record_decl()
    }

    /// `record Name(` or `record Name<`; anything else is a type or variable named `record`.
    fn at_record_decl(&self) -> bool {
        self.check_ident("record")
            && matches!(self.peek_next().kind, TokenKind::Ident(_))
            && (self.peek_at(2).kind.is_punctuation(PunctuationId::LParen)
                || self.peek_at(2).kind.is_operator(OperatorId::Lt))
    }

    /// Parse a type declaration whose modifiers were already consumed.
    fn type_declaration(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        if self.match_keyword(KeywordId::Class) {
            self.class_decl(modifiers)
        } else if self.match_keyword(KeywordId::Interface) {
            self.interface_decl(modifiers)
        } else if self.match_keyword(KeywordId::Enum) {
            self.enum_decl(modifiers)
        } else if self.check_punct(PunctuationId::At) && self.peek_next().kind.is_keyword(KeywordId::Interface) {
            self.advance();
            self.advance();
            self.annotation_type_decl(modifiers)
        } else if self.at_record_decl() {
            self.advance();
            self.record_decl(modifiers)
        } else {
            Err(self
                .unexpected("Expected class, interface, enum or record declaration")
                .with_hint("pgen only reads type declarations at the top level of a file"))
        }
    }

    fn class_decl(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        let mut decl = TypeDecl::new(TypeDeclKind::Class, modifiers, name);
        decl.type_params = self.type_params_opt()?;
        if self.match_keyword(KeywordId::Extends) {
            decl.extends.push(self.class_type_spanned()?);
        }
        if self.match_keyword(KeywordId::Implements) {
            decl.implements = self.class_type_list()?;
        }
        decl.permits = self.permits_clause()?;
        decl.members = self.class_body(&decl.name)?;
        Ok(decl)
    }

    fn interface_decl(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        let mut decl = TypeDecl::new(TypeDeclKind::Interface, modifiers, name);
        decl.type_params = self.type_params_opt()?;
        if self.match_keyword(KeywordId::Extends) {
            decl.extends = self.class_type_list()?;
        }
        decl.permits = self.permits_clause()?;
        decl.members = self.class_body(&decl.name)?;
        Ok(decl)
    }

    fn enum_decl(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        let mut decl = TypeDecl::new(TypeDeclKind::Enum, modifiers, name);
        if self.match_keyword(KeywordId::Implements) {
            decl.implements = self.class_type_list()?;
        }
        let (constants, members) = self.enum_body(&decl.name)?;
        decl.enum_constants = constants;
        decl.members = members;
        Ok(decl)
    }

    fn record_decl(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        let mut decl = TypeDecl::new(TypeDeclKind::Record, modifiers, name);
        decl.type_params = self.type_params_opt()?;
        decl.record_components = self.formal_params()?;
        if self.match_keyword(KeywordId::Implements) {
            decl.implements = self.class_type_list()?;
        }
        decl.members = self.class_body(&decl.name)?;
        Ok(decl)
    }

    fn annotation_type_decl(&mut self, modifiers: Modifiers) -> Result<TypeDecl, CompileError> {
        let name = self.identifier()?;
        let mut decl = TypeDecl::new(TypeDeclKind::Annotation, modifiers, name);
        decl.members = self.class_body(&decl.name)?;
        Ok(decl)
    }

    /// `permits A, B` (contextual keyword).
    fn permits_clause(&mut self) -> Result<Vec<Spanned<ClassType>>, CompileError> {
        if self.check_ident("permits") {
            self.advance();
            self.class_type_list()
        } else {
            Ok(Vec::new())
        }
    }

    // ========================================================================
    // Bodies
    // ========================================================================

    /// Parse `{ members }`.
    fn class_body(&mut self, type_name: &str) -> Result<Vec<Spanned<Member>>, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{' to open type body")?;
        let members = self.members_until_close(type_name);
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close type body")?;
        Ok(members)
    }

    /// Parse members up to (not including) the closing `}`, recovering from broken members.
    fn members_until_close(&mut self, type_name: &str) -> Vec<Spanned<Member>> {
        let mut members = Vec::new();
        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            match self.member(type_name) {
                Ok(member) => members.push(member),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize_member();
                }
            }
        }
        members
    }

    /// Parse `{ CONSTANT, CONSTANT(args) { body }; members }`.
    fn enum_body(&mut self, type_name: &str) -> Result<(Vec<Spanned<EnumConstant>>, Vec<Spanned<Member>>), CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{' to open enum body")?;

        let mut constants = Vec::new();
        while !self.check_punct(PunctuationId::Semicolon) && !self.check_punct(PunctuationId::RBrace) {
            constants.push(self.enum_constant(type_name)?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        let members = if self.match_punct(PunctuationId::Semicolon) {
            self.members_until_close(type_name)
        } else {
            Vec::new()
        };
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close enum body")?;
        Ok((constants, members))
    }

    fn enum_constant(&mut self, type_name: &str) -> Result<Spanned<EnumConstant>, CompileError> {
        let start = self.current_span().start;
        self.annotations()?;
        let name = self.identifier()?;
        let (arguments, argument_refs) = if self.check_punct(PunctuationId::LParen) {
            self.skip_arguments()?
        } else {
            (Vec::new(), BodyRefs::default())
        };
        let body = if self.check_punct(PunctuationId::LBrace) {
            Some(self.class_body(type_name)?)
        } else {
            None
        };
        Ok(Spanned::new(
            EnumConstant {
                name,
                arguments,
                argument_refs,
                body,
            },
            Span::new(start, self.prev_end()),
        ))
    }

    // ========================================================================
    // Modifiers and annotations
    // ========================================================================

    /// Parse a run of modifiers and annotations in any order.
    fn modifiers(&mut self) -> Result<Modifiers, CompileError> {
        let mut mods = Modifiers::default();
        loop {
            if self.check_punct(PunctuationId::At) && !self.peek_next().kind.is_keyword(KeywordId::Interface) {
                mods.annotations.push(self.annotation()?);
            } else if let Some(id) = self.peek().keyword_id().and_then(modifiers::from_keyword) {
                self.advance();
                mods.flags.push(id);
            } else if let Some(id) = self.contextual_modifier() {
                mods.flags.push(id);
            } else {
                return Ok(mods);
            }
        }
    }

    /// Consume `sealed` or `non-sealed` when used as a modifier.
    fn contextual_modifier(&mut self) -> Option<ModifierId> {
        let starts_decl = |kind: &TokenKind| {
            matches!(kind, TokenKind::Keyword(_)) || kind.is_punctuation(PunctuationId::At) || kind.is_ident("sealed")
        };

        if self.check_ident("sealed") && (starts_decl(&self.peek_next().kind) || self.peek_next().kind.is_ident("non")) {
            self.advance();
            return modifiers::from_contextual("sealed");
        }

        // `non-sealed` lexes as three adjacent tokens.
        let (non, dash, sealed) = (self.peek(), self.peek_next(), self.peek_at(2));
        if non.kind.is_ident("non")
            && dash.kind.is_operator(OperatorId::Minus)
            && sealed.kind.is_ident("sealed")
            && non.span.end == dash.span.start
            && dash.span.end == sealed.span.start
        {
            self.advance();
            self.advance();
            self.advance();
            return modifiers::from_contextual("non-sealed");
        }
        None
    }

    /// Parse `@Name` or `@Name(arguments)`; arguments are skipped.
    fn annotation(&mut self) -> Result<Spanned<Annotation>, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::At, "Expected '@'")?;
        let name = self.qualified_name()?;
        if self.check_punct(PunctuationId::LParen) {
            self.skip_parens()?;
        }
        Ok(Spanned::new(Annotation { name }, Span::new(start, self.prev_end())))
    }

    /// Consume annotations only (package declarations, enum constants, type uses).
    fn annotations(&mut self) -> Result<Vec<Spanned<Annotation>>, CompileError> {
        let mut annotations = Vec::new();
        while self.check_punct(PunctuationId::At) && !self.peek_next().kind.is_keyword(KeywordId::Interface) {
            annotations.push(self.annotation()?);
        }
        Ok(annotations)
    }
}
