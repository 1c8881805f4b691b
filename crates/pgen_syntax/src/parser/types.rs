/// Type-expression parsing methods.
///
/// This chunk parses syntactic types, including:
/// - Primitive types (`int`, `void`)
/// - Qualified and generic class types (`java.util.Map<K, List<V>>`, `Outer<T>.Inner`)
/// - Wildcards (`?`, `? extends T`, `? super T`)
/// - Array dimensions (`int[][]`)
/// - Type parameter lists (`<T extends Comparable<T> & Serializable>`)
///
/// ## Notes
/// - Type-use annotations are accepted anywhere Java allows them and dropped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<TypeExpr, CompileError> {
        self.annotations()?;
        let base = if let Some(primitive) = self.peek().keyword_id().and_then(primitive_type) {
            self.advance();
            TypeExpr::Primitive(primitive)
        } else {
            TypeExpr::Class(self.class_type()?)
        };
        let dims = self.dims();
        Ok(base.with_dims(dims))
    }

    fn class_type(&mut self) -> Result<ClassType, CompileError> {
        let mut segments = Vec::new();
        loop {
            self.annotations()?;
            let name = self.identifier()?;
            let args = if self.check_op(OperatorId::Lt) {
                Some(self.type_args()?)
            } else {
                None
            };
            segments.push(TypeSegment { name, args });

            let continues = self.check_punct(PunctuationId::Dot)
                && (matches!(self.peek_next().kind, TokenKind::Ident(_))
                    || self.peek_next().kind.is_punctuation(PunctuationId::At));
            if !continues {
                break;
            }
            self.advance();
        }
        Ok(ClassType { segments })
    }

    fn class_type_spanned(&mut self) -> Result<Spanned<ClassType>, CompileError> {
        let start = self.current_span().start;
        let ty = self.class_type()?;
        Ok(Spanned::new(ty, Span::new(start, self.prev_end())))
    }

    fn class_type_list(&mut self) -> Result<Vec<Spanned<ClassType>>, CompileError> {
        let mut types = vec![self.class_type_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            types.push(self.class_type_spanned()?);
        }
        Ok(types)
    }

    /// Parse `<A, B>`; `<>` (diamond) yields an empty list.
    fn type_args(&mut self) -> Result<Vec<TypeArg>, CompileError> {
        self.expect_op(OperatorId::Lt, "Expected '<'")?;
        let mut args = Vec::new();
        if self.match_op(OperatorId::Gt) {
            return Ok(args);
        }
        loop {
            args.push(self.type_arg()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_op(OperatorId::Gt, "Expected '>' to close type arguments")?;
        Ok(args)
    }

    fn type_arg(&mut self) -> Result<TypeArg, CompileError> {
        self.annotations()?;
        if !self.match_punct(PunctuationId::Question) {
            return Ok(TypeArg::Type(self.type_expr()?));
        }
        let bound = if self.match_keyword(KeywordId::Extends) {
            Some(WildcardBound::Extends(Box::new(self.type_expr()?)))
        } else if self.match_keyword(KeywordId::Super) {
            Some(WildcardBound::Super(Box::new(self.type_expr()?)))
        } else {
            None
        };
        Ok(TypeArg::Wildcard(bound))
    }

    /// Parse `<T, U extends Bound & Other>` if present.
    fn type_params_opt(&mut self) -> Result<Vec<TypeParam>, CompileError> {
        if !self.check_op(OperatorId::Lt) {
            return Ok(Vec::new());
        }
        self.advance();
        let mut params = Vec::new();
        loop {
            self.annotations()?;
            let name = self.identifier()?;
            let mut bounds = Vec::new();
            if self.match_keyword(KeywordId::Extends) {
                bounds.push(self.class_type()?);
                while self.match_op(OperatorId::Amp) {
                    bounds.push(self.class_type()?);
                }
            }
            params.push(TypeParam { name, bounds });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_op(OperatorId::Gt, "Expected '>' to close type parameters")?;
        Ok(params)
    }

    /// Count `[]` pairs (each optionally preceded by type annotations).
    fn dims(&mut self) -> usize {
        let mut dims = 0;
        loop {
            let save = self.pos;
            if self.annotations().is_err() {
                self.pos = save;
                break;
            }
            if self.check_punct(PunctuationId::LBracket) && self.peek_next().kind.is_punctuation(PunctuationId::RBracket) {
                self.advance();
                self.advance();
                dims += 1;
            } else {
                self.pos = save;
                break;
            }
        }
        dims
    }
}

/// Map a primitive type keyword to its AST form.
fn primitive_type(id: KeywordId) -> Option<PrimitiveType> {
    Some(match id {
        KeywordId::Boolean => PrimitiveType::Boolean,
        KeywordId::Byte => PrimitiveType::Byte,
        KeywordId::Char => PrimitiveType::Char,
        KeywordId::Short => PrimitiveType::Short,
        KeywordId::Int => PrimitiveType::Int,
        KeywordId::Long => PrimitiveType::Long,
        KeywordId::Float => PrimitiveType::Float,
        KeywordId::Double => PrimitiveType::Double,
        KeywordId::Void => PrimitiveType::Void,
        _ => return None,
    })
}
