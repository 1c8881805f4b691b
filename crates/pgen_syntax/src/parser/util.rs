/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “members”, “types” or “skip” (identifier and qualified-name parsing).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("Expected identifier")),
        }
    }

    /// Parse `a.b.c`.
    fn qualified_name(&mut self) -> Result<QualifiedName, CompileError> {
        let mut segments = vec![self.identifier()?];
        while self.check_punct(PunctuationId::Dot) && matches!(self.peek_next().kind, TokenKind::Ident(_)) {
            self.advance();
            segments.push(self.identifier()?);
        }
        Ok(QualifiedName::new(segments))
    }
}
