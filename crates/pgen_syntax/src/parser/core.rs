/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass. It recovers from errors at member boundaries inside a type body and at
///   type-declaration boundaries at the top level, so one run reports every broken declaration.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `pgen_syntax::lexer` (ends with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`CompilationUnit`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails.
    pub fn parse(mut self) -> Result<CompilationUnit, Vec<CompileError>> {
        let mut unit = CompilationUnit::default();
        if self.tokens.is_empty() {
            return Ok(unit);
        }

        match self.package_decl() {
            Ok(package) => unit.package = package,
            Err(e) => {
                self.errors.push(e);
                self.synchronize();
            }
        }

        loop {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            if !self.check_keyword(KeywordId::Import) {
                break;
            }
            match self.import_decl() {
                Ok(import) => unit.imports.push(import),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        while !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            if self.at_module_decl() {
                if let Err(e) = self.skip_module_decl() {
                    self.errors.push(e);
                    self.synchronize();
                }
                continue;
            }
            match self.type_declaration_spanned() {
                Ok(decl) => unit.types.push(decl),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(unit)
        } else {
            Err(self.errors)
        }
    }
}
