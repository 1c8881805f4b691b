//! Token predicates used by the parser's lookahead.

use crate::lexer::{Token, TokenKind};
use pgen_core::lang::keywords::KeywordId;
use pgen_core::lang::operators::OperatorId;
use pgen_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Reserved word id of a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Punctuation id of a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Identifier with this exact spelling. Contextual keywords (`record`, `sealed`, `permits`) lex as identifiers
    /// and are matched here.
    pub fn is_ident(&self, spelling: &str) -> bool {
        matches!(self, TokenKind::Ident(name) if name == spelling)
    }
}

impl Token {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}
