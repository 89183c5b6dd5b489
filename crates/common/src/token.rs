//! Token types produced by the lexer

use oxc_span::Span;

/// Lexical category of a token, named after the ESTree token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    PrivateIdentifier,
    Punctuator,
    Numeric,
    String,
    Template,
    RegularExpression,
    Boolean,
    Null,
    LineComment,
    BlockComment,
    Hashbang,
    JsxText,
    /// A character the lexer could not classify
    Unknown,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment | Self::Hashbang)
    }
}

/// A lexical unit borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: &'a str, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    /// Check if this is the punctuator `value`
    pub fn is_punctuator(&self, value: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.value == value
    }

    /// Check if this is a reserved keyword.
    ///
    /// `treat_as_keyword` lets callers classify a contextual word (such as the
    /// `type` of a type alias) as a keyword without rewriting the token.
    pub fn is_keyword(&self, treat_as_keyword: bool) -> bool {
        self.kind == TokenKind::Keyword || (treat_as_keyword && self.kind == TokenKind::Identifier)
    }

    pub fn start(&self) -> u32 {
        self.span.start
    }

    pub fn end(&self) -> u32 {
        self.span.end
    }
}
