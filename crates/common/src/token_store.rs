//! Offset-ordered token lookups
//!
//! Tokens never overlap, so both their starts and their ends are sorted and
//! every lookup is a `partition_point` over one of the two lists.

use oxc_span::Span;

use crate::lexer::{tokenize, tokenize_around, Lexed};
use crate::token::Token;

/// Code tokens and comments of one file
#[derive(Debug, Default)]
pub struct TokenStore<'a> {
    tokens: Vec<Token<'a>>,
    comments: Vec<Token<'a>>,
}

impl<'a> TokenStore<'a> {
    /// Tokenize `text`
    pub fn new(text: &'a str) -> Self {
        let Lexed { tokens, comments } = tokenize(text);
        Self { tokens, comments }
    }

    /// Tokenize `text` around tokens the parser has already delimited.
    ///
    /// `known` must be sorted by start and must not overlap.
    pub fn with_known_tokens(text: &'a str, known: &[Token<'a>]) -> Self {
        let Lexed { tokens, comments } = tokenize_around(text, known);
        Self { tokens, comments }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn comments(&self) -> &[Token<'a>] {
        &self.comments
    }

    /// Last code token ending at or before `offset`
    pub fn token_before(&self, offset: u32) -> Option<&Token<'a>> {
        let idx = self.tokens.partition_point(|t| t.span.end <= offset);
        idx.checked_sub(1).map(|idx| &self.tokens[idx])
    }

    /// First code token starting at or after `offset`
    pub fn token_after(&self, offset: u32) -> Option<&Token<'a>> {
        let idx = self.tokens.partition_point(|t| t.span.start < offset);
        self.tokens.get(idx)
    }

    /// First code token inside `span`
    pub fn first_token(&self, span: Span) -> Option<&Token<'a>> {
        self.token_after(span.start).filter(|t| t.span.start < span.end)
    }

    /// Code tokens starting inside `span`
    pub fn tokens_in(&self, span: Span) -> &[Token<'a>] {
        Self::starting_in(&self.tokens, span)
    }

    /// Comments starting inside `span`
    pub fn comments_in(&self, span: Span) -> &[Token<'a>] {
        Self::starting_in(&self.comments, span)
    }

    /// First token or comment starting inside `span`, whichever comes first
    pub fn first_token_or_comment(&self, span: Span) -> Option<&Token<'a>> {
        let token = self.first_token(span);
        let comment = self.comments_in(span).first();
        match (token, comment) {
            (Some(token), Some(comment)) => {
                Some(if comment.span.start < token.span.start { comment } else { token })
            }
            (token, comment) => token.or(comment),
        }
    }

    /// Check if `offset` falls strictly inside a token or comment
    pub fn is_inside_token(&self, offset: u32) -> bool {
        let inside = |list: &[Token<'a>]| {
            let idx = list.partition_point(|t| t.span.end <= offset);
            list.get(idx).is_some_and(|t| t.span.start < offset)
        };
        inside(&self.tokens) || inside(&self.comments)
    }

    fn starting_in<'s>(list: &'s [Token<'a>], span: Span) -> &'s [Token<'a>] {
        let from = list.partition_point(|t| t.span.start < span.start);
        let to = list.partition_point(|t| t.span.start < span.end);
        &list[from..to.max(from)]
    }
}
