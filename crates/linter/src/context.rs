//! Lint context for rule execution

use common::{SourceBuffer, Token, TokenKind, TokenStore};
use oxc_ast::ast::Program;
use oxc_span::Span;

use crate::ast_index::AstIndex;

/// Everything rules know about the file being checked.
///
/// Built fresh for every file check and dropped when it ends; nothing in it
/// outlives the check.
pub struct LintContext<'a> {
    /// Source text and line index
    source: SourceBuffer<'a>,
    /// Tokens and comments
    tokens: TokenStore<'a>,
    /// Function spans, type alias names and JSX literals
    index: AstIndex,
    /// Span of the whole program
    program_span: Span,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, program: &Program<'a>) -> Self {
        let index = AstIndex::build(program);
        let known = parsed_tokens(source_text, program, &index);
        Self {
            source: SourceBuffer::new(source_text),
            tokens: TokenStore::with_known_tokens(source_text, &known),
            index,
            program_span: program.span,
        }
    }

    pub fn source(&self) -> &SourceBuffer<'a> {
        &self.source
    }

    pub fn tokens(&self) -> &TokenStore<'a> {
        &self.tokens
    }

    pub fn program_span(&self) -> Span {
        self.program_span
    }

    pub fn index(&self) -> &AstIndex {
        &self.index
    }

    /// Line (1-based) on which `offset` lies
    pub fn line_of(&self, offset: u32) -> u32 {
        self.source.line_of(offset)
    }

    /// Span of `line` without its terminator
    pub fn line_span(&self, line: u32) -> Span {
        Span::new(self.source.line_start(line), self.source.line_end(line))
    }

    /// First token or comment that starts on `line`
    pub fn first_token_or_comment_of_line(&self, line: u32) -> Option<&Token<'a>> {
        self.tokens.first_token_or_comment(self.line_span(line))
    }

    /// Last code token that starts on `line`
    pub fn last_token_of_line(&self, line: u32) -> Option<&Token<'a>> {
        self.tokens.tokens_in(self.line_span(line)).last()
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source.slice(span)
    }
}

/// Comments and JSX literals, delimited as the parser saw them
fn parsed_tokens<'a>(
    source_text: &'a str,
    program: &Program<'a>,
    index: &AstIndex,
) -> Vec<Token<'a>> {
    let comments = program.comments.iter().map(|comment| {
        let kind = if comment.is_line() {
            TokenKind::LineComment
        } else {
            TokenKind::BlockComment
        };
        (kind, comment.span)
    });

    let mut known: Vec<Token<'a>> = comments
        .chain(index.jsx_literals().iter().copied())
        .map(|(kind, span)| Token::new(kind, span.source_text(source_text), span))
        .collect();
    known.sort_by_key(|token| token.span.start);
    known
}

#[cfg(test)]
mod tests {
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    use super::*;

    #[test]
    fn test_jsx_text_is_one_token() {
        let allocator = Allocator::default();
        let source = "x = <a href=\"//cdn\">see https://x `</a> + // real\ny;";
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let ctx = LintContext::new(source, &ret.program);

        let kinds: Vec<_> = ctx.tokens().tokens().iter().map(|t| (t.kind, t.value)).collect();
        assert!(kinds.contains(&(TokenKind::JsxText, "see https://x `")));
        assert!(kinds.contains(&(TokenKind::String, "\"//cdn\"")));
        assert_eq!(ctx.last_token_of_line(1).map(|t| t.value), Some("+"));
        assert_eq!(ctx.first_token_or_comment_of_line(2).map(|t| t.value), Some("y"));

        let comments: Vec<_> = ctx.tokens().comments().iter().map(|t| t.value).collect();
        assert_eq!(comments, vec!["// real"]);
    }
}
