//! Fix builder that can claim more text than it changes.
//!
//! A host applies at most one of two overlapping fixes per pass. When a fix
//! must move in lockstep with its surroundings (removing a token whose
//! neighbours another rule is also rewriting), the tracker widens the fix to
//! a retained range and copies the retained bytes through unchanged. The
//! edit means the same thing, but no other fix can touch those bytes in the
//! same pass.

use oxc_span::Span;

use crate::context::LintContext;
use crate::diagnostic::Fix;

/// Builds fixes whose range always covers the retained range, if any
pub struct FixTracker<'c, 'a> {
    ctx: &'c LintContext<'a>,
    retained: Option<Span>,
}

impl<'c, 'a> FixTracker<'c, 'a> {
    pub fn new(ctx: &'c LintContext<'a>) -> Self {
        Self { ctx, retained: None }
    }

    /// Retain `span`. Replaces any previously retained range.
    pub fn retain_range(mut self, span: Span) -> Self {
        self.retained = Some(span);
        self
    }

    /// Retain the nearest function around `span`, or the whole program
    pub fn retain_enclosing_function(self, span: Span) -> Self {
        let range = self
            .ctx
            .index()
            .enclosing_function(span)
            .unwrap_or_else(|| self.ctx.program_span());
        self.retain_range(range)
    }

    /// Retain one token on each side of `span`
    pub fn retain_surrounding_tokens(self, span: Span) -> Self {
        let tokens = self.ctx.tokens();
        let start = tokens.token_before(span.start).map_or(span.start, |t| t.span.start);
        let end = tokens.token_after(span.end).map_or(span.end, |t| t.span.end);
        self.retain_range(Span::new(start, end))
    }

    pub fn retained_range(&self) -> Option<Span> {
        self.retained
    }

    /// Replace `span` with `text`, widened to cover the retained range
    pub fn replace_text_range(&self, span: Span, text: &str) -> Fix {
        let actual = match self.retained {
            Some(retained) => Span::new(retained.start.min(span.start), retained.end.max(span.end)),
            None => span,
        };

        let source = self.ctx.source();
        let mut replacement = String::with_capacity(text.len() + actual.size() as usize);
        replacement.push_str(source.slice(Span::new(actual.start, span.start)));
        replacement.push_str(text);
        replacement.push_str(source.slice(Span::new(span.end, actual.end)));

        Fix::new(actual, replacement)
    }

    /// Remove `span`
    pub fn remove(&self, span: Span) -> Fix {
        self.replace_text_range(span, "")
    }
}
