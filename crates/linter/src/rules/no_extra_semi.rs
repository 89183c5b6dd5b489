//! no-extra-semi
//!
//! Disallow unnecessary semicolons: empty statements in statement lists and
//! stray `;` between class members.

use oxc_ast::ast::{ClassBody, ClassElement, Statement};
use oxc_span::{GetSpan, Span};

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::fix_tracker::FixTracker;
use crate::{RuleCategory, RuleMeta};

/// no-extra-semi rule
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtraSemi;

impl RuleMeta for NoExtraSemi {
    const NAME: &'static str = "no-extra-semi";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl NoExtraSemi {
    pub fn new() -> Self {
        Self
    }

    /// Check the statements of one statement list.
    ///
    /// Empty statements used as the body of `if`, loops, labels or `with`
    /// never reach here, so they stay allowed.
    pub fn check_statements(
        &self,
        statements: &[Statement<'_>],
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        statements
            .iter()
            .filter_map(|stmt| match stmt {
                Statement::EmptyStatement(empty) => Some(self.report(empty.span, ctx)),
                _ => None,
            })
            .collect()
    }

    /// Check for `;` tokens between class members
    pub fn check_class_body(
        &self,
        body: &ClassBody<'_>,
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        let tokens = ctx.tokens();
        let mut diagnostics = Vec::new();

        let Some(open_brace) = tokens.first_token(body.span) else {
            return diagnostics;
        };
        let mut gaps = vec![open_brace.end()];
        for element in &body.body {
            let span = element.span();
            let mut after = span.end;
            // A field's own terminator may sit outside its span
            if is_field_like(element) && !ctx.span_text(span).ends_with(';') {
                if let Some(semi) = tokens.token_after(after).filter(|t| t.is_punctuator(";")) {
                    after = semi.end();
                }
            }
            gaps.push(after);
        }

        for from in gaps {
            let mut next = tokens.token_after(from);
            while let Some(semi) =
                next.filter(|t| t.is_punctuator(";") && t.end() <= body.span.end)
            {
                diagnostics.push(self.report(semi.span, ctx));
                next = tokens.token_after(semi.end());
            }
        }

        diagnostics
    }

    fn report(&self, span: Span, ctx: &LintContext<'_>) -> Diagnostic {
        let fix = FixTracker::new(ctx)
            .retain_surrounding_tokens(span)
            .remove(span)
            .with_message("Remove semicolon");
        Diagnostic::warning(Self::NAME, span, "Unnecessary semicolon.").with_fix(fix)
    }
}

fn is_field_like(element: &ClassElement<'_>) -> bool {
    matches!(
        element,
        ClassElement::PropertyDefinition(_)
            | ClassElement::AccessorProperty(_)
            | ClassElement::TSIndexSignature(_)
    )
}

#[cfg(test)]
mod tests {
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    use super::*;

    fn check_program(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let ctx = LintContext::new(source, &ret.program);
        NoExtraSemi::new().check_statements(&ret.program.body, &ctx)
    }

    fn check_class(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let ctx = LintContext::new(source, &ret.program);
        let Some(Statement::ClassDeclaration(class)) = ret.program.body.first() else {
            panic!("expected a class declaration");
        };
        NoExtraSemi::new().check_class_body(&class.body, &ctx)
    }

    #[test]
    fn test_empty_statement_in_program() {
        let diagnostics = check_program("a();;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unnecessary semicolon.");
        assert_eq!(diagnostics[0].span(), Span::new(4, 5));
    }

    #[test]
    fn test_loop_body_is_allowed() {
        assert!(check_program("for (;;);\nwhile (a);\nif (a);").is_empty());
    }

    #[test]
    fn test_fix_retains_neighbours() {
        let diagnostics = check_program("a();; b();");
        let fix = &diagnostics[0].fixes[0];
        assert_eq!(fix.span(), Span::new(3, 7));
        assert_eq!(fix.replacement, "; b");
    }

    #[test]
    fn test_class_body() {
        let diagnostics = check_class("class A { ; foo() {}; bar = 1; baz = 2;; }");
        let spans: Vec<_> = diagnostics.iter().map(Diagnostic::span).collect();
        assert_eq!(spans, vec![Span::new(10, 11), Span::new(20, 21), Span::new(39, 40)]);
    }

    #[test]
    fn test_class_field_terminators_are_allowed() {
        let source = "class A {\n  a = 1;\n  b: string;\n  [key: string]: unknown;\n}";
        assert!(check_class(source).is_empty());
    }
}
