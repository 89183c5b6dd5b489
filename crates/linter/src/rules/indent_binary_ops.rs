//! indent-binary-ops
//!
//! Enforce consistent indentation for the continuation lines of binary and
//! logical expressions and of union and intersection types.

use common::{IndentUnit, SourceBuffer, Token, TokenKind};
use oxc_span::Span;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::ChainNode;
use crate::{RuleCategory, RuleMeta};

/// Keywords that read as operands rather than statement openers
const NON_INDENTING_KEYWORDS: &[&str] = &["typeof", "instanceof", "this"];

/// Line endings after which the continuation is nested one level deeper
const OPENING_PUNCTUATORS: &[&str] = &[":", "[", "(", "<", "="];

const LOGICAL_OPERATORS: &[&str] = &["||", "&&"];

/// Indentation this rule has already settled on, per line.
///
/// Lives for one file check. A later continuation anchored on a line that
/// was just fixed measures from the fixed value, not from the stale text.
#[derive(Debug, Default)]
pub struct IndentCache {
    lines: FxHashMap<u32, String>,
}

impl IndentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, line: u32) -> Option<&str> {
        self.lines.get(&line).map(String::as_str)
    }

    /// Settled indentation of `line`, falling back to the text on disk
    pub fn indent_of_line<'s>(&'s self, source: &SourceBuffer<'s>, line: u32) -> &'s str {
        self.get(line).unwrap_or_else(|| source.line_indent(line))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn record(&mut self, line: u32, indent: String) {
        self.lines.insert(line, indent);
    }
}

/// indent-binary-ops rule
///
/// Configured with the indentation unit alone, so `2`, `4` and `"tab"` are
/// all valid rule options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndentBinaryOps {
    pub indent: IndentUnit,
}

impl RuleMeta for IndentBinaryOps {
    const NAME: &'static str = "indent-binary-ops";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl IndentBinaryOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: IndentUnit) -> Self {
        Self { indent }
    }

    /// Check the line the right operand of `node` starts on.
    ///
    /// Nodes must be checked in source order of their operators so that the
    /// anchor line of every check is already settled in `cache`.
    pub fn check(
        &self,
        node: ChainNode<'_, '_>,
        ctx: &LintContext<'_>,
        cache: &mut IndentCache,
    ) -> Option<Diagnostic> {
        let node_span = node.span();
        let source = ctx.source();
        if ctx.line_of(node_span.start) == ctx.line_of(node_span.end) {
            return None;
        }

        let tokens = ctx.tokens();
        let mut token_right = tokens.first_token(node.right_span())?;
        let mut token_operator = tokens.token_before(token_right.start())?;
        while token_operator.is_punctuator("(") {
            token_right = token_operator;
            token_operator = tokens.token_before(token_right.start())?;
            if token_operator.start() <= node_span.start {
                trace!(operator = node.operator(), "operator not found before the right operand");
                return None;
            }
        }
        let token_left = tokens.token_before(token_operator.start())?;

        let left_line = ctx.line_of(token_left.start());
        let right_line = ctx.line_of(token_right.start());
        if left_line == right_line {
            return None;
        }

        let indent_left = cache.indent_of_line(source, left_line);
        let expected = if self.needs_extra_indent(node_span, left_line, indent_left, ctx) {
            format!("{indent_left}{}", self.indent.as_whitespace())
        } else {
            indent_left.to_string()
        };

        let actual = source.line_indent(right_line);
        if cache.get(right_line).unwrap_or(actual) == expected {
            return None;
        }

        let message = format!(
            "Expected indentation of {} but found {}.",
            self.indent.describe(&expected),
            self.indent.describe(actual),
        );
        let diagnostic = Diagnostic::warning(Self::NAME, token_right.span, message);

        if tokens.is_inside_token(source.line_start(right_line)) {
            trace!(line = right_line, "continuation line starts inside a token");
            return Some(diagnostic);
        }

        debug!(
            line = right_line,
            operator = node.operator(),
            expected = expected.as_str(),
            actual,
            "fixing continuation indentation"
        );
        let fix = Fix::new(source.line_indent_span(right_line), expected.clone())
            .with_message("Fix indentation");
        cache.record(right_line, expected);
        Some(diagnostic.with_fix(fix))
    }

    fn needs_extra_indent(
        &self,
        node_span: Span,
        left_line: u32,
        indent_left: &str,
        ctx: &LintContext<'_>,
    ) -> bool {
        if ctx
            .first_token_or_comment_of_line(left_line)
            .is_some_and(|first| opens_statement(first, ctx))
        {
            return true;
        }

        let Some(last) = ctx.last_token_of_line(left_line) else {
            return false;
        };
        if last.kind != TokenKind::Punctuator {
            return false;
        }
        if OPENING_PUNCTUATORS.contains(&last.value) {
            return true;
        }

        LOGICAL_OPERATORS.contains(&last.value)
            && ctx.line_of(node_span.start) == left_line
            && ctx.source().position(node_span.start).column as usize != indent_left.len()
    }
}

/// Check if `token` is a keyword that opens a statement, counting the `type`
/// of a type alias declaration
fn opens_statement(token: &Token<'_>, ctx: &LintContext<'_>) -> bool {
    let heads_type_alias = token.kind == TokenKind::Identifier
        && token.value == "type"
        && ctx
            .tokens()
            .token_after(token.end())
            .is_some_and(|name| ctx.index().is_type_alias_name(name.start()));

    token.is_keyword(heads_type_alias) && !NON_INDENTING_KEYWORDS.contains(&token.value)
}

#[cfg(test)]
mod tests {
    use oxc_allocator::Allocator;
    use oxc_ast::ast::{Expression, Statement, TSType};
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    use super::*;

    /// Check the top-level expression of a single expression statement
    fn check_expression(source: &str, rule: IndentBinaryOps) -> (Option<Diagnostic>, IndentCache) {
        let allocator = Allocator::default();
        let source_type = SourceType::mjs();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let ctx = LintContext::new(source, &ret.program);

        let Some(Statement::ExpressionStatement(stmt)) = ret.program.body.first() else {
            panic!("expected an expression statement");
        };
        let node = match &stmt.expression {
            Expression::BinaryExpression(expr) => ChainNode::Binary(expr),
            Expression::LogicalExpression(expr) => ChainNode::Logical(expr),
            _ => panic!("expected a binary or logical expression"),
        };

        let mut cache = IndentCache::new();
        let diagnostic = rule.check(node, &ctx, &mut cache);
        (diagnostic, cache)
    }

    #[test]
    fn test_single_line_is_skipped() {
        let (diagnostic, cache) = check_expression("a + b", IndentBinaryOps::new());
        assert!(diagnostic.is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_aligned_continuation_passes() {
        let (diagnostic, _) = check_expression("a +\nb", IndentBinaryOps::new());
        assert!(diagnostic.is_none());
    }

    #[test]
    fn test_misaligned_continuation() {
        let (diagnostic, cache) = check_expression("a +\n    b", IndentBinaryOps::new());
        let diagnostic = diagnostic.expect("should report");
        assert_eq!(diagnostic.rule, "indent-binary-ops");
        assert_eq!(diagnostic.message, "Expected indentation of 0 spaces but found 4 spaces.");
        assert_eq!(diagnostic.span(), Span::new(8, 9));
        let fix = Fix::new(Span::new(4, 8), "").with_message("Fix indentation");
        assert_eq!(diagnostic.fixes, vec![fix]);
        assert_eq!(cache.get(2), Some(""));
    }

    #[test]
    fn test_logical_operator_at_end_of_line_bumps() {
        let (diagnostic, _) = check_expression("/* c */ a &&\nb", IndentBinaryOps::new());
        let diagnostic = diagnostic.expect("should report");
        assert_eq!(diagnostic.message, "Expected indentation of 2 spaces but found 0 spaces.");
    }

    #[test]
    fn test_tab_unit() {
        let rule = IndentBinaryOps::with_indent(IndentUnit::Tab);
        let (diagnostic, cache) = check_expression("/* c */ a ||\n  b", rule);
        let diagnostic = diagnostic.expect("should report");
        assert_eq!(diagnostic.message, "Expected indentation of 1 tab but found 2 spaces.");
        assert_eq!(cache.get(2), Some("\t"));
    }

    #[test]
    fn test_comment_continuation_is_not_fixed() {
        let source = "a + /* one\n    two */ b";
        let (diagnostic, cache) = check_expression(source, IndentBinaryOps::new());
        let diagnostic = diagnostic.expect("should report");
        assert!(!diagnostic.is_fixable());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_operator_outside_node_is_not_reported() {
        let allocator = Allocator::default();
        let source = "type P = (Z);\ntype U = X |\n      Y;";
        let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
        assert!(ret.errors.is_empty(), "should parse");
        let ctx = LintContext::new(source, &ret.program);

        let [Statement::TSTypeAliasDeclaration(outside), Statement::TSTypeAliasDeclaration(alias)] =
            &ret.program.body[..]
        else {
            panic!("expected two type aliases");
        };
        let TSType::TSUnionType(union) = &alias.type_annotation else {
            panic!("expected a union");
        };
        let rule = IndentBinaryOps::new();
        let mut cache = IndentCache::new();

        // Walking back over `(` from a member that precedes the union leaves it
        let node = ChainNode::UnionMember { union, member: &outside.type_annotation };
        assert!(rule.check(node, &ctx, &mut cache).is_none());
        assert!(cache.is_empty());

        let node = ChainNode::UnionMember { union, member: &union.types[1] };
        assert!(rule.check(node, &ctx, &mut cache).is_some());
        assert_eq!(cache.get(3), Some("  "));
    }

    #[test]
    fn test_cached_indent_wins_over_text() {
        let allocator = Allocator::default();
        let source = "a +\n    b";
        let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
        let ctx = LintContext::new(source, &ret.program);

        let mut cache = IndentCache::new();
        assert_eq!(cache.indent_of_line(ctx.source(), 2), "    ");
        cache.record(2, String::new());
        assert_eq!(cache.indent_of_line(ctx.source(), 2), "");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_options() {
        let rule: IndentBinaryOps = serde_json::from_str("4").unwrap();
        assert_eq!(rule.indent, IndentUnit::Spaces(4));
        let rule: IndentBinaryOps = serde_json::from_str(r#""tab""#).unwrap();
        assert_eq!(rule.indent, IndentUnit::Tab);
        assert!(serde_json::from_str::<IndentBinaryOps>(r#""space""#).is_err());
    }
}
