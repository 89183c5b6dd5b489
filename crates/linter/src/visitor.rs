//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.

use common::ConfigError;
use oxc_ast::ast::{
    BinaryExpression, BlockStatement, ClassBody, FunctionBody, LogicalExpression, Program,
    Statement, StaticBlock, SwitchCase, TSIntersectionType, TSModuleBlock, TSUnionType,
};
use oxc_ast_visit::{walk, Visit};
use serde::Deserialize;
use tracing::debug;

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::rules::{IndentBinaryOps, IndentCache, NoExtraSemi};
use crate::utils::ChainNode;

/// Configuration for which rules are enabled
///
/// Deserializes from a JSON object keyed by rule name. Missing rules keep
/// their default. `indent-binary-ops` takes an indent width, `"tab"`, or
/// `null` to turn it off; `no-extra-semi` takes a boolean:
///
/// ```json
/// { "indent-binary-ops": "tab", "no-extra-semi": false }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RulesConfig {
    pub indent_binary_ops: Option<IndentBinaryOps>,
    pub no_extra_semi: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            indent_binary_ops: Some(IndentBinaryOps::new()),
            no_extra_semi: true,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            indent_binary_ops: None,
            no_extra_semi: false,
        }
    }

    /// Parse a JSON rules object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::InvalidRules(err.to_string()))
    }

    pub fn with_indent_binary_ops(mut self, rule: IndentBinaryOps) -> Self {
        self.indent_binary_ops = Some(rule);
        self
    }

    pub fn with_no_extra_semi(mut self, enabled: bool) -> Self {
        self.no_extra_semi = enabled;
        self
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    indent_cache: IndentCache,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self {
            ctx,
            config,
            indent_cache: IndentCache::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        self.visit_program(program);
        let result = LintResult {
            diagnostics: self.diagnostics,
        };
        debug!(
            diagnostics = result.diagnostics.len(),
            fixable = result.fixable_count(),
            settled_lines = self.indent_cache.len(),
            "lint run finished"
        );
        result
    }

    /// Check one operator of a chain
    fn check_chain(&mut self, node: ChainNode<'_, 'a>) {
        // indent-binary-ops
        if let Some(rule) = &self.config.indent_binary_ops {
            if let Some(diagnostic) = rule.check(node, &self.ctx, &mut self.indent_cache) {
                self.diagnostics.push(diagnostic);
            }
        }
    }

    /// Check a list of statements with all applicable rules
    fn check_statements(&mut self, statements: &[Statement<'a>]) {
        // no-extra-semi
        if self.config.no_extra_semi {
            let rule = NoExtraSemi::new();
            self.diagnostics.extend(rule.check_statements(statements, &self.ctx));
        }
    }

    /// Check a class body with all applicable rules
    fn check_class_body(&mut self, body: &ClassBody<'a>) {
        // no-extra-semi
        if self.config.no_extra_semi {
            let rule = NoExtraSemi::new();
            self.diagnostics.extend(rule.check_class_body(body, &self.ctx));
        }
    }
}

// Chains are checked between their left and right operands, so checks run in
// source order of the operators and each anchor line is settled before the
// line that continues it.
impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_program(&mut self, program: &Program<'a>) {
        self.check_statements(&program.body);
        walk::walk_program(self, program);
    }

    fn visit_block_statement(&mut self, block: &BlockStatement<'a>) {
        self.check_statements(&block.body);
        walk::walk_block_statement(self, block);
    }

    fn visit_function_body(&mut self, body: &FunctionBody<'a>) {
        self.check_statements(&body.statements);
        walk::walk_function_body(self, body);
    }

    fn visit_switch_case(&mut self, case: &SwitchCase<'a>) {
        self.check_statements(&case.consequent);
        walk::walk_switch_case(self, case);
    }

    fn visit_static_block(&mut self, block: &StaticBlock<'a>) {
        self.check_statements(&block.body);
        walk::walk_static_block(self, block);
    }

    fn visit_ts_module_block(&mut self, block: &TSModuleBlock<'a>) {
        self.check_statements(&block.body);
        walk::walk_ts_module_block(self, block);
    }

    fn visit_class_body(&mut self, body: &ClassBody<'a>) {
        self.check_class_body(body);
        walk::walk_class_body(self, body);
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression<'a>) {
        self.visit_expression(&expr.left);
        self.check_chain(ChainNode::Binary(expr));
        self.visit_expression(&expr.right);
    }

    fn visit_logical_expression(&mut self, expr: &LogicalExpression<'a>) {
        self.visit_expression(&expr.left);
        self.check_chain(ChainNode::Logical(expr));
        self.visit_expression(&expr.right);
    }

    fn visit_ts_union_type(&mut self, union: &TSUnionType<'a>) {
        for (idx, member) in union.types.iter().enumerate() {
            if idx > 0 {
                self.check_chain(ChainNode::UnionMember { union, member });
            }
            self.visit_ts_type(member);
        }
    }

    fn visit_ts_intersection_type(&mut self, intersection: &TSIntersectionType<'a>) {
        for (idx, member) in intersection.types.iter().enumerate() {
            if idx > 0 {
                self.check_chain(ChainNode::IntersectionMember { intersection, member });
            }
            self.visit_ts_type(member);
        }
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fixable()).count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    lint_with_config(source_text, program, RulesConfig::default())
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, program);
    LintRunner::new(ctx, config).run(program)
}
