//! Syntax facts gathered once per file before rules run

use common::TokenKind;
use oxc_ast::ast::{
    ArrowFunctionExpression, Function, JSXAttribute, JSXAttributeValue, JSXText, Program,
    TSTypeAliasDeclaration,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashSet;

/// Function spans, type alias names and JSX literals of one program
#[derive(Debug, Default)]
pub struct AstIndex {
    /// Sorted by start, outer functions before the ones they contain
    functions: Vec<Span>,
    /// Start offsets of type alias names (`Foo` in `type Foo = ...`)
    type_alias_names: FxHashSet<u32>,
    /// JSX text and JSX attribute strings, in source order
    jsx_literals: Vec<(TokenKind, Span)>,
}

impl AstIndex {
    pub fn build(program: &Program<'_>) -> Self {
        let mut index = Self::default();
        index.visit_program(program);
        index
            .functions
            .sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        index
    }

    /// Nearest function containing `span`; a function contains itself
    pub fn enclosing_function(&self, span: Span) -> Option<Span> {
        let candidates = self.functions.partition_point(|f| f.start <= span.start);
        self.functions[..candidates]
            .iter()
            .rev()
            .find(|f| f.end >= span.end)
            .copied()
    }

    /// Check if a type alias name starts at `offset`
    pub fn is_type_alias_name(&self, offset: u32) -> bool {
        self.type_alias_names.contains(&offset)
    }

    /// Spans the lexer must not scan as JavaScript, with their token kind
    pub fn jsx_literals(&self) -> &[(TokenKind, Span)] {
        &self.jsx_literals
    }
}

impl<'a> Visit<'a> for AstIndex {
    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        self.functions.push(func.span);
        walk::walk_function(self, func, flags);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        self.functions.push(arrow.span);
        walk::walk_arrow_function_expression(self, arrow);
    }

    fn visit_jsx_text(&mut self, text: &JSXText<'a>) {
        if !text.span.is_empty() {
            self.jsx_literals.push((TokenKind::JsxText, text.span));
        }
    }

    fn visit_jsx_attribute(&mut self, attr: &JSXAttribute<'a>) {
        if let Some(JSXAttributeValue::StringLiteral(value)) = &attr.value {
            self.jsx_literals.push((TokenKind::String, value.span));
        }
        walk::walk_jsx_attribute(self, attr);
    }

    fn visit_ts_type_alias_declaration(&mut self, decl: &TSTypeAliasDeclaration<'a>) {
        self.type_alias_names.insert(decl.id.span.start);
        walk::walk_ts_type_alias_declaration(self, decl);
    }
}
