//! Stylistic lint rules
//!
//! This crate provides formatting-oriented lint rules ported from ESLint
//! Stylistic, running on the oxc AST plus a token stream of the same source.
//! Rules can be used:
//! 1. Through `LintRunner`, which runs every enabled rule in one AST pass
//! 2. Standalone, calling a rule's `check` with a `LintContext`
//!
//! Every fix a rule produces is a plain `Fix` value. Fixes built with
//! `FixTracker` may claim more text than they change so that a host applying
//! non-overlapping fixes per pass never splits edits that belong together.

pub mod rules;
pub mod utils;
pub mod visitor;
mod ast_index;
mod context;
mod diagnostic;
mod fix_tracker;

pub use ast_index::AstIndex;
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use fix_tracker::FixTracker;
pub use rules::*;
pub use utils::ChainNode;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for stylistic rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that only concern layout and punctuation
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!("https://eslint.style/rules/{}", Self::NAME)
    }
}
