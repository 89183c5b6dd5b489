//! End-to-end lint and fix tests
//!
//! These tests run the whole pipeline: parse, lint, apply fixes, re-lint.

use insta::assert_snapshot;
use stylistic_oxc::{
    fix, lint, IndentBinaryOps, IndentUnit, LintError, RulesConfig, SourceType,
};

fn fix_ts(source: &str) -> String {
    fix(source, SourceType::ts(), RulesConfig::default())
        .expect("should fix")
        .code
}

// ============================================================================
// Fixing
// ============================================================================

#[test]
fn test_fix_nested_condition() {
    let source = "\
if (
  a && (
    a.b ||
      a.c
  ) &&
    a.d
) {}
";
    let result = fix(source, SourceType::mjs(), RulesConfig::default()).unwrap();
    assert_eq!(result.passes, 1);
    assert!(result.remaining.is_empty());
    assert_eq!(
        result.code,
        "\
if (
  a && (
    a.b ||
    a.c
  ) &&
  a.d
) {}
"
    );
}

#[test]
fn test_fix_is_idempotent() {
    let source = "\
function check(value: unknown) {
  const ok = value !== null &&
        typeof value === 'object' &&
            'id' in value;;
  return ok ||
      fallback();
}
type Shape = Circle |
      Square;
";
    let once = fix_ts(source);
    let twice = fix_ts(&once);
    assert_eq!(once, twice);
    assert!(lint(&once, SourceType::ts(), RulesConfig::default())
        .unwrap()
        .diagnostics
        .is_empty());
}

#[test]
fn test_fix_keeps_correct_code_untouched() {
    let source = "\
const total = price +
  tax;
if (
  ready &&
  loaded
) {
  start();
}
";
    let result = fix(source, SourceType::mjs(), RulesConfig::default()).unwrap();
    assert_eq!(result.passes, 0);
    assert_eq!(result.code, source);
}

#[test]
fn test_fix_semicolon_next_to_indent_fix() {
    let source = "x = y;;\nconst z = a +\n      b;\n";
    let result = fix(source, SourceType::mjs(), RulesConfig::default()).unwrap();
    assert_eq!(result.passes, 1);
    assert_eq!(result.code, "x = y;\nconst z = a +\n  b;\n");
}

#[test]
fn test_fix_with_tabs() {
    let rule = IndentBinaryOps::with_indent(IndentUnit::Tab);
    let config = RulesConfig::none().with_indent_binary_ops(rule);
    let source = "function f() {\n\treturn a &&\n  b;\n}\n";
    let result = fix(source, SourceType::mjs(), config).unwrap();
    assert_eq!(result.code, "function f() {\n\treturn a &&\n\t\tb;\n}\n");
}

#[test]
fn test_fix_leaves_unfixable_report() {
    let source = "const x = a + /* note\n   more */ b;\n";
    let result = fix(source, SourceType::mjs(), RulesConfig::default()).unwrap();
    assert_eq!(result.passes, 0);
    assert_eq!(result.code, source);
    assert_eq!(result.remaining.len(), 1);
    assert!(!result.remaining[0].is_fixable());
}

// ============================================================================
// Errors and configuration
// ============================================================================

#[test]
fn test_invalid_source_is_an_error() {
    let err = lint("const = ;", SourceType::mjs(), RulesConfig::default()).unwrap_err();
    assert!(matches!(err, LintError::Parse { .. }));
}

#[test]
fn test_rules_from_json() {
    let json = r#"{"indent-binary-ops": 4, "no-extra-semi": false}"#;
    let config = RulesConfig::from_json(json).unwrap();
    let result = lint("a;;\nconst x = a +\n  b;\n", SourceType::mjs(), config).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    assert_snapshot!(
        result.diagnostics[0].message,
        @"Expected indentation of 4 spaces but found 2 spaces."
    );
}

#[test]
fn test_result_counts() {
    let result = lint(
        "a;;\nconst x = a + /* c\n */ b;\n",
        SourceType::mjs(),
        RulesConfig::default(),
    )
    .unwrap();
    assert_eq!(result.warning_count(), 2);
    assert_eq!(result.fixable_count(), 1);
    assert!(result.has_warnings());
}
