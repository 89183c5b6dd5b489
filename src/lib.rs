//! Stylistic OXC
//!
//! Stylistic linting for JavaScript and TypeScript using OXC.
//! This is a port of rules from ESLint Stylistic, together with the fix
//! machinery they share.
//!
//! ## Usage
//!
//! ```rust
//! use stylistic_oxc::{fix, lint, RulesConfig, SourceType};
//!
//! let source = "const ok = a &&\n      b;;\n";
//! let result = lint(source, SourceType::mjs(), RulesConfig::default()).unwrap();
//! assert_eq!(result.diagnostics.len(), 2);
//!
//! let fixed = fix(source, SourceType::mjs(), RulesConfig::default()).unwrap();
//! assert_eq!(fixed.code, "const ok = a &&\n  b;\n");
//! ```

pub use common::{ConfigError, IndentUnit};
pub use oxc_span::SourceType;
pub use stylistic_linter::{
    Diagnostic, DiagnosticSeverity, Fix, IndentBinaryOps, LintResult, NoExtraSemi, RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use thiserror::Error;
use tracing::debug;

/// Upper bound on lint-and-fix rounds for one source
pub const MAX_FIX_PASSES: usize = 10;

/// Errors returned by the top-level entry points
#[derive(Debug, Error)]
pub enum LintError {
    /// The source did not parse; rules only run on valid programs
    #[error("Failed to parse source: {}", messages.join("; "))]
    Parse { messages: Vec<String> },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parse `source` and run every enabled rule over it
pub fn lint(
    source: &str,
    source_type: SourceType,
    config: RulesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let messages: Vec<String> = ret.errors.iter().map(ToString::to_string).collect();
        debug!(errors = messages.len(), "source did not parse");
        return Err(LintError::Parse { messages });
    }

    Ok(stylistic_linter::lint_with_config(source, &ret.program, config))
}

/// Apply one pass of fixes to `source`.
///
/// Fixes are taken in source order; a fix that overlaps one already taken is
/// left for a later pass. Returns the new text and the number of fixes applied.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> (String, usize) {
    let mut fixes: Vec<&Fix> = diagnostics.iter().flat_map(|d| d.fixes.iter()).collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut accepted: Vec<&Fix> = Vec::with_capacity(fixes.len());
    for fix in fixes {
        if accepted.last().is_some_and(|last| last.conflicts_with(fix)) {
            continue;
        }
        accepted.push(fix);
    }

    let mut code = source.to_string();
    for fix in accepted.iter().rev() {
        code.replace_range(fix.start as usize..fix.end as usize, &fix.replacement);
    }
    (code, accepted.len())
}

/// Result of fixing a source
#[derive(Debug, Clone)]
pub struct FixResult {
    /// The fixed code
    pub code: String,
    /// Lint-and-fix rounds that changed the code
    pub passes: usize,
    /// Diagnostics left after the last round
    pub remaining: Vec<Diagnostic>,
}

/// Lint and fix `source` until no fix applies, at most [`MAX_FIX_PASSES`] times
pub fn fix(
    source: &str,
    source_type: SourceType,
    config: RulesConfig,
) -> Result<FixResult, LintError> {
    let mut code = source.to_string();
    let mut passes = 0;

    loop {
        let result = lint(&code, source_type, config.clone())?;
        if passes == MAX_FIX_PASSES || result.fixable_count() == 0 {
            debug!(passes, remaining = result.diagnostics.len(), "fixing finished");
            return Ok(FixResult {
                code,
                passes,
                remaining: result.diagnostics,
            });
        }

        let (next, applied) = apply_fixes(&code, &result.diagnostics);
        debug!(pass = passes + 1, applied, "applied fixes");
        code = next;
        passes += 1;
    }
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used to pick the dialect
    /// @default "input.ts"
    pub filename: Option<String>,

    /// Rules configuration as a JSON object,
    /// e.g. `{"indent-binary-ops": 2, "no-extra-semi": true}`
    pub rules: Option<String>,
}

/// Result of a fix operation
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFixResult {
    /// The fixed code
    pub code: String,
    /// Remaining diagnostics as a JSON array
    pub diagnostics: String,
}

#[cfg(feature = "napi")]
fn resolve_options(options: Option<JsLintOptions>) -> Result<(SourceType, RulesConfig), LintError> {
    let options = options.unwrap_or_default();
    let filename = options.filename.as_deref().unwrap_or("input.ts");
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::ts());
    let config = match options.rules.as_deref() {
        Some(json) => RulesConfig::from_json(json)?,
        None => RulesConfig::default(),
    };
    Ok((source_type, config))
}

#[cfg(feature = "napi")]
fn to_napi_error(err: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

/// Lint source code, returning diagnostics as a JSON array
#[cfg(feature = "napi")]
#[napi]
pub fn lint_source(source: String, options: Option<JsLintOptions>) -> napi::Result<String> {
    let (source_type, config) = resolve_options(options).map_err(to_napi_error)?;
    let result = lint(&source, source_type, config).map_err(to_napi_error)?;
    serde_json::to_string(&result.diagnostics).map_err(to_napi_error)
}

/// Lint and fix source code
#[cfg(feature = "napi")]
#[napi]
pub fn fix_source(source: String, options: Option<JsLintOptions>) -> napi::Result<JsFixResult> {
    let (source_type, config) = resolve_options(options).map_err(to_napi_error)?;
    let result = fix(&source, source_type, config).map_err(to_napi_error)?;
    Ok(JsFixResult {
        code: result.code,
        diagnostics: serde_json::to_string(&result.remaining).map_err(to_napi_error)?,
    })
}
