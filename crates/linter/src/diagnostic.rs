//! Diagnostic types for lint results

use oxc_span::Span;
use serde::Serialize;

/// Severity level for diagnostics. Stylistic rules only ever warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
}

/// A single text substitution over the original source.
///
/// Fixes produced in one pass must not overlap; a host applies the
/// non-conflicting ones and re-runs the rules until nothing changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Start position of the span to replace
    pub start: u32,
    /// End position of the span to replace
    pub end: u32,
    /// The replacement text
    pub replacement: String,
    /// Description of what the fix does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Fix {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: None,
        }
    }

    pub fn delete(span: Span) -> Self {
        Self::new(span, "")
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Check if two fixes claim any common byte, or insert at the same point
    pub fn conflicts_with(&self, other: &Fix) -> bool {
        if self.start == self.end || other.start == other.end {
            return self.start <= other.end && other.start <= self.end;
        }
        self.start < other.end && other.start < self.end
    }
}

/// A lint diagnostic
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Name of the rule that produced this diagnostic
    pub rule: &'static str,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Suggested fixes, applied together
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn warning(rule: &'static str, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule,
            start: span.start,
            end: span.end,
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
            fixes: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    pub fn is_fixable(&self) -> bool {
        !self.fixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts() {
        let a = Fix::new(Span::new(0, 4), "x");
        let b = Fix::new(Span::new(4, 6), "y");
        let c = Fix::new(Span::new(3, 5), "z");
        assert!(!a.conflicts_with(&b));
        assert!(a.conflicts_with(&c));
        assert!(c.conflicts_with(&b));

        let insert = Fix::new(Span::new(4, 4), "!");
        assert!(insert.conflicts_with(&a));
        assert!(insert.conflicts_with(&b));
    }

    #[test]
    fn test_fixable() {
        let diagnostic = Diagnostic::warning("rule", Span::new(0, 1), "message");
        assert!(!diagnostic.is_fixable());
        assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
        let diagnostic = diagnostic.with_fix(Fix::delete(Span::new(0, 1)));
        assert!(diagnostic.is_fixable());
        assert_eq!(diagnostic.fixes[0].replacement, "");
    }
}
