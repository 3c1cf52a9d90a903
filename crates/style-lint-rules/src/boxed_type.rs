//! Rule to forbid boxed primitive types (`Number`, `String`, `Boolean`,
//! `Symbol`, `Object`) in type annotations.
//!
//! # Detected Patterns
//!
//! ```ignore
//! function reverse(s: String): String;   // use `string`
//! let flags: Boolean[] = [];             // use `boolean[]`
//! ```

use style_lint_core::{NodeContext, NodeRule, Severity, Suggestion, SyntaxNode, Violation};

/// Rule code for no-boxed-types.
pub const CODE: &str = "TS003";

/// Rule name for no-boxed-types.
pub const NAME: &str = "no-boxed-types";

/// Flags references to forbidden type names.
#[derive(Debug, Clone)]
pub struct NoBoxedTypes {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoBoxedTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl NoBoxedTypes {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl NodeRule for NoBoxedTypes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids boxed primitive types such as `String` in type annotations"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
        let type_name = node.name();
        if !ctx.rule.forbids_type(type_name) {
            return Vec::new();
        }

        let primitive = type_name.to_lowercase();
        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(node.span),
            format!("Don't use '{type_name}' as a type; use '{primitive}'"),
        )
        .with_finding(type_name, primitive.clone())
        .with_suggestion(Suggestion::new(format!("Replace with '{primitive}'")))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use style_lint_core::{ConstructKind, RuleSet, Span};

    fn check(kind: ConstructKind, name: &str) -> Vec<Violation> {
        let rule = RuleSet::standard().rule_for(kind).unwrap();
        let ctx = NodeContext::new(Path::new("test.ts"), rule);
        NoBoxedTypes::new().check(&ctx, &SyntaxNode::new(kind, name, Span::new(1, 12)))
    }

    #[test]
    fn flags_boxed_string() {
        let v = check(ConstructKind::TypeAnnotation, "String");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].actual, "String");
        assert_eq!(v[0].expected, "string");
        assert!(v[0].message.contains("'String'"));
    }

    #[test]
    fn every_boxed_name_is_flagged() {
        for name in style_lint_core::BOXED_TYPE_NAMES {
            assert_eq!(check(ConstructKind::TypeAnnotation, name).len(), 1, "{name}");
        }
    }

    #[test]
    fn primitives_and_user_types_pass() {
        assert!(check(ConstructKind::TypeAnnotation, "string").is_empty());
        assert!(check(ConstructKind::TypeAnnotation, "Employee").is_empty());
    }

    #[test]
    fn only_type_annotations_are_checked() {
        // A class may legitimately be named like a wrapper type.
        assert!(check(ConstructKind::Class, "String").is_empty());
    }
}
