//! Rule to enforce identifier casing per construct kind.
//!
//! # Rationale
//!
//! Types, enums, enum members and namespaces read as `PascalCase`; values,
//! functions and members read as `camelCase`. Consistent casing tells the
//! reader what kind of symbol a name refers to.
//!
//! # Detected Patterns
//!
//! ```ignore
//! enum Color { red }          // member should be `Red`
//! class employee {}           // should be `Employee`
//! function Get_user() {}      // should be `getUser`
//! ```

use style_lint_core::{
    validate, CasePolicy, NodeContext, NodeRule, Severity, Suggestion, SyntaxNode, Violation,
};

/// Rule code for naming-case.
pub const CODE: &str = "TS001";

/// Rule name for naming-case.
pub const NAME: &str = "naming-case";

/// Checks every identifier against its construct's case policy.
#[derive(Debug, Clone)]
pub struct NamingCase {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NamingCase {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingCase {
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

impl NodeRule for NamingCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces camelCase or PascalCase identifiers per construct kind"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
        let policy = ctx.rule.case;
        if policy == CasePolicy::NoConstraint {
            return Vec::new();
        }

        let name = node.name();
        if validate(name, policy) {
            return Vec::new();
        }

        let mut violation = Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(node.span),
            format!("{} '{name}' should be {policy}", node.kind.label()),
        )
        .with_finding(name, policy.to_string());

        let renamed = policy.apply(name);
        if !renamed.is_empty() && validate(&renamed, policy) {
            violation =
                violation.with_suggestion(Suggestion::new(format!("Rename to '{renamed}'")));
        }

        vec![violation]
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
        NamingCase::new().check(&ctx, &SyntaxNode::new(kind, name, Span::new(1, 0)))
    }

    #[test]
    fn enum_member_must_be_pascal() {
        let v = check(ConstructKind::EnumMember, "red");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].code, CODE);
        assert_eq!(v[0].actual, "red");
        assert_eq!(v[0].expected, "PascalCase");
        assert_eq!(v[0].message, "Enum member 'red' should be PascalCase");
        assert_eq!(
            v[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Rename to 'Red'")
        );
    }

    #[test]
    fn conforming_names_pass() {
        assert!(check(ConstructKind::Enum, "Color").is_empty());
        assert!(check(ConstructKind::Variable, "empCode").is_empty());
        assert!(check(ConstructKind::ClassMember, "empName").is_empty());
        assert!(check(ConstructKind::Namespace, "Shapes").is_empty());
    }

    #[test]
    fn camel_case_kinds() {
        let v = check(ConstructKind::Function, "Get_user");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].expected, "camelCase");
        assert_eq!(
            v[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Rename to 'getUser'")
        );
    }

    #[test]
    fn unconstrained_kinds_are_skipped() {
        assert!(check(ConstructKind::ImportDeclaration, "./snake_case").is_empty());
        assert!(check(ConstructKind::TypeAnnotation, "string").is_empty());
    }

    #[test]
    fn no_suggestion_when_rename_is_impossible() {
        let v = check(ConstructKind::Class, "_");
        assert_eq!(v.len(), 1);
        assert!(v[0].suggestion.is_none());
    }

    #[test]
    fn severity_is_configurable() {
        let rule = NamingCase::new().severity(Severity::Warning);
        assert_eq!(rule.default_severity(), Severity::Warning);
    }
}
