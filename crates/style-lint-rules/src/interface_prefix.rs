//! Rule to forbid Hungarian-style prefixes such as `I` on interfaces.
//!
//! Reported independently of `naming-case`: `IExample` is valid PascalCase
//! and still gets exactly one prefix violation.

use style_lint_core::{NodeContext, NodeRule, Severity, Suggestion, SyntaxNode, Violation};

/// Rule code for no-interface-prefix.
pub const CODE: &str = "TS002";

/// Rule name for no-interface-prefix.
pub const NAME: &str = "no-interface-prefix";

/// Flags identifiers starting with a prefix their construct forbids.
#[derive(Debug, Clone)]
pub struct NoInterfacePrefix {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoInterfacePrefix {
    fn default() -> Self {
        Self::new()
    }
}

impl NoInterfacePrefix {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl NodeRule for NoInterfacePrefix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids prefixes such as `I` on interface names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
        let name = node.name();
        let Some(prefix) = ctx.rule.forbidden_prefix_of(name) else {
            return Vec::new();
        };

        let stripped = &name[prefix.len()..];
        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(node.span),
            format!(
                "{} '{name}' should not be prefixed with '{prefix}'",
                node.kind.label()
            ),
        )
        .with_finding(name, format!("no '{prefix}' prefix"))
        .with_suggestion(Suggestion::new(format!("Rename to '{stripped}'")))]
    }
}
