//! Rule to require members in ascending alphabetical order.
//!
//! Applies to the members of classes, interfaces and object type aliases.
//! Comparison is case-sensitive; static and instance members, and every
//! visibility, are ordered together.

use style_lint_core::{Severity, Suggestion, SyntaxNode, TreeContext, TreeRule, Violation};
use tracing::trace;

use crate::ordering::first_divergence;

/// Rule code for member-order.
pub const CODE: &str = "TS005";

/// Rule name for member-order.
pub const NAME: &str = "member-order";

/// Checks that each member list is sorted by name.
#[derive(Debug, Clone)]
pub struct MemberOrder {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MemberOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberOrder {
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

    /// Checks one member list, reporting at most the first misplaced member.
    #[must_use]
    pub fn check_members(&self, ctx: &TreeContext, members: &[&SyntaxNode]) -> Vec<Violation> {
        let actual: Vec<&str> = members.iter().map(|n| n.name()).collect();
        let mut expected = actual.clone();
        expected.sort_unstable();

        let Some(pos) = first_divergence(&actual, &expected) else {
            return Vec::new();
        };

        let found = actual[pos];
        let wanted = expected[pos];
        trace!("Member list diverges at position {}: '{}'", pos, found);
        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(members[pos].span),
            format!("Member '{found}' is out of alphabetical order; expected '{wanted}' here"),
        )
        .with_finding(found, wanted)
        .with_suggestion(Suggestion::new(format!(
            "Declare members in alphabetical order: {}",
            expected.join(", ")
        )))]
    }
}

impl TreeRule for MemberOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires class, interface and type members in alphabetical order"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_tree(&self, ctx: &TreeContext, root: &SyntaxNode) -> Vec<Violation> {
        let mut violations = Vec::new();
        for container in root.preorder() {
            let Some(member_kind) = container.kind.member_kind() else {
                continue;
            };
            let members: Vec<&SyntaxNode> = container.children_of(member_kind).collect();
            if members.len() > 1 {
                violations.extend(self.check_members(ctx, &members));
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use style_lint_core::{ConstructKind, RuleSet, Span};

    fn class(name: &str, members: &[&str]) -> SyntaxNode {
        SyntaxNode::new(ConstructKind::Class, name, Span::new(1, 6)).with_children(
            members.iter().enumerate().map(|(i, m)| {
                SyntaxNode::new(ConstructKind::ClassMember, *m, Span::new(i + 2, 4))
            }),
        )
    }

    fn check(root: &SyntaxNode) -> Vec<Violation> {
        let ctx = TreeContext::new(Path::new("test.ts"), RuleSet::standard());
        MemberOrder::new().check_tree(&ctx, root)
    }

    #[test]
    fn reports_first_out_of_order_member() {
        let root = SyntaxNode::module(vec![class("Employee", &["id", "empCode", "empName"])]);
        let v = check(&root);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].actual, "id");
        assert_eq!(v[0].expected, "empCode");
        assert_eq!(v[0].location.line, 2);
        assert_eq!(
            v[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Declare members in alphabetical order: empCode, empName, id")
        );
    }

    #[test]
    fn sorted_members_pass() {
        let root = SyntaxNode::module(vec![class("Employee", &["empCode", "empName", "id"])]);
        assert!(check(&root).is_empty());
    }

    #[test]
    fn each_container_is_checked_in_source_order() {
        let root = SyntaxNode::module(vec![class("B", &["z", "a"]), class("A", &["y", "b"])]);
        let v = check(&root);
        let actual: Vec<&str> = v.iter().map(|v| v.actual.as_str()).collect();
        assert_eq!(actual, ["z", "y"]);
    }

    #[test]
    fn interface_and_type_members_are_ordered() {
        let iface = SyntaxNode::new(ConstructKind::Interface, "Shape", Span::new(1, 10))
            .with_child(SyntaxNode::new(ConstructKind::InterfaceMember, "width", Span::new(2, 2)))
            .with_child(SyntaxNode::new(ConstructKind::InterfaceMember, "height", Span::new(3, 2)));
        let alias = SyntaxNode::new(ConstructKind::TypeAlias, "Point", Span::new(5, 5))
            .with_child(SyntaxNode::new(ConstructKind::TypeAliasMember, "y", Span::new(5, 16)))
            .with_child(SyntaxNode::new(ConstructKind::TypeAliasMember, "x", Span::new(5, 27)));
        let v = check(&SyntaxNode::module(vec![iface, alias]));
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].actual, "width");
        assert_eq!(v[1].actual, "y");
    }

    #[test]
    fn non_member_children_are_ignored() {
        // Heritage clauses lower to type annotations under the class.
        let root = SyntaxNode::module(vec![class("Employee", &["a", "b"]).with_child(
            SyntaxNode::new(ConstructKind::TypeAnnotation, "Base", Span::new(1, 20)),
        )]);
        assert!(check(&root).is_empty());
    }

    #[test]
    fn enums_keep_declaration_order() {
        let e = SyntaxNode::new(ConstructKind::Enum, "Color", Span::new(1, 5))
            .with_child(SyntaxNode::new(ConstructKind::EnumMember, "Red", Span::new(1, 13)))
            .with_child(SyntaxNode::new(ConstructKind::EnumMember, "Blue", Span::new(1, 18)));
        assert!(check(&SyntaxNode::module(vec![e])).is_empty());
    }
}
