//! Rule traits for defining style checks.

use crate::context::{NodeContext, TreeContext};
use crate::syntax::SyntaxNode;
use crate::types::{Severity, Violation};

/// A per-node rule, evaluated on every node of the pre-order walk.
///
/// Node rules are independent predicates composed by the analyzer; adding a
/// new one never requires touching the existing ones.
///
/// # Example
///
/// ```ignore
/// use style_lint_core::{NodeContext, NodeRule, SyntaxNode, Violation};
///
/// pub struct NoDollarNames;
///
/// impl NodeRule for NoDollarNames {
///     fn name(&self) -> &'static str { "no-dollar-names" }
///     fn code(&self) -> &'static str { "TS100" }
///
///     fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
///         if node.name().contains('$') {
///             vec![Violation::new(self.code(), self.name(), self.default_severity(),
///                 ctx.location(node.span), "`$` in identifier")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait NodeRule: Send + Sync {
    /// Returns the kebab-case id of this rule (e.g., "naming-case").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single node. Children are visited separately by the walk.
    fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation>;
}

/// Type alias for boxed `NodeRule` trait objects.
pub type NodeRuleBox = Box<dyn NodeRule>;

/// A whole-tree rule, evaluated once per pass after the node walk.
///
/// Used for checks that compare siblings, such as declaration ordering.
pub trait TreeRule: Send + Sync {
    /// Returns the kebab-case id of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TS004").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks the tree rooted at `root`.
    fn check_tree(&self, ctx: &TreeContext, root: &SyntaxNode) -> Vec<Violation>;
}

/// Type alias for boxed `TreeRule` trait objects.
pub type TreeRuleBox = Box<dyn TreeRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::RuleSet;
    use crate::syntax::{ConstructKind, Span};
    use std::path::Path;

    struct TestRule;

    impl NodeRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                ctx.location(node.span),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let construct = RuleSet::standard()
            .rule_for(ConstructKind::Function)
            .unwrap();
        let ctx = NodeContext::new(Path::new("a.ts"), construct);
        let node = SyntaxNode::new(ConstructKind::Function, "run", Span::new(2, 9));
        let v = rule.check(&ctx, &node);
        assert_eq!(v[0].location.column, 10);
    }
}
