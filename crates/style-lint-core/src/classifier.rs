//! Symbol classification: the pre-order node walk.

use std::path::Path;

use crate::analyzer::{Analyzer, AnalyzerError};
use crate::context::NodeContext;
use crate::syntax::{SyntaxNode, SyntaxTree};
use crate::types::Violation;

/// Lazy sequence of node-rule violations for one tree.
///
/// Nodes are visited container-first, children in source order, using an
/// explicit stack. Each node's rule is looked up in the analyzer's rule set
/// and every registered node rule runs against it. A structural error is
/// yielded once and ends the sequence.
pub struct Classify<'a> {
    analyzer: &'a Analyzer,
    path: &'a Path,
    stack: Vec<&'a SyntaxNode>,
    pending: std::vec::IntoIter<Violation>,
}

impl<'a> Classify<'a> {
    pub(crate) fn new(analyzer: &'a Analyzer, tree: &'a SyntaxTree) -> Self {
        Self {
            analyzer,
            path: &tree.path,
            stack: vec![&tree.root],
            pending: Vec::new().into_iter(),
        }
    }

    fn evaluate(&self, node: &SyntaxNode) -> Result<Vec<Violation>, AnalyzerError> {
        let rule = self.analyzer.rule_set.rule_for(node.kind)?;
        check_identifier(node)?;

        let ctx = NodeContext::new(self.path, rule);
        let mut violations = Vec::new();
        for entry in &self.analyzer.node_rules {
            violations.extend(entry.apply(entry.rule.check(&ctx, node)));
        }
        Ok(violations)
    }
}

impl Iterator for Classify<'_> {
    type Item = Result<Violation, AnalyzerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.pending.next() {
                return Some(Ok(v));
            }
            let node = self.stack.pop()?;
            match self.evaluate(node) {
                Ok(violations) => {
                    self.stack.extend(node.children.iter().rev());
                    self.pending = violations.into_iter();
                }
                Err(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

fn check_identifier(node: &SyntaxNode) -> Result<(), AnalyzerError> {
    let named = node.identifier.as_deref().is_some_and(|s| !s.is_empty());
    if node.kind.requires_identifier() && !named {
        return Err(AnalyzerError::MissingIdentifier {
            kind: node.kind,
            line: node.span.line,
            column: node.span.column,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::NodeRule;
    use crate::syntax::{ConstructKind, Span};
    use crate::types::Severity;

    struct Echo;

    impl NodeRule for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }
        fn code(&self) -> &'static str {
            "E001"
        }
        fn check(&self, ctx: &NodeContext, node: &SyntaxNode) -> Vec<Violation> {
            if node.kind == ConstructKind::Module {
                return Vec::new();
            }
            vec![Violation::new(
                self.code(),
                self.name(),
                Severity::Warning,
                ctx.location(node.span),
                node.name(),
            )]
        }
    }

    fn nested() -> SyntaxTree {
        SyntaxTree::new(
            "n.ts",
            SyntaxNode::module(vec![
                SyntaxNode::new(ConstructKind::Namespace, "Outer", Span::new(1, 10)).with_child(
                    SyntaxNode::new(ConstructKind::Class, "Inner", Span::new(2, 10)).with_child(
                        SyntaxNode::new(ConstructKind::ClassMember, "field", Span::new(3, 4)),
                    ),
                ),
                SyntaxNode::new(ConstructKind::Function, "after", Span::new(6, 9)),
            ]),
        )
    }

    #[test]
    fn yields_in_preorder() {
        let analyzer = Analyzer::builder().rule(Echo).build();
        let tree = nested();
        let messages: Vec<String> = analyzer
            .classify(&tree)
            .map(|r| r.unwrap().message)
            .collect();
        assert_eq!(messages, ["Outer", "Inner", "field", "after"]);
    }

    #[test]
    fn is_lazy() {
        let analyzer = Analyzer::builder().rule(Echo).build();
        let tree = nested();
        let mut iter = analyzer.classify(&tree);
        assert_eq!(iter.next().unwrap().unwrap().message, "Outer");
        // Only the path to the first finding has been expanded.
        assert!(iter.stack.len() <= 2);
    }

    #[test]
    fn stops_after_structural_error() {
        let analyzer = Analyzer::builder().rule(Echo).build();
        let mut tree = nested();
        tree.root.children[0].children[0].children[0].identifier = Some(String::new());
        let results: Vec<_> = analyzer.classify(&tree).collect();
        assert_eq!(results.len(), 3);
        assert!(results[2].is_err());
    }
}
