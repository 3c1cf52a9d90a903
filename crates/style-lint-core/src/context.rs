//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::construct::{ConstructRule, RuleSet};
use crate::syntax::Span;
use crate::types::Location;

/// Context provided to per-node rules.
///
/// Carries the file being analyzed and the construct rule already resolved
/// for the node under inspection.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    /// Path of the file, relative to the project root.
    pub path: &'a Path,
    /// Rule for the node's construct kind.
    pub rule: &'a ConstructRule,
}

impl<'a> NodeContext<'a> {
    /// Creates a new node context.
    #[must_use]
    pub fn new(path: &'a Path, rule: &'a ConstructRule) -> Self {
        Self { path, rule }
    }

    /// Location of a span within this file.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        Location::from_span(self.path.to_path_buf(), span)
    }
}

/// Context provided to whole-tree rules.
#[derive(Debug, Clone, Copy)]
pub struct TreeContext<'a> {
    /// Path of the file, relative to the project root.
    pub path: &'a Path,
    /// Rule table in effect for this pass.
    pub rule_set: &'a RuleSet,
}

impl<'a> TreeContext<'a> {
    /// Creates a new tree context.
    #[must_use]
    pub fn new(path: &'a Path, rule_set: &'a RuleSet) -> Self {
        Self { path, rule_set }
    }

    /// Location of a span within this file.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        Location::from_span(PathBuf::from(self.path), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ConstructKind;

    #[test]
    fn node_location_is_one_based() {
        let rule = RuleSet::standard()
            .rule_for(ConstructKind::Variable)
            .unwrap();
        let ctx = NodeContext::new(Path::new("src/app.ts"), rule);
        let loc = ctx.location(Span::new(7, 0));
        assert_eq!(loc.file, PathBuf::from("src/app.ts"));
        assert_eq!((loc.line, loc.column), (7, 1));
    }

    #[test]
    fn tree_location_keeps_range() {
        let ctx = TreeContext::new(Path::new("a.ts"), RuleSet::standard());
        let loc = ctx.location(Span::new(1, 4).with_range(4, 12));
        assert_eq!((loc.offset, loc.length), (4, 12));
    }
}
