//! Rule to enforce import grouping and ordering.
//!
//! External modules come first, then relative ones (specifiers starting
//! with `.`). Within each group, specifiers ascend in case-sensitive
//! code-point order.
//!
//! # Detected Patterns
//!
//! ```ignore
//! import { User } from "./interfaces";   // relative before external
//! import moment from "moment";
//! import circle from "circle";
//! ```

use style_lint_core::{
    ConstructKind, Severity, Suggestion, SyntaxNode, TreeContext, TreeRule, Violation,
};
use tracing::trace;

use crate::ordering::first_divergence;

/// Rule code for import-order.
pub const CODE: &str = "TS004";

/// Rule name for import-order.
pub const NAME: &str = "import-order";

/// Category of an import's module specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportGroup {
    /// Package or absolute module (`moment`, `@scope/pkg`).
    External,
    /// Path relative to the importing file (`./x`, `../y`).
    Relative,
}

impl ImportGroup {
    /// Classifies a module specifier.
    #[must_use]
    pub fn of(specifier: &str) -> Self {
        if specifier.starts_with('.') {
            Self::Relative
        } else {
            Self::External
        }
    }
}

/// Returns specifiers in their expected order: external sorted, then relative sorted.
#[must_use]
pub fn expected_import_order<'a>(specifiers: &[&'a str]) -> Vec<&'a str> {
    let (mut external, mut relative): (Vec<&str>, Vec<&str>) = specifiers
        .iter()
        .copied()
        .partition(|s| ImportGroup::of(s) == ImportGroup::External);
    external.sort_unstable();
    relative.sort_unstable();
    external.extend(relative);
    external
}

/// Checks that each import list is grouped and sorted.
#[derive(Debug, Clone)]
pub struct ImportOrder {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ImportOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportOrder {
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

    /// Checks one import list, reporting at most the first misplaced import.
    #[must_use]
    pub fn check_imports(&self, ctx: &TreeContext, imports: &[&SyntaxNode]) -> Vec<Violation> {
        let actual: Vec<&str> = imports.iter().map(|n| n.name()).collect();
        let expected = expected_import_order(&actual);

        let Some(pos) = first_divergence(&actual, &expected) else {
            return Vec::new();
        };

        let found = actual[pos];
        let wanted = expected[pos];
        trace!("Import list diverges at position {}: '{}'", pos, found);
        let message = if ImportGroup::of(found) > ImportGroup::of(wanted) {
            format!("Relative import '{found}' should come after external imports")
        } else {
            format!("Import '{found}' is out of order; expected '{wanted}' here")
        };

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(imports[pos].span),
            message,
        )
        .with_finding(found, wanted)
        .with_suggestion(Suggestion::new(
            "Place external imports before relative ones, each group sorted alphabetically",
        ))]
    }
}

impl TreeRule for ImportOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires external imports before relative ones, each group sorted"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_tree(&self, ctx: &TreeContext, root: &SyntaxNode) -> Vec<Violation> {
        let mut violations = Vec::new();
        for container in root.preorder() {
            let imports: Vec<&SyntaxNode> = container
                .children_of(ConstructKind::ImportDeclaration)
                .collect();
            if imports.len() > 1 {
                violations.extend(self.check_imports(ctx, &imports));
            }
        }
        violations
    }
}
