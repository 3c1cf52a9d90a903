//! Core analyzer: runs node and tree rules over one syntax tree per pass.

use std::borrow::Cow;

use thiserror::Error;
use tracing::{debug, info};

use crate::classifier::Classify;
use crate::config::Config;
use crate::construct::RuleSet;
use crate::context::TreeContext;
use crate::rule::{NodeRule, NodeRuleBox, TreeRule, TreeRuleBox};
use crate::syntax::{ConstructKind, SyntaxTree};
use crate::types::{Report, Severity, Violation};

/// Structural errors: the supplied tree is malformed.
///
/// These abort the pass and are never reported as style violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// A node kind has no entry in the rule set, or is not a known kind.
    #[error("unknown construct kind '{kind}'")]
    UnknownConstructKind {
        /// The offending kind name.
        kind: String,
    },

    /// A node that must be named has no identifier.
    #[error("{kind} node at {line}:{column} has no identifier")]
    MissingIdentifier {
        /// Kind of the unnamed node.
        kind: ConstructKind,
        /// Line (1-indexed).
        line: usize,
        /// Column (0-indexed).
        column: usize,
    },

    /// A serialized tree could not be decoded.
    #[error("failed to decode syntax tree: {message}")]
    Decode {
        /// Decoder error message.
        message: String,
    },
}

/// A registered rule plus its configured severity override.
pub(crate) struct Registered<R> {
    pub(crate) rule: R,
    pub(crate) severity: Option<Severity>,
}

impl<R> Registered<R> {
    pub(crate) fn apply(&self, mut violations: Vec<Violation>) -> Vec<Violation> {
        if let Some(severity) = self.severity {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<NodeRuleBox>,
    tree_rules: Vec<TreeRuleBox>,
    rule_set: Option<RuleSet>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-node rule.
    #[must_use]
    pub fn rule<R: NodeRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-node rule.
    #[must_use]
    pub fn rule_box(mut self, rule: NodeRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a whole-tree rule.
    #[must_use]
    pub fn tree_rule<R: TreeRule + 'static>(mut self, rule: R) -> Self {
        self.tree_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed whole-tree rule.
    #[must_use]
    pub fn tree_rule_box(mut self, rule: TreeRuleBox) -> Self {
        self.tree_rules.push(rule);
        self
    }

    /// Replaces the standard construct rule table.
    #[must_use]
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Sets the configuration used to enable rules and override severities.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, dropping rules the configuration disables.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();

        let node_rules = self
            .rules
            .into_iter()
            .filter(|r| enabled(&config, r.name()))
            .map(|rule| Registered {
                severity: config.rule_severity(rule.name()),
                rule,
            })
            .collect();

        let tree_rules = self
            .tree_rules
            .into_iter()
            .filter(|r| enabled(&config, r.name()))
            .map(|rule| Registered {
                severity: config.rule_severity(rule.name()),
                rule,
            })
            .collect();

        Analyzer {
            node_rules,
            tree_rules,
            rule_set: self
                .rule_set
                .map_or(Cow::Borrowed(RuleSet::standard()), Cow::Owned),
        }
    }
}

fn enabled(config: &Config, name: &str) -> bool {
    let on = config.is_rule_enabled(name);
    if !on {
        debug!("Skipping disabled rule: {}", name);
    }
    on
}

/// Runs style rules over syntax trees.
///
/// An analyzer holds no per-pass state: `analyze` may be called concurrently
/// from many threads, one pass per tree.
pub struct Analyzer {
    pub(crate) node_rules: Vec<Registered<NodeRuleBox>>,
    pub(crate) tree_rules: Vec<Registered<TreeRuleBox>>,
    pub(crate) rule_set: Cow<'static, RuleSet>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.node_rules.len() + self.tree_rules.len()
    }

    /// Returns the construct rule table in effect.
    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Lazily classifies every node of `tree` in pre-order.
    ///
    /// Yields node-rule violations; stops after the first structural error.
    #[must_use]
    pub fn classify<'a>(&'a self, tree: &'a SyntaxTree) -> Classify<'a> {
        Classify::new(self, tree)
    }

    /// Runs one complete pass over `tree`.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalyzerError`] if the tree is structurally invalid
    /// (unknown construct kind, or a node missing its identifier).
    pub fn analyze(&self, tree: &SyntaxTree) -> Result<Report, AnalyzerError> {
        debug!("Analyzing: {}", tree.path.display());

        let node_violations = self.classify(tree).collect::<Result<Vec<_>, _>>()?;

        let ctx = TreeContext::new(&tree.path, &self.rule_set);
        let mut order_violations = Vec::new();
        for entry in &self.tree_rules {
            order_violations.extend(entry.apply(entry.rule.check_tree(&ctx, &tree.root)));
        }

        let report = Report::collect(node_violations, order_violations);
        info!(
            "Analysis of {} complete: {} violation(s)",
            tree.path.display(),
            report.len()
        );
        Ok(report)
    }
}
