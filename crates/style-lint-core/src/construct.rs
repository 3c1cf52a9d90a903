//! The construct rule set: one declarative rule per construct kind.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::analyzer::AnalyzerError;
use crate::case::CasePolicy;
use crate::syntax::ConstructKind;

/// Boxed primitive wrappers that must never be used as type annotations.
pub const BOXED_TYPE_NAMES: &[&str] = &["Number", "String", "Boolean", "Symbol", "Object"];

/// Declarative naming rule for one construct kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructRule {
    /// Construct kind this rule applies to.
    pub kind: ConstructKind,
    /// Required identifier casing.
    pub case: CasePolicy,
    /// Prefixes that must not start an identifier (e.g., `I` for interfaces).
    pub forbidden_prefixes: Vec<String>,
    /// Type names that must not be referenced (e.g., boxed primitives).
    pub forbidden_type_names: Vec<String>,
}

impl ConstructRule {
    /// Creates a rule with only a case policy.
    #[must_use]
    pub fn new(kind: ConstructKind, case: CasePolicy) -> Self {
        Self {
            kind,
            case,
            forbidden_prefixes: Vec::new(),
            forbidden_type_names: Vec::new(),
        }
    }

    /// Adds forbidden identifier prefixes.
    #[must_use]
    pub fn forbid_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Adds forbidden type names.
    #[must_use]
    pub fn forbid_type_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_type_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns the forbidden prefix `identifier` starts with, if any.
    ///
    /// A prefix only counts at a word boundary: it must be followed by an
    /// uppercase letter, so `IUser` matches `I` but `Item` does not.
    #[must_use]
    pub fn forbidden_prefix_of(&self, identifier: &str) -> Option<&str> {
        self.forbidden_prefixes
            .iter()
            .find(|prefix| {
                identifier
                    .strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.chars().next())
                    .is_some_and(char::is_uppercase)
            })
            .map(String::as_str)
    }

    /// Whether `type_name` is forbidden by this rule.
    #[must_use]
    pub fn forbids_type(&self, type_name: &str) -> bool {
        self.forbidden_type_names.iter().any(|t| t == type_name)
    }
}

/// Immutable mapping from construct kind to its rule.
///
/// Holds at most one rule per kind. The standard table is built once per
/// process by [`RuleSet::standard`] and shared read-only between passes.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<ConstructKind, ConstructRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing any previous rule for the same kind.
    #[must_use]
    pub fn with_rule(mut self, rule: ConstructRule) -> Self {
        self.rules.insert(rule.kind, rule);
        self
    }

    /// Returns the shared standard rule table.
    pub fn standard() -> &'static RuleSet {
        static STANDARD: OnceLock<RuleSet> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        use CasePolicy::{CamelCase, NoConstraint, PascalCase};
        use ConstructKind as K;

        Self::new()
            .with_rule(ConstructRule::new(K::Module, NoConstraint))
            .with_rule(ConstructRule::new(K::Variable, CamelCase))
            .with_rule(ConstructRule::new(K::Function, CamelCase))
            .with_rule(ConstructRule::new(K::Parameter, CamelCase))
            .with_rule(ConstructRule::new(K::Class, PascalCase))
            .with_rule(ConstructRule::new(K::ClassMember, CamelCase))
            .with_rule(ConstructRule::new(K::Interface, PascalCase).forbid_prefixes(["I"]))
            .with_rule(ConstructRule::new(K::InterfaceMember, CamelCase))
            .with_rule(ConstructRule::new(K::TypeAlias, PascalCase))
            .with_rule(ConstructRule::new(K::TypeAliasMember, CamelCase))
            .with_rule(ConstructRule::new(K::Enum, PascalCase))
            .with_rule(ConstructRule::new(K::EnumMember, PascalCase))
            .with_rule(ConstructRule::new(K::Namespace, PascalCase))
            .with_rule(ConstructRule::new(K::ImportDeclaration, NoConstraint))
            .with_rule(
                ConstructRule::new(K::TypeAnnotation, NoConstraint)
                    .forbid_type_names(BOXED_TYPE_NAMES.iter().copied()),
            )
    }

    /// Looks up the rule for a construct kind.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::UnknownConstructKind`] if the set has no rule
    /// for `kind`.
    pub fn rule_for(&self, kind: ConstructKind) -> Result<&ConstructRule, AnalyzerError> {
        self.rules
            .get(&kind)
            .ok_or_else(|| AnalyzerError::UnknownConstructKind {
                kind: kind.to_string(),
            })
    }

    /// Number of kinds covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_covers_every_kind() {
        let set = RuleSet::standard();
        assert_eq!(set.len(), ConstructKind::ALL.len());
        for kind in ConstructKind::ALL {
            assert_eq!(set.rule_for(kind).unwrap().kind, kind);
        }
    }

    #[test]
    fn standard_table_policies() {
        let set = RuleSet::standard();
        let case = |k| set.rule_for(k).unwrap().case;
        assert_eq!(case(ConstructKind::Variable), CasePolicy::CamelCase);
        assert_eq!(case(ConstructKind::Class), CasePolicy::PascalCase);
        assert_eq!(case(ConstructKind::ClassMember), CasePolicy::CamelCase);
        assert_eq!(case(ConstructKind::EnumMember), CasePolicy::PascalCase);
        assert_eq!(case(ConstructKind::Namespace), CasePolicy::PascalCase);
        assert_eq!(case(ConstructKind::ImportDeclaration), CasePolicy::NoConstraint);
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(RuleSet::standard(), RuleSet::standard()));
    }

    #[test]
    fn missing_kind_is_unknown() {
        let set = RuleSet::new().with_rule(ConstructRule::new(
            ConstructKind::Variable,
            CasePolicy::CamelCase,
        ));
        let err = set.rule_for(ConstructKind::Enum).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownConstructKind { ref kind } if kind == "Enum"));
    }

    #[test]
    fn interface_prefix_needs_word_boundary() {
        let rule = RuleSet::standard()
            .rule_for(ConstructKind::Interface)
            .unwrap();
        assert_eq!(rule.forbidden_prefix_of("IExample"), Some("I"));
        assert_eq!(rule.forbidden_prefix_of("Item"), None);
        assert_eq!(rule.forbidden_prefix_of("I"), None);
        assert_eq!(rule.forbidden_prefix_of("Example"), None);
    }

    #[test]
    fn boxed_types_are_forbidden_on_annotations() {
        let rule = RuleSet::standard()
            .rule_for(ConstructKind::TypeAnnotation)
            .unwrap();
        for name in BOXED_TYPE_NAMES {
            assert!(rule.forbids_type(name));
        }
        assert!(!rule.forbids_type("string"));
        assert!(!rule.forbids_type("Employee"));
    }
}
