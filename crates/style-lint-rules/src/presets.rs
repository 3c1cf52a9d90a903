//! Rule presets and the built-in rule registry.

use style_lint_core::{AnalyzerBuilder, NodeRuleBox, Severity, TreeRuleBox};

use crate::{ImportOrder, MemberOrder, NamingCase, NoBoxedTypes, NoInterfacePrefix};

/// A built-in rule of either flavor.
pub enum BuiltinRule {
    /// Evaluated on every node.
    Node(NodeRuleBox),
    /// Evaluated once per tree.
    Tree(TreeRuleBox),
}

impl BuiltinRule {
    /// Rule id.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Node(r) => r.name(),
            Self::Tree(r) => r.name(),
        }
    }

    /// Rule code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Node(r) => r.code(),
            Self::Tree(r) => r.code(),
        }
    }

    /// Short description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Node(r) => r.description(),
            Self::Tree(r) => r.description(),
        }
    }

    /// Default severity.
    #[must_use]
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::Node(r) => r.default_severity(),
            Self::Tree(r) => r.default_severity(),
        }
    }

    /// Registers this rule with an analyzer builder.
    #[must_use]
    pub fn register(self, builder: AnalyzerBuilder) -> AnalyzerBuilder {
        match self {
            Self::Node(r) => builder.rule_box(r),
            Self::Tree(r) => builder.tree_rule_box(r),
        }
    }
}

/// Preset configurations for style-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Every rule at its default severity.
    #[default]
    Recommended,
    /// Every rule at `error`.
    Strict,
    /// Naming case only, for gradual adoption.
    Minimal,
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("unknown preset '{other}'")),
        }
    }
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<BuiltinRule> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Returns a builder with this preset's rules registered.
    #[must_use]
    pub fn builder(self) -> AnalyzerBuilder {
        self.rules()
            .into_iter()
            .fold(AnalyzerBuilder::new(), |b, r| r.register(b))
    }
}

/// Returns the recommended set of rules.
///
/// Node rules first, then import order before member order, which fixes
/// the order ordering findings appear in a report.
#[must_use]
pub fn recommended_rules() -> Vec<BuiltinRule> {
    vec![
        BuiltinRule::Node(Box::new(NamingCase::new())),
        BuiltinRule::Node(Box::new(NoInterfacePrefix::new())),
        BuiltinRule::Node(Box::new(NoBoxedTypes::new())),
        BuiltinRule::Tree(Box::new(ImportOrder::new())),
        BuiltinRule::Tree(Box::new(MemberOrder::new())),
    ]
}

/// Returns the strict set of rules: everything at `error`.
#[must_use]
pub fn strict_rules() -> Vec<BuiltinRule> {
    vec![
        BuiltinRule::Node(Box::new(NamingCase::new())),
        BuiltinRule::Node(Box::new(NoInterfacePrefix::new().severity(Severity::Error))),
        BuiltinRule::Node(Box::new(NoBoxedTypes::new())),
        BuiltinRule::Tree(Box::new(ImportOrder::new().severity(Severity::Error))),
        BuiltinRule::Tree(Box::new(MemberOrder::new().severity(Severity::Error))),
    ]
}

/// Returns the minimal set of rules.
#[must_use]
pub fn minimal_rules() -> Vec<BuiltinRule> {
    vec![BuiltinRule::Node(Box::new(NamingCase::new()))]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<BuiltinRule> {
    recommended_rules()
}

/// Looks up a built-in rule by id (`naming-case`) or code (`TS001`).
#[must_use]
pub fn rule_by_id(id: &str) -> Option<BuiltinRule> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == id || r.code().eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_rules() {
        assert_eq!(Preset::Recommended.rules().len(), 5);
        assert_eq!(Preset::Strict.rules().len(), 5);
        assert_eq!(Preset::Minimal.rules().len(), 1);
        assert_eq!(Preset::Recommended.builder().build().rule_count(), 5);
    }

    #[test]
    fn strict_is_all_errors() {
        assert!(Preset::Strict
            .rules()
            .iter()
            .all(|r| r.default_severity() == Severity::Error));
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("strict".parse::<Preset>(), Ok(Preset::Strict));
        assert!("lenient".parse::<Preset>().is_err());
    }

    #[test]
    fn lookup_by_name_or_code() {
        assert_eq!(rule_by_id("member-order").map(|r| r.code()), Some("TS005"));
        assert_eq!(rule_by_id("ts002").map(|r| r.name()), Some("no-interface-prefix"));
        assert!(rule_by_id("no-such-rule").is_none());
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = all_rules().iter().map(BuiltinRule::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all_rules().len());
    }
}
