//! # style-lint-rules
//!
//! Built-in naming and ordering rules for style-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TS001 | `naming-case` | camelCase / PascalCase per construct kind |
//! | TS002 | `no-interface-prefix` | Forbids `I`-prefixed interface names |
//! | TS003 | `no-boxed-types` | Forbids `Number`, `String`, `Boolean`, `Symbol`, `Object` annotations |
//! | TS004 | `import-order` | External imports before relative, each group sorted |
//! | TS005 | `member-order` | Class, interface and type members sorted by name |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_rules::{analyze, Preset};
//!
//! let report = analyze(&tree)?;
//!
//! let analyzer = Preset::Strict.builder().config(config).build();
//! let report = analyzer.analyze(&tree)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boxed_type;
mod import_order;
mod interface_prefix;
mod member_order;
mod naming_case;
mod ordering;
mod presets;

pub use boxed_type::NoBoxedTypes;
pub use import_order::{expected_import_order, ImportGroup, ImportOrder};
pub use interface_prefix::NoInterfacePrefix;
pub use member_order::MemberOrder;
pub use naming_case::NamingCase;
pub use presets::{
    all_rules, minimal_rules, recommended_rules, rule_by_id, strict_rules, BuiltinRule, Preset,
};

/// Re-export core types for convenience.
pub use style_lint_core::{Analyzer, AnalyzerError, Report, Severity, SyntaxTree, Violation};

/// Runs one pass over `tree` with the recommended rules.
///
/// # Errors
///
/// Returns an [`AnalyzerError`] if the tree is structurally invalid.
pub fn analyze(tree: &SyntaxTree) -> Result<Report, AnalyzerError> {
    Preset::Recommended.builder().build().analyze(tree)
}
