//! # style-lint-core
//!
//! Core engine for checking naming and ordering conventions over a
//! declaration tree.
//!
//! This crate provides the foundational types and the pass driver:
//!
//! - [`SyntaxTree`] / [`SyntaxNode`] for the declarations a front end supplies
//! - [`validate`] and [`CasePolicy`] for identifier casing
//! - [`RuleSet`] mapping each [`ConstructKind`] to its [`ConstructRule`]
//! - [`NodeRule`] and [`TreeRule`] traits for composable checks
//! - [`Analyzer`] for running one pass and producing a [`Report`]
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::{Analyzer, SyntaxTree};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let report = analyzer.analyze(&tree)?;
//! for v in &report {
//!     println!("{v}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod case;
mod classifier;
mod config;
mod construct;
mod context;
mod rule;
mod syntax;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use case::{to_camel_case, to_pascal_case, validate, CasePolicy};
pub use classifier::Classify;
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use construct::{ConstructRule, RuleSet, BOXED_TYPE_NAMES};
pub use context::{NodeContext, TreeContext};
pub use rule::{NodeRule, NodeRuleBox, TreeRule, TreeRuleBox};
pub use syntax::{ConstructKind, Preorder, Span, SyntaxNode, SyntaxTree};
pub use types::{
    DiagnosticRecord, LintResult, Location, Report, Severity, Suggestion, Violation,
    ViolationDiagnostic,
};
