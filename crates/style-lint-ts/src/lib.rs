//! # style-lint-ts
//!
//! Tree-sitter based TypeScript front end for style-lint.
//!
//! Parses `.ts`, `.tsx`, `.mts` and `.cts` sources and lowers them into the
//! `style-lint-core` [`SyntaxTree`](style_lint_core::SyntaxTree):
//!
//! - [`SourceFrontend`] trait for pluggable language support
//! - [`TypeScriptFrontend`] for TypeScript and TSX
//!
//! ```ignore
//! use style_lint_ts::{SourceFrontend, TypeScriptFrontend};
//!
//! let tree = TypeScriptFrontend::new().parse(path, &source)?;
//! let report = analyzer.analyze(&tree)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod frontend;
pub mod typescript;

pub use frontend::{FrontendError, SourceFrontend};
pub use typescript::TypeScriptFrontend;
