//! Language-agnostic front-end trait.
//!
//! `SourceFrontend` is the extension point for adding new languages.
//! Implement it to teach style-lint how to lower a language's source text
//! into the [`SyntaxTree`] the analyzer walks.

use std::path::{Path, PathBuf};

use style_lint_core::SyntaxTree;
use thiserror::Error;

/// Errors raised while turning source text into a syntax tree.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader error message.
        message: String,
    },

    /// The parser produced no tree.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
    },
}

/// Trait for language-specific Tree-sitter lowering.
///
/// The front end receives raw source text and returns a [`SyntaxTree`]
/// rooted at a `Module` node. Syntax errors in the source do not fail the
/// parse; the front end lowers whatever the grammar recovered.
pub trait SourceFrontend: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this front end handles (e.g., `&[".ts", ".tsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Lowers `source`, read from `path`, into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns a [`FrontendError`] if no tree could be produced.
    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree, FrontendError>;

    /// Returns true if `path` has one of this front end's extensions.
    fn supports(&self, path: &Path) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        self.extensions().iter().any(|ext| name.ends_with(ext))
    }
}
