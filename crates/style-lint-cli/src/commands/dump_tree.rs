//! Dump-tree command: show what the front end hands to the analyzer.

use anyhow::{bail, Context, Result};
use std::path::Path;
use style_lint_ts::{SourceFrontend, TypeScriptFrontend};

/// Runs the dump-tree command.
pub fn run(file: &Path) -> Result<()> {
    let frontend = TypeScriptFrontend::new();
    if !frontend.supports(file) {
        bail!(
            "{} is not a {} source (expected one of {})",
            file.display(),
            frontend.language_id(),
            frontend.extensions().join(", ")
        );
    }

    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let tree = frontend.parse(file, &source)?;

    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
