//! Check-tree command: analyze a tree produced by an external parser.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use style_lint_core::{LintResult, Severity, SyntaxTree};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check-tree command.
pub fn run(
    input: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    fail_on: Option<Severity>,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let analyzer = super::build_analyzer(&config, rules_filter)?;

    let json = read_input(input)?;
    let tree = SyntaxTree::from_json(&json).context("Invalid syntax tree")?;

    tracing::info!(
        "Analyzing tree for {} with {} rules",
        tree.path.display(),
        analyzer.rule_count()
    );

    let report = analyzer.analyze(&tree).context("Analysis failed")?;
    let mut result = LintResult::new();
    result.push_report(report);

    super::output::print(&result, format, None)?;
    super::exit_on_failure(&result, fail_on.unwrap_or_else(|| config.fail_threshold()));

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read tree from stdin")?;
        return Ok(json);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}
