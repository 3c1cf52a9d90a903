//! Shared output formatting for lint results.

use anyhow::Result;
use miette::NamedSource;
use serde::Serialize;
use std::path::Path;
use style_lint_core::{DiagnosticRecord, LintResult, Severity, ViolationDiagnostic};

use crate::OutputFormat;

/// JSON shape of a run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    files_checked: usize,
    violations: Vec<DiagnosticRecord>,
}

/// Print lint results in the specified format.
///
/// `root` is where violation paths are relative to; `pretty` reads sources
/// from there to show snippets.
pub fn print(result: &LintResult, format: OutputFormat, root: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    print!("{}", render_text(result));
}

/// Renders the coloured text report: one block per violation, then totals.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let label = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };
        out.push_str(&violation.format_with(label));
        out.push('\n');
    }

    let (errors, warnings) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    out.push_str(&format!("{summary_color}{}\x1b[0m\n", result.summary()));
    out
}

fn print_json(result: &LintResult) -> Result<()> {
    let output = JsonOutput {
        files_checked: result.files_checked,
        violations: result.records(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_pretty(result: &LintResult, root: Option<&Path>) {
    for violation in &result.violations {
        let diagnostic = miette::Report::new(ViolationDiagnostic::from(violation));
        let file = &violation.location.file;
        let source = root.and_then(|r| std::fs::read_to_string(r.join(file)).ok());

        let report = match source {
            Some(text) => {
                diagnostic.with_source_code(NamedSource::new(file.to_string_lossy(), text))
            }
            None => diagnostic,
        };
        println!("{report:?}");
    }

    println!("{}", result.summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use style_lint_core::{Location, Report, Suggestion, Violation};

    #[test]
    fn text_report_colours_severity_and_summary() {
        let violation = Violation::new(
            "TS005",
            "member-order",
            Severity::Warning,
            Location::new(PathBuf::from("widget.ts"), 2, 3),
            "Member 'c' is out of alphabetical order",
        )
        .with_suggestion(Suggestion::new("Move 'b' before 'c'"));
        let mut result = LintResult::new();
        result.push_report(Report::collect(Vec::new(), vec![violation]));

        let text = render_text(&result);
        assert!(text.starts_with("TS005 member-order at widget.ts:2:3\n"));
        assert!(text.contains("  \x1b[33mwarning\x1b[0m: Member 'c' is out of alphabetical order\n"));
        assert!(text.contains("  = help: Move 'b' before 'c'\n"));
        assert!(text.ends_with("\x1b[33mFound 0 error(s), 1 warning(s) in 1 file(s)\x1b[0m\n"));
    }

    #[test]
    fn empty_text_report_is_green_summary_only() {
        let mut result = LintResult::new();
        result.push_report(Report::default());
        assert_eq!(
            render_text(&result),
            "\x1b[32mFound 0 error(s), 0 warning(s) in 1 file(s)\x1b[0m\n"
        );
    }
}
