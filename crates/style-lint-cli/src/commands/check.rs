//! Check command implementation.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use style_lint_core::{Analyzer, AnalyzerConfig, LintResult, Report, Severity};
use style_lint_ts::{SourceFrontend, TypeScriptFrontend};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    fail_on: Option<Severity>,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = super::load_config(source)?;
    config.analyzer.exclude.extend(exclude);

    let analyzer = super::build_analyzer(&config, rules_filter)?;
    let frontend = TypeScriptFrontend::new();

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };

    let files = discover_files(&root, &config.analyzer, &frontend)?;

    tracing::info!(
        "Analyzing {} file(s) under {} with {} rules",
        files.len(),
        root.display(),
        analyzer.rule_count()
    );

    let result = analyze_files(
        &analyzer,
        &frontend,
        &root,
        &files,
        config.analyzer.parallelism,
    )?;

    super::output::print(&result, format, Some(&root))?;
    super::exit_on_failure(&result, fail_on.unwrap_or_else(|| config.fail_threshold()));

    Ok(())
}

/// Walks `root` for files the front end supports, minus excluded paths.
///
/// Returned paths are sorted so reports come out in a stable order.
pub(crate) fn discover_files(
    root: &Path,
    config: &AnalyzerConfig,
    frontend: &dyn SourceFrontend,
) -> Result<Vec<PathBuf>> {
    let excludes: Vec<glob::Pattern> = config
        .exclude
        .iter()
        .filter_map(|pattern| match glob::Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("Ignoring invalid exclude pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(config.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !frontend.supports(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if excludes.iter().any(|p| p.matches_path(rel)) {
            tracing::debug!("Excluded: {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Runs one pass per file, in parallel, keeping results in `files` order.
pub(crate) fn analyze_files(
    analyzer: &Analyzer,
    frontend: &dyn SourceFrontend,
    root: &Path,
    files: &[PathBuf],
    parallelism: Option<usize>,
) -> Result<LintResult> {
    let passes = || -> Result<Vec<Report>> {
        files
            .par_iter()
            .map(|file| check_file(analyzer, frontend, root, file))
            .collect()
    };

    let reports = match parallelism {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?
            .install(passes)?,
        None => passes()?,
    };

    let mut result = LintResult::new();
    for report in reports {
        result.push_report(report);
    }
    Ok(result)
}

fn check_file(
    analyzer: &Analyzer,
    frontend: &dyn SourceFrontend,
    root: &Path,
    file: &Path,
) -> Result<Report> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rel = file.strip_prefix(root).unwrap_or(file);

    let tree = frontend.parse(rel, &source)?;
    analyzer
        .analyze(&tree)
        .with_context(|| format!("Analysis of {} failed", rel.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use style_lint_rules::Preset;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_typescript_sources_only() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/b.ts", "");
        write(tmp.path(), "src/a.tsx", "");
        write(tmp.path(), "src/types.d.ts", "");
        write(tmp.path(), "src/node_modules/pkg/index.ts", "");
        write(tmp.path(), "src/readme.md", "");

        let files = discover_files(
            tmp.path(),
            &AnalyzerConfig::default(),
            &TypeScriptFrontend::new(),
        )
        .unwrap();
        let rel: Vec<&Path> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap())
            .collect();
        assert_eq!(rel, [Path::new("src/a.tsx"), Path::new("src/b.ts")]);
    }

    #[test]
    fn cli_excludes_are_honoured() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/keep.ts", "");
        write(tmp.path(), "generated/api.ts", "");

        let mut config = AnalyzerConfig::default();
        config.exclude.push("generated/**".to_string());
        let files = discover_files(tmp.path(), &config, &TypeScriptFrontend::new()).unwrap();
        assert_eq!(files, [tmp.path().join("src/keep.ts")]);
    }

    #[test]
    fn reports_follow_file_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.ts", "enum Color { red }\n");
        write(tmp.path(), "a.ts", "interface IExample {}\n");

        let frontend = TypeScriptFrontend::new();
        let files = discover_files(tmp.path(), &AnalyzerConfig::default(), &frontend).unwrap();
        let analyzer = Preset::Recommended.builder().build();
        let result = analyze_files(&analyzer, &frontend, tmp.path(), &files, Some(2)).unwrap();

        assert_eq!(result.files_checked, 2);
        let found: Vec<(String, PathBuf)> = result
            .violations
            .iter()
            .map(|v| (v.code.clone(), v.location.file.clone()))
            .collect();
        assert_eq!(
            found,
            [
                ("TS002".to_string(), PathBuf::from("a.ts")),
                ("TS001".to_string(), PathBuf::from("b.ts")),
            ]
        );
    }
}
