//! Subcommand implementations and the pieces they share.

pub mod check;
pub mod check_tree;
pub mod dump_tree;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use style_lint_core::{Analyzer, Config, LintResult, Severity};
use style_lint_rules::{rule_by_id, BuiltinRule, Preset};

use crate::config_resolver::ConfigSource;

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Builds an analyzer from the configured preset, or from an explicit rule list.
pub fn build_analyzer(config: &Config, rules_filter: Option<&str>) -> Result<Analyzer> {
    let rules = match rules_filter {
        Some(filter) => filter_rules(filter),
        None => preset_of(config)?.rules(),
    };
    let builder = rules
        .into_iter()
        .fold(Analyzer::builder(), |b, rule| rule.register(b));
    Ok(builder.config(config.clone()).build())
}

fn preset_of(config: &Config) -> Result<Preset> {
    let preset = config
        .preset
        .as_deref()
        .map(str::parse::<Preset>)
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    tracing::debug!("Using preset: {:?}", preset);
    Ok(preset)
}

fn filter_rules(filter: &str) -> Vec<BuiltinRule> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let rule = rule_by_id(name);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}

/// Exits with status 1 when the result crosses the failure threshold.
pub fn exit_on_failure(result: &LintResult, threshold: Severity) {
    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_ids_and_codes() {
        let names: Vec<&str> = filter_rules("naming-case, TS005,bogus,")
            .iter()
            .map(BuiltinRule::name)
            .collect();
        assert_eq!(names, ["naming-case", "member-order"]);
    }

    #[test]
    fn preset_comes_from_config() {
        let config = Config::parse("preset = \"minimal\"").unwrap();
        assert_eq!(build_analyzer(&config, None).unwrap().rule_count(), 1);
        assert_eq!(build_analyzer(&Config::default(), None).unwrap().rule_count(), 5);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let config = Config::parse("preset = \"lenient\"").unwrap();
        assert!(build_analyzer(&config, None).is_err());
    }

    #[test]
    fn rule_filter_overrides_preset() {
        let config = Config::parse("preset = \"minimal\"").unwrap();
        let analyzer = build_analyzer(&config, Some("import-order,member-order")).unwrap();
        assert_eq!(analyzer.rule_count(), 2);
    }
}
