//! Configuration file resolution with global fallback.
//!
//! Resolution order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `style-lint.toml` or `.style-lint.toml` in the checked directory or the
//!    nearest ancestor, stopping at the repository root (a directory holding
//!    `.git`)
//! 3. `~/.style-lint/config.toml` (global fallback)
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the checked directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.style-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, preferred first.
const PROJECT_CONFIG_NAMES: &[&str] = &["style-lint.toml", ".style-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for a check of `target` (a file or directory).
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(target, explicit, global_config_dir())
}

fn resolve_inner(
    target: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(target) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// Searches `target` and its ancestors up to the repository root.
fn find_project_config(target: &Path) -> Option<PathBuf> {
    let start = if target.is_file() {
        target.parent()?
    } else {
        target
    };
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };
    // Relative targets like "." have no ancestors to walk otherwise.
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    for dir in start.ancestors() {
        let found = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        if found.is_some() {
            return found;
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Returns the global config directory path.
///
/// Resolution: `$STYLE_LINT_CONFIG_DIR` > `~/.style-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("STYLE_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".style-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temp dir marked as a repository root, so the upward search never
    /// escapes into the host filesystem.
    fn repo() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        tmp
    }

    fn canonical(p: &Path) -> PathBuf {
        p.canonicalize().unwrap()
    }

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let tmp = repo();
        fs::write(tmp.path().join("style-lint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = repo();
        fs::write(tmp.path().join("style-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".style-lint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(canonical(tmp.path()).join("style-lint.toml"))
        );
    }

    #[test]
    fn nearest_ancestor_config_is_used() {
        let tmp = repo();
        fs::write(tmp.path().join(".style-lint.toml"), "").unwrap();
        let nested = tmp.path().join("packages/web/src");
        fs::create_dir_all(&nested).unwrap();

        let result = resolve_inner(&nested, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(canonical(tmp.path()).join(".style-lint.toml"))
        );
    }

    #[test]
    fn file_target_searches_from_its_directory() {
        let tmp = repo();
        fs::write(tmp.path().join("style-lint.toml"), "").unwrap();
        let file = tmp.path().join("main.ts");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            resolve_inner(&file, None, None),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn search_stops_at_repository_root() {
        let outer = TempDir::new().unwrap();
        fs::write(outer.path().join("style-lint.toml"), "").unwrap();
        let inner = outer.path().join("checkout");
        fs::create_dir_all(inner.join(".git")).unwrap();

        assert_eq!(resolve_inner(&inner, None, None), ConfigSource::Default);
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = repo();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
    }

    #[test]
    fn global_dir_without_config_file_returns_default() {
        let project = repo();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
    }

    #[test]
    fn config_source_accessors() {
        let p = PathBuf::from("/tmp/test.toml");
        assert_eq!(ConfigSource::Project(p.clone()).path(), Some(p.as_path()));
        assert!(ConfigSource::Default.path().is_none());
        assert!(ConfigSource::Global(p).is_global());
        assert!(!ConfigSource::Default.is_global());
    }
}
