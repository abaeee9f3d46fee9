//! Configuration loading for no-private-methods
//!
//! Loads configuration from the pyproject.toml [tool.no-private-methods]
//! section. Configuration can disable rules or exclude paths; it cannot
//! change what a rule reports.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Rule IDs to disable (e.g. ["NPM100"])
    #[serde(default)]
    pub disable: Vec<String>,

    /// Path patterns to exclude from linting
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Directories no linter should descend into
const DEFAULT_EXCLUDES: &[&str] = &[
    ".venv",
    "venv",
    "__pycache__",
    ".git",
    ".tox",
    "build",
    "dist",
    ".pytest_cache",
    ".ruff_cache",
    "node_modules",
];

/// Find a pyproject.toml with a [tool.no-private-methods] section,
/// walking up from a starting path
pub fn find_config_pyproject_toml(start_path: &Path) -> Option<PathBuf> {
    let mut current = if start_path.is_file() {
        start_path.parent()?
    } else {
        start_path
    };

    loop {
        let pyproject = current.join("pyproject.toml");
        if pyproject.exists() && read_tool_section(&pyproject).is_some() {
            return Some(pyproject);
        }

        current = current.parent()?;
    }
}

fn read_tool_section(pyproject: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(pyproject).ok()?;
    let value: toml::Value = toml::from_str(&content).ok()?;
    value.get("tool")?.get("no-private-methods").cloned()
}

/// Load configuration from pyproject.toml
pub fn load_config(path: Option<&Path>) -> Option<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p.to_path_buf(),
        Some(_) => return None,
        None => find_config_pyproject_toml(&std::env::current_dir().ok()?)?,
    };

    read_tool_section(&config_path)?.try_into().ok()
}

/// Merge command line arguments with config file settings.
/// Command line arguments take precedence. Returns the set of disabled
/// rule IDs and the exclude patterns (always including the defaults).
pub fn merge_config(
    config: Option<&Config>,
    cli_disable: &[String],
    cli_skip: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut disable = vec![];
    let mut exclude = vec![];

    if let Some(cfg) = config {
        if cli_disable.is_empty() {
            disable.extend(cfg.disable.iter().cloned());
        }
        exclude.extend(cfg.exclude.iter().cloned());
    }

    disable.extend(cli_disable.iter().cloned());
    exclude.extend(cli_skip.iter().cloned());

    for default in DEFAULT_EXCLUDES {
        if !exclude.iter().any(|pattern| pattern == default) {
            exclude.push((*default).to_string());
        }
    }

    (disable, exclude)
}
