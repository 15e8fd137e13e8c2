//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MenuTreeError, MenuTreeResult};
use crate::search::MatchMode;

use super::types::{Config, OutputFormat};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "menu-tree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, if the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuTreeError::Config {
        file: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    debug!(file = %path.display(), "loaded config");
    Ok((config, warnings))
}

/// Load from the explicit file, the project file, the user file, or defaults.
///
/// An explicit file must exist. The project and user files are optional.
/// Environment overrides are applied on top of whichever source won.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> MenuTreeResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let project_config = project_dir.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config_dir) = dirs_config_dir() {
        let user_config = user_config_dir.join("menu-tree/config.toml");
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (MENU_TREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`. Unparseable values are logged and ignored.
pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // MENU_TREE_SEARCH_MODE
    if let Some(mode) = lookup("MENU_TREE_SEARCH_MODE") {
        match mode.parse::<MatchMode>() {
            Ok(mode) => config.search.mode = mode,
            Err(err) => warn!("ignoring MENU_TREE_SEARCH_MODE: {err}"),
        }
    }

    // MENU_TREE_MAX_DEPTH
    if let Some(depth) = lookup("MENU_TREE_MAX_DEPTH") {
        match depth.trim().parse::<usize>() {
            Ok(depth) if depth > 0 => config.tree.max_depth = depth,
            _ => warn!("ignoring MENU_TREE_MAX_DEPTH: '{depth}' is not a positive number"),
        }
    }

    // MENU_TREE_OUTPUT
    if let Some(format) = lookup("MENU_TREE_OUTPUT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    // MENU_TREE_UNICODE
    if let Some(val) = lookup("MENU_TREE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(needle)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["search", "mode", "tree", "max_depth", "output", "format", "unicode"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
