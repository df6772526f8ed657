//! Configuration and menu-file loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::value_objects::{ConfigWarning, ResolverOptions};
use crate::error::{MenuError, MenuResult};

use super::types::{Config, MenuFile};

/// Overrides the user config location
pub const ENV_CONFIG_PATH: &str = "TREEMENU_CONFIG";
/// Payload key for identity injection
pub const ENV_INJECT_ID_KEY: &str = "TREEMENU_INJECT_ID_KEY";
/// ASCII-only output (`1`/`true`)
pub const ENV_ASCII: &str = "TREEMENU_ASCII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> MenuResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(MenuError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }
}

/// Deserialize `content`, collecting every key serde skipped.
fn parse_tracking_unknown<T: DeserializeOwned>(
    format: Format,
    content: &str,
    path: &Path,
) -> MenuResult<(T, Vec<String>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let invalid = |message: String| MenuError::InvalidMenuFile {
        file: path.to_path_buf(),
        message,
    };

    let value = match format {
        Format::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
        Format::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let value =
                serde_ignored::deserialize(&mut deserializer, |p| unknown_paths.push(p.to_string()))
                    .map_err(|e| invalid(e.to_string()))?;
            deserializer.end().map_err(|e| invalid(e.to_string()))?;
            value
        }
        Format::Yaml => {
            let deserializer = serde_yaml_ng::Deserializer::from_str(content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
    };

    Ok((value, unknown_paths))
}

fn to_warnings(unknown_paths: Vec<String>, content: &str, path: &Path) -> Vec<ConfigWarning> {
    unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect()
}

/// Load a menu definition and collect non-fatal warnings (e.g. unknown keys).
pub fn load_menu_file(path: &Path) -> MenuResult<(MenuFile, Vec<ConfigWarning>)> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let (file, unknown) = parse_tracking_unknown::<MenuFile>(format, &content, path)?;
    let warnings = to_warnings(unknown, &content, path);

    tracing::debug!(
        file = %path.display(),
        entries = file.menu.len(),
        warnings = warnings.len(),
        "loaded menu file"
    );
    Ok((file, warnings))
}

/// Load a user config file (TOML).
pub fn load_config(path: &Path) -> MenuResult<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// User config if present, defaults otherwise, with environment overrides.
pub fn load_or_default() -> Config {
    let config = user_config_path()
        .filter(|path| path.exists())
        .and_then(|path| match load_config(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable user config");
                None
            }
        })
        .unwrap_or_default();

    with_env_overrides(config)
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("treemenu").join("config.toml"))
}

/// Apply environment variable overrides (TREEMENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(mut config: Config, env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(ascii) = env(ENV_ASCII) {
        config.ui.ascii = parse_flag(&ascii);
    }
    config
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Resolver options in precedence order: CLI flags, `TREEMENU_*`
/// environment, the menu file's `[resolver]` table, the user config.
pub fn effective_options(
    cli: ResolverOptions,
    menu_file: &ResolverOptions,
    user: &ResolverOptions,
) -> ResolverOptions {
    effective_options_with(cli, menu_file, user, |key| std::env::var(key).ok())
}

pub(crate) fn effective_options_with(
    cli: ResolverOptions,
    menu_file: &ResolverOptions,
    user: &ResolverOptions,
    env: impl Fn(&str) -> Option<String>,
) -> ResolverOptions {
    let from_env = ResolverOptions {
        inject_id_key: env(ENV_INJECT_ID_KEY).filter(|key| !key.is_empty()),
    };
    cli.or(from_env).or(menu_file.clone()).or(user.clone())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolver",
        "inject_id_key",
        "menu",
        "label",
        "resolve",
        "data",
        "children",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
