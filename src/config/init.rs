//! Config-root discovery and path expansion helpers.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{SETTINGS_DIR, SETTINGS_FILE};

/// `$XDG_CONFIG_HOME`, else `~/.config`, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// `<config root>/ghostty-ghost/ghostty-ghost.toml`
pub(super) fn settings_path_under(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Expand a leading `~` against `home`. Other paths are returned unchanged.
pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::Invalid("empty path".to_string()));
    }
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(raw)),
    };
    let home = home.ok_or_else(|| {
        ConfigError::Invalid(format!("cannot expand `{raw}`: home directory unknown"))
    })?;
    Ok(if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    })
}
