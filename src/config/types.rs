//! Settings data model.
//!
//! `FileConfig` mirrors the TOML file as written; `Settings` is the resolved
//! form with absolute paths that the rest of the binary consumes.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::convert::TerminalKind;

/// On-disk `ghostty-ghost.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub paths: PathsConfig,
    pub display: DisplayConfig,
}

/// `[paths]`: default locations of each terminal's config.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub kitty: Option<String>,
    pub alacritty: Option<String>,
    /// Ghostty config written when `--target` is not given.
    pub ghostty: Option<String>,
}

/// `[display]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Where the settings text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// `--config PATH`
    Explicit(PathBuf),
    /// `$XDG_CONFIG_HOME/ghostty-ghost/ghostty-ghost.toml`
    Global(PathBuf),
    BuiltInDefaults,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub kitty_path: PathBuf,
    pub alacritty_path: PathBuf,
    pub ghostty_path: PathBuf,
    pub color: bool,
}

impl Settings {
    /// Default source config location for `kind`.
    pub fn source_path(&self, kind: TerminalKind) -> &Path {
        match kind {
            TerminalKind::Kitty => &self.kitty_path,
            TerminalKind::Alacritty => &self.alacritty_path,
        }
    }
}

/// Settings plus where they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
}
