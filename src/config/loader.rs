//! Top-level settings loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::defaults::{DEFAULT_ALACRITTY_CONFIG, DEFAULT_GHOSTTY_CONFIG, DEFAULT_KITTY_CONFIG};
use super::env::apply_env_overrides;
use super::init::{config_root_dir, expand_home};
use super::sources::read_settings_text;
use super::{FileConfig, LoadedSettings, Settings};

/// Load settings from disk and environment.
///
/// `path_override` is an explicit settings file (from `--config`).
pub fn load_settings(path_override: Option<&Path>) -> Result<LoadedSettings, ConfigError> {
    load_settings_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
        dirs::home_dir(),
    )
}

pub(super) fn load_settings_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
    home: Option<PathBuf>,
) -> Result<LoadedSettings, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_settings_text(path_override, &read_file, &config_root)?;
    debug!(?source, "loading settings");
    let parsed: FileConfig = toml::from_str(&text)?;

    let root = config_root();
    let home = home.as_deref();
    let resolve = |configured: Option<&String>, fallback: &str| -> Result<PathBuf, ConfigError> {
        match configured {
            Some(raw) => expand_home(raw, home),
            None => root.as_ref().map(|dir| dir.join(fallback)).ok_or_else(|| {
                ConfigError::Invalid(
                    "unable to resolve the user config directory; set XDG_CONFIG_HOME or HOME"
                        .to_string(),
                )
            }),
        }
    };

    let mut settings = Settings {
        kitty_path: resolve(parsed.paths.kitty.as_ref(), DEFAULT_KITTY_CONFIG)?,
        alacritty_path: resolve(parsed.paths.alacritty.as_ref(), DEFAULT_ALACRITTY_CONFIG)?,
        ghostty_path: resolve(parsed.paths.ghostty.as_ref(), DEFAULT_GHOSTTY_CONFIG)?,
        color: parsed.display.color,
    };
    apply_env_overrides(&mut settings, &env_lookup, home)?;

    Ok(LoadedSettings { settings, source })
}
