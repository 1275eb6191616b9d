//! The tool's own settings, loaded from TOML and the environment.
//!
//! Precedence (highest wins):
//! 1. CLI flags (applied by the caller)
//! 2. Environment: `GHOSTTY_GHOST_TARGET`, `NO_COLOR`
//! 3. `--config PATH`, else `$XDG_CONFIG_HOME/ghostty-ghost/ghostty-ghost.toml`
//!    (or `~/.config/...`)
//! 4. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use defaults::{NO_COLOR_ENV, TARGET_ENV};
pub use init::{config_root_dir, expand_home};
pub use loader::load_settings;
pub use types::{
    DisplayConfig, FileConfig, LoadedSettings, PathsConfig, Settings, SettingsSource,
};
