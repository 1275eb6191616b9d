//! Built-in default locations, relative to the user config root.

/// Directory and file name of the tool's own settings.
pub(super) const SETTINGS_DIR: &str = "ghostty-ghost";
pub(super) const SETTINGS_FILE: &str = "ghostty-ghost.toml";

pub(super) const DEFAULT_KITTY_CONFIG: &str = "kitty/kitty.conf";
pub(super) const DEFAULT_ALACRITTY_CONFIG: &str = "alacritty/alacritty.toml";
pub(super) const DEFAULT_GHOSTTY_CONFIG: &str = "ghostty/config";

/// Environment variable overriding the target Ghostty config path.
pub const TARGET_ENV: &str = "GHOSTTY_GHOST_TARGET";
/// <https://no-color.org>
pub const NO_COLOR_ENV: &str = "NO_COLOR";
