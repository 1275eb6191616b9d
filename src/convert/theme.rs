//! Theme reference detection and path resolution.
//!
//! Both source formats can point at a separate theme file. Detection is
//! per-format; resolution rules and the recursion bound are shared.

use std::path::{Component, Path, PathBuf};

use crate::error::ThemeError;

use super::RawConfig;

/// Deepest nesting level a theme reference may be followed to. The
/// top-level source file is depth 0.
pub const MAX_THEME_DEPTH: usize = 2;

/// Kitty `include` values under this directory name a bundled theme.
pub const KITTY_THEMES_DIR_MARKER: &str = "themes/";
/// Kitty's theme kitten writes the active theme to this file.
pub const KITTY_CURRENT_THEME_MARKER: &str = "current-theme.conf";
const KITTY_THEME_EXTENSION: &str = ".conf";

/// Alacritty theme imports must end with this extension.
pub const ALACRITTY_THEME_EXTENSION: &str = ".toml";
/// Only keys containing this marker are merged back from an Alacritty theme.
pub const COLOR_KEY_MARKER: &str = "colors";

const HOME_MARKER: char = '~';
const RELATIVE_MARKER: char = '.';

/// Where a bare (unmarked, relative) reference is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTo {
    /// The directory holding the source config.
    ConfigDir,
    /// The user's home directory.
    Home,
}

/// A value that points at another config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeReference<'a> {
    raw: &'a str,
}

impl<'a> ThemeReference<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    /// The reference exactly as it appeared in the source.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Resolve to an absolute, lexically cleaned path.
    ///
    /// `~` expands against `home`; absolute paths are kept; `.`-prefixed
    /// paths join `config_dir`; anything else joins the `bare` anchor.
    /// Returns `None` when the home directory is needed but unknown.
    pub fn resolve(
        &self,
        config_dir: &Path,
        home: Option<&Path>,
        bare: RelativeTo,
    ) -> Option<PathBuf> {
        let raw = self.raw;
        let joined = if let Some(rest) = raw.strip_prefix(HOME_MARKER) {
            home?.join(rest.trim_start_matches(['/', '\\']))
        } else if Path::new(raw).is_absolute() {
            PathBuf::from(raw)
        } else if raw.starts_with(RELATIVE_MARKER) {
            config_dir.join(raw)
        } else {
            match bare {
                RelativeTo::ConfigDir => config_dir.join(raw),
                RelativeTo::Home => home?.join(raw),
            }
        };
        Some(clean_path(&joined))
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Theme name for `include themes/<Name>.conf`.
pub fn kitty_theme_name(include_value: &str) -> Option<String> {
    if !include_value.contains(KITTY_THEMES_DIR_MARKER) {
        return None;
    }
    let file = include_value.rsplit(['/', '\\']).next()?;
    let name = file.strip_suffix(KITTY_THEME_EXTENSION).unwrap_or(file).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Whether a kitty value points at the theme kitten's generated file.
pub fn is_kitty_current_theme(value: &str) -> bool {
    value.contains(KITTY_CURRENT_THEME_MARKER)
}

/// Extract the themes paths named on one Alacritty line, in order.
///
/// Matches `import = ["~/.config/alacritty/themes/x.toml"]`, single-line
/// lists with several entries, and the bare array-element lines of a
/// multi-line import list.
pub fn alacritty_theme_paths(line: &str) -> Vec<&str> {
    let line = line.trim();
    let candidate = match line.split_once('=') {
        Some((key, value)) if !key.contains(['"', '\'']) => value,
        _ => line,
    };
    candidate
        .split(',')
        .map(|entry| {
            entry.trim_matches(|c: char| {
                matches!(c, '[' | ']' | '"' | '\'') || c.is_whitespace()
            })
        })
        .filter(|path| is_alacritty_theme_path(path))
        .collect()
}

fn is_alacritty_theme_path(path: &str) -> bool {
    let in_theme_dir = path.contains("themes/") || path.contains("/theme/");
    in_theme_dir && path.ends_with(ALACRITTY_THEME_EXTENSION)
}

/// Fail when a parse at `depth` would go past [`MAX_THEME_DEPTH`].
pub fn check_depth(path: &Path, depth: usize) -> Result<(), ThemeError> {
    if depth > MAX_THEME_DEPTH {
        return Err(ThemeError::DepthExceeded {
            path: path.to_path_buf(),
            limit: MAX_THEME_DEPTH,
        });
    }
    Ok(())
}

/// Merge the color keys of a parsed theme into `parent`, discarding the rest.
/// Returns the number of keys merged.
pub fn merge_color_keys(parent: &mut RawConfig, theme: RawConfig) -> usize {
    let mut merged = 0usize;
    for (key, value) in theme {
        if key.contains(COLOR_KEY_MARKER) {
            parent.insert(key, value);
            merged += 1;
        }
    }
    merged
}
