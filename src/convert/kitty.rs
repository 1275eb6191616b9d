//! kitty.conf → Ghostty.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, InputError};

use super::lines::{parse_flat_file, Separator};
use super::mapper::translate;
use super::table::{KITTY_TABLE, KITTY_THEME_TABLE};
use super::theme::{is_kitty_current_theme, kitty_theme_name, RelativeTo, ThemeReference};
use super::{
    config_dir_of, ConfigConverter, ConversionDiagnostics, GhosttyConfig, RawConfig, TerminalKind,
};

/// The key kitty uses to pull in another config file.
const INCLUDE_KEY: &str = "include";
/// Ghostty's named-theme setting.
const THEME_KEY: &str = "theme";

/// Converter for kitty's `key value` format.
#[derive(Debug, Clone)]
pub struct KittyConverter {
    config_dir: PathBuf,
    home: Option<PathBuf>,
}

impl KittyConverter {
    pub fn new(source_path: &Path, home: Option<PathBuf>) -> Self {
        Self {
            config_dir: config_dir_of(source_path),
            home,
        }
    }

    /// Parse and translate the theme kitten's `current-theme.conf`.
    ///
    /// Missing or unreadable theme files are reported and skipped.
    fn load_current_theme(
        &self,
        reference: &str,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<Option<GhosttyConfig>, ConvertError> {
        let reference = ThemeReference::new(reference);
        let Some(path) =
            reference.resolve(&self.config_dir, self.home.as_deref(), RelativeTo::ConfigDir)
        else {
            diagnostics.warn(format!(
                "could not resolve theme `{}`: home directory unknown",
                reference.raw()
            ));
            return Ok(None);
        };
        debug!(path = %path.display(), "reading kitty theme file");

        match parse_flat_file(&path, Separator::Whitespace) {
            Ok(theme) => Ok(Some(translate(&theme, &KITTY_THEME_TABLE))),
            Err(InputError::Read { path, source }) => {
                diagnostics.warn(format!(
                    "theme file {} skipped: {source}",
                    path.display()
                ));
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigConverter for KittyConverter {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Kitty
    }

    fn parse(
        &self,
        path: &Path,
        _diagnostics: &mut ConversionDiagnostics,
    ) -> Result<RawConfig, ConvertError> {
        Ok(parse_flat_file(path, Separator::Whitespace)?)
    }

    fn convert(
        &self,
        config: &RawConfig,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<GhosttyConfig, ConvertError> {
        let mut out = translate(config, &KITTY_TABLE);

        // The generated current-theme file is checked first so that
        // `include themes/current-theme.conf` is not read as a theme name.
        for (key, value) in config {
            if is_kitty_current_theme(value) {
                if let Some(theme) = self.load_current_theme(value, diagnostics)? {
                    out.extend(theme);
                }
            } else if key == INCLUDE_KEY {
                if let Some(name) = kitty_theme_name(value) {
                    out.insert(THEME_KEY.to_string(), name);
                }
            }
        }

        Ok(out)
    }
}
