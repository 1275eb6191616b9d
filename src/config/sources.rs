//! Settings-file discovery.
//!
//! An explicit `--config` path must exist. The global file is optional; when
//! it is absent the built-in defaults apply.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::init::settings_path_under;
use super::SettingsSource;

/// Read settings text from the highest-precedence available source.
pub(super) fn read_settings_text<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, SettingsSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        let text = read_file(path)?;
        return Ok((text, SettingsSource::Explicit(path.to_path_buf())));
    }

    if let Some(root) = config_root() {
        let global = settings_path_under(&root);
        match read_file(&global) {
            Ok(text) => return Ok((text, SettingsSource::Global(global))),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok((String::new(), SettingsSource::BuiltInDefaults))
}
