//! Ghostty config serialization with single-generation backups.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::OutputError;

use super::table::is_palette_key;
use super::GhosttyConfig;

/// Suffix appended to the target path for the previous generation.
pub const BACKUP_SUFFIX: &str = ".bak";

/// `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Render entries in ascending key order, one per line.
///
/// Palette composite keys already carry their `=`, so they are followed by
/// two spaces instead of ` = `.
pub fn render_ghostty_config(config: &GhosttyConfig) -> String {
    let mut out = String::new();
    for (key, value) in config.iter() {
        if is_palette_key(key) {
            out.push_str(&format!("{key}  {value}\n"));
        } else {
            out.push_str(&format!("{key} = {value}\n"));
        }
    }
    out
}

/// Write `config` to `path`, returning the backup path when an existing file
/// was moved aside.
///
/// The parent directory is created if needed. An existing `<path>.bak` is
/// replaced. Nothing is rolled back if the final write fails.
pub fn write_ghostty_config(
    path: &Path,
    config: &GhosttyConfig,
) -> Result<Option<PathBuf>, OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let backup = if path.exists() {
        Some(rotate_backup(path)?)
    } else {
        None
    };

    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_ghostty_config(config).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = config.len(), "wrote ghostty config");
    Ok(backup)
}

/// Move `path` to `<path>.bak`, dropping any older backup first.
fn rotate_backup(path: &Path) -> Result<PathBuf, OutputError> {
    let backup = backup_path(path);
    match fs::remove_file(&backup) {
        Ok(()) => debug!(path = %backup.display(), "removed previous backup"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(OutputError::RemoveBackup {
                path: backup,
                source,
            })
        }
    }
    fs::rename(path, &backup).map_err(|source| OutputError::Backup {
        path: backup.clone(),
        source,
    })?;
    debug!(from = %path.display(), to = %backup.display(), "backed up existing config");
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    fn config(pairs: &[(&str, &str)]) -> GhosttyConfig {
        let mut out = GhosttyConfig::new();
        for (k, v) in pairs {
            out.insert(k.to_string(), v.to_string());
        }
        out
    }

    #[test]
    fn renders_sorted_with_palette_exception() {
        let text = render_ghostty_config(&config(&[
            ("font-size", "14"),
            ("palette = 3=", "#ffffff"),
            ("background", "#000000"),
            ("# foo_bar", "baz"),
        ]));
        assert_eq!(
            text,
            "# foo_bar = baz\nbackground = #000000\nfont-size = 14\npalette = 3=  #ffffff\n"
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let fixture = TestTempDir::new("writer-mkdir");
        let target = fixture.child("nested/ghostty/config");
        let backup = write_ghostty_config(&target, &config(&[("font-size", "12")])).unwrap();
        assert_eq!(backup, None);
        assert_eq!(fs::read_to_string(&target).unwrap(), "font-size = 12\n");
    }

    #[test]
    fn second_write_backs_up_first() {
        let fixture = TestTempDir::new("writer-backup");
        let target = fixture.child("config");
        let first = config(&[("font-size", "12"), ("theme", "Dracula")]);
        write_ghostty_config(&target, &first).unwrap();

        let backup = write_ghostty_config(&target, &config(&[("font-size", "16")])).unwrap();
        assert_eq!(backup.as_deref(), Some(backup_path(&target).as_path()));
        assert_eq!(
            fs::read_to_string(backup_path(&target)).unwrap(),
            render_ghostty_config(&first)
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "font-size = 16\n");
    }

    #[test]
    fn keeps_only_one_backup_generation() {
        let fixture = TestTempDir::new("writer-rotate");
        let target = fixture.write_text("config", "generation = 1\n");
        fixture.write_text("config.bak", "generation = 0\n");

        write_ghostty_config(&target, &config(&[("generation", "2")])).unwrap();
        assert_eq!(
            fs::read_to_string(backup_path(&target)).unwrap(),
            "generation = 1\n"
        );
        assert!(!fixture.child("config.bak.bak").exists());
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/home/g/.config/ghostty/config")),
            PathBuf::from("/home/g/.config/ghostty/config.bak")
        );
    }
}
