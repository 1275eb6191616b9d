//! alacritty.toml → Ghostty.
//!
//! The source is read line by line rather than as TOML: section headers
//! qualify the keys that follow them, inline tables are reduced by the
//! value heuristics in [`super::normalize`], and theme imports are followed
//! recursively up to [`MAX_THEME_DEPTH`](super::theme::MAX_THEME_DEPTH).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, InputError};

use super::lines::{
    classify_line, read_source, strip_matching_quotes, Line, Separator, COMMENT_MARKER,
};
use super::mapper::{apply_derived, translate, ALACRITTY_DERIVED};
use super::normalize::{flatten_key, normalize_value, section_header};
use super::table::ALACRITTY_TABLE;
use super::theme::{
    alacritty_theme_paths, check_depth, merge_color_keys, RelativeTo, ThemeReference,
};
use super::{
    config_dir_of, ConfigConverter, ConversionDiagnostics, GhosttyConfig, RawConfig, TerminalKind,
};

/// Converter for Alacritty's sectioned `key = value` format.
#[derive(Debug, Clone)]
pub struct AlacrittyConverter {
    config_dir: PathBuf,
    home: Option<PathBuf>,
}

impl AlacrittyConverter {
    pub fn new(source_path: &Path, home: Option<PathBuf>) -> Self {
        Self {
            config_dir: config_dir_of(source_path),
            home,
        }
    }

    /// Parse `path` as a file nested `depth` theme imports below the
    /// top-level config.
    pub fn parse_at_depth(
        &self,
        path: &Path,
        depth: usize,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<RawConfig, ConvertError> {
        check_depth(path, depth)?;
        let text = read_source(path)?;

        let mut config = RawConfig::new();
        let mut section = String::new();
        let mut theme_refs = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let themes = alacritty_theme_paths(line);
            if !themes.is_empty() {
                theme_refs.extend(themes.into_iter().map(str::to_string));
                continue;
            }
            if let Some(name) = section_header(line) {
                section = name.to_string();
                continue;
            }
            match classify_line(line, Separator::Equals) {
                Line::Skip => {}
                Line::EmptyKey => {
                    return Err(InputError::EmptyKey {
                        path: path.to_path_buf(),
                        line: idx + 1,
                    }
                    .into())
                }
                Line::Pair { key, value } => {
                    let key = flatten_key(&section, key);
                    if key.is_empty() {
                        continue;
                    }
                    let value = normalize_value(strip_matching_quotes(value));
                    config.insert(key, value);
                }
            }
        }

        for raw in &theme_refs {
            self.merge_theme(&mut config, raw, depth, diagnostics)?;
        }
        Ok(config)
    }

    /// Follow one theme import and merge its color keys into `config`.
    fn merge_theme(
        &self,
        config: &mut RawConfig,
        raw: &str,
        depth: usize,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<(), ConvertError> {
        let reference = ThemeReference::new(raw);
        let Some(theme_path) =
            reference.resolve(&self.config_dir, self.home.as_deref(), RelativeTo::Home)
        else {
            diagnostics.warn(format!(
                "could not resolve theme `{}`: home directory unknown",
                reference.raw()
            ));
            return Ok(());
        };
        debug!(
            path = %theme_path.display(),
            depth = depth + 1,
            "following alacritty theme import"
        );

        match self.parse_at_depth(&theme_path, depth + 1, diagnostics) {
            Ok(theme) => {
                let merged = merge_color_keys(config, theme);
                debug!(path = %theme_path.display(), merged, "merged theme colors");
                Ok(())
            }
            Err(ConvertError::Input(InputError::Read { path, source })) => {
                diagnostics.warn(format!(
                    "theme file {} skipped: {source}",
                    path.display()
                ));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl ConfigConverter for AlacrittyConverter {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Alacritty
    }

    fn parse(
        &self,
        path: &Path,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<RawConfig, ConvertError> {
        self.parse_at_depth(path, 0, diagnostics)
    }

    fn convert(
        &self,
        config: &RawConfig,
        _diagnostics: &mut ConversionDiagnostics,
    ) -> Result<GhosttyConfig, ConvertError> {
        let mut out = translate(config, &ALACRITTY_TABLE);
        apply_derived(config, &mut out, ALACRITTY_DERIVED);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::testsupport::TestTempDir;

    fn parse_text(
        fixture: &TestTempDir,
        text: &str,
    ) -> (Result<RawConfig, ConvertError>, ConversionDiagnostics) {
        let source = fixture.write_text("alacritty/alacritty.toml", text);
        let converter = AlacrittyConverter::new(&source, Some(fixture.child("home")));
        let mut diagnostics = ConversionDiagnostics::default();
        let parsed = converter.parse(&source, &mut diagnostics);
        (parsed, diagnostics)
    }

    #[test]
    fn sections_qualify_keys_and_values_are_normalized() {
        let fixture = TestTempDir::new("alacritty-sections");
        let (parsed, _) = parse_text(
            &fixture,
            "cursor_blink = Always\n\
             \n\
             [font]\n\
             size = 13.5\n\
             normal = { family = \"Hack\", style = \"Regular\" }\n\
             \n\
             [window]\n\
             padding = { x = 12, y = 6 }\n\
             opacity = 0.95\n\
             \n\
             [colors.primary]\n\
             background = '#282a36'\n",
        );
        let config = parsed.unwrap();
        assert_eq!(config["cursor_blink"], "true");
        assert_eq!(config["font_size"], "13.5");
        assert_eq!(config["font_normal"], "Hack");
        assert_eq!(config["window_padding"], "12");
        assert_eq!(config["window_opacity"], "0.95");
        assert_eq!(config["colors_primary_background"], "#282a36");
    }

    #[test]
    fn empty_key_is_fatal_with_line_number() {
        let fixture = TestTempDir::new("alacritty-empty-key");
        let (parsed, _) = parse_text(&fixture, "[window]\nopacity = 1\n = 3\n");
        match parsed {
            Err(ConvertError::Input(InputError::EmptyKey { line, .. })) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn theme_import_merges_only_colors() {
        let fixture = TestTempDir::new("alacritty-theme");
        fixture.write_text(
            "home/.config/alacritty/themes/themes/dracula.toml",
            "[colors.primary]\n\
             background = '#282a36'\n\
             foreground = '#f8f8f2'\n\
             [font]\n\
             size = 99\n",
        );
        let (parsed, diagnostics) = parse_text(
            &fixture,
            "[general]\n\
             import = [\n\
             \"~/.config/alacritty/themes/themes/dracula.toml\",\n\
             ]\n\
             [font]\n\
             size = 12\n",
        );
        let config = parsed.unwrap();
        assert!(diagnostics.warnings.is_empty(), "{:?}", diagnostics.warnings);
        assert_eq!(config["colors_primary_background"], "#282a36");
        assert_eq!(config["colors_primary_foreground"], "#f8f8f2");
        assert_eq!(config["font_size"], "12");
    }

    #[test]
    fn relative_theme_import_uses_config_dir() {
        let fixture = TestTempDir::new("alacritty-relative-theme");
        fixture.write_text(
            "alacritty/themes/nord.toml",
            "[colors.normal]\nred = '#bf616a'\n",
        );
        let (parsed, diagnostics) = parse_text(
            &fixture,
            "[general]\nimport = [\"./themes/nord.toml\"]\n",
        );
        let config = parsed.unwrap();
        assert!(diagnostics.warnings.is_empty(), "{:?}", diagnostics.warnings);
        assert_eq!(config["colors_normal_red"], "#bf616a");
    }

    #[test]
    fn missing_theme_is_a_warning() {
        let fixture = TestTempDir::new("alacritty-missing-theme");
        let (parsed, diagnostics) = parse_text(
            &fixture,
            "\"~/.config/alacritty/themes/gone.toml\",\n[window]\nopacity = 0.8\n",
        );
        let config = parsed.unwrap();
        assert_eq!(config["window_opacity"], "0.8");
        assert_eq!(diagnostics.warnings.len(), 1);
        assert!(diagnostics.warnings[0].contains("gone.toml"));
    }

    #[test]
    fn single_line_import_follows_every_theme_in_order() {
        let fixture = TestTempDir::new("alacritty-two-themes");
        fixture.write_text(
            "alacritty/themes/a.toml",
            "[colors.primary]\nbackground = '#000000'\nforeground = '#aaaaaa'\n",
        );
        fixture.write_text(
            "alacritty/themes/b.toml",
            "[colors.primary]\nforeground = '#bbbbbb'\n",
        );
        let (parsed, diagnostics) = parse_text(
            &fixture,
            "[general]\nimport = [\"./themes/a.toml\", \"./themes/b.toml\"]\n",
        );
        let config = parsed.unwrap();
        assert!(diagnostics.warnings.is_empty(), "{:?}", diagnostics.warnings);
        assert_eq!(config["colors_primary_background"], "#000000");
        assert_eq!(config["colors_primary_foreground"], "#bbbbbb");
    }

    #[test]
    fn self_referencing_theme_hits_depth_limit() {
        let fixture = TestTempDir::new("alacritty-loop");
        fixture.write_text(
            "alacritty/themes/loop.toml",
            "import = [\"./themes/loop.toml\"]\n[colors.primary]\nbackground = '#000000'\n",
        );
        let (parsed, _) = parse_text(&fixture, "import = [\"./themes/loop.toml\"]\n");
        assert!(matches!(
            parsed,
            Err(ConvertError::Theme(ThemeError::DepthExceeded { .. }))
        ));
    }

    #[test]
    fn nested_theme_within_limit_is_followed() {
        let fixture = TestTempDir::new("alacritty-nested");
        fixture.write_text(
            "alacritty/themes/outer.toml",
            "import = [\"./themes/inner.toml\"]\n[colors.primary]\nforeground = '#eeeeee'\n",
        );
        fixture.write_text(
            "alacritty/themes/inner.toml",
            "[colors.primary]\nbackground = '#111111'\n",
        );
        let (parsed, _) = parse_text(&fixture, "import = [\"./themes/outer.toml\"]\n");
        let config = parsed.unwrap();
        assert_eq!(config["colors_primary_foreground"], "#eeeeee");
        assert_eq!(config["colors_primary_background"], "#111111");
    }

    #[test]
    fn convert_maps_palette_and_blur() {
        let fixture = TestTempDir::new("alacritty-convert");
        let source = fixture.write_text(
            "alacritty.toml",
            "[window]\nblur = true\n[colors.bright]\nwhite = '#ffffff'\n",
        );
        let converter = AlacrittyConverter::new(&source, None);
        let mut diagnostics = ConversionDiagnostics::default();
        let raw = converter.parse(&source, &mut diagnostics).unwrap();
        let out = converter.convert(&raw, &mut diagnostics).unwrap();
        assert_eq!(out.get("palette = 15="), Some("#ffffff"));
        assert_eq!(out.get("background-blur-radius"), Some("10"));
        assert_eq!(out.get("# window_blur"), Some("true"));
    }
}
