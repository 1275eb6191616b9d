//! Colored status output on stderr.

use crossterm::style::Stylize;

use super::settings;

/// Writes user-facing status lines. Plain text when `color` is off.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Indented follow-up line after an error, e.g. pointing at `--help`.
    pub fn hint(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                settings::LABEL_HINT.with(settings::COLOR_FIELD_KEY),
                msg.with(settings::COLOR_FIELD_VALUE)
            );
        } else {
            eprintln!("{}{} {msg}", settings::INDENT_1, settings::LABEL_HINT);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SUCCESS.with(settings::COLOR_SUCCESS),
                msg.with(settings::COLOR_SUCCESS).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::GLYPH_SUCCESS_PLAIN);
        }
    }

    /// Small section header.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Indented `key: value` line.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!(
                "{}{}",
                settings::INDENT_1,
                text.with(settings::COLOR_FIELD_VALUE)
            );
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }
}
