//! Glyphs, labels, and colors for console output in one place.

use crossterm::style::Color;

pub const INDENT_1: &str = "  ";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_HINT: &str = "hint:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SUCCESS: &str = "✓";
pub const GLYPH_SUCCESS_PLAIN: &str = "ok:";

pub const PICKER_SELECTED: &str = "▶";
pub const PICKER_UNSELECTED: &str = "·";
pub const PICKER_FALLBACK_PROMPT: &str = "pick (empty to cancel): ";
pub const PICKER_HELP: &str = "↑/↓ to move, Enter to select, Esc to cancel";

/// Polling interval for the interactive picker's key loop.
pub const PICKER_EVENT_POLL_MS: u64 = 80;
/// Terminal width assumed when the real size is unavailable.
pub const FALLBACK_COLUMNS: usize = 80;

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::White;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::Grey;
pub const COLOR_PICKER_SELECTED: Color = Color::Cyan;
pub const COLOR_PICKER_UNSELECTED: Color = Color::DarkGrey;
