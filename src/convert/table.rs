//! Static source-key → Ghostty-key translation tables.
//!
//! Tables are plain `static` slices: built at compile time, shared read-only
//! by every conversion.

/// Prefix of a composite palette key. The writer detects palette entries by it.
pub const PALETTE_PREFIX: &str = "palette = ";
/// Marker that closes a composite palette key; the value follows it.
pub const PALETTE_ASSIGN: char = '=';

/// Target of one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKey {
    /// A plain Ghostty key, written as `key = value`.
    Plain(&'static str),
    /// A palette slot, written as `palette = N=value`.
    Palette(u8),
}

impl TargetKey {
    /// The key stored in the Ghostty mapping.
    pub fn render(self) -> String {
        match self {
            Self::Plain(key) => key.to_string(),
            Self::Palette(index) => format!("{PALETTE_PREFIX}{index}{PALETTE_ASSIGN}"),
        }
    }
}

/// Whether a Ghostty mapping key is a composite palette key.
pub fn is_palette_key(key: &str) -> bool {
    key.starts_with(PALETTE_PREFIX)
}

/// An immutable source-to-target key table.
#[derive(Debug)]
pub struct TranslationTable {
    name: &'static str,
    entries: &'static [(&'static str, TargetKey)],
}

impl TranslationTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, TargetKey)]) -> Self {
        Self { name, entries }
    }

    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn lookup(&self, source_key: &str) -> Option<TargetKey> {
        self.entries
            .iter()
            .find(|(key, _)| *key == source_key)
            .map(|(_, target)| *target)
    }

    pub fn entries(&self) -> &'static [(&'static str, TargetKey)] {
        self.entries
    }
}

use TargetKey::{Palette, Plain};

/// Main kitty.conf vocabulary.
pub static KITTY_TABLE: TranslationTable = TranslationTable::new(
    "kitty",
    &[
        // Fonts
        ("font_family", Plain("font-family")),
        ("bold_font", Plain("font-family-bold")),
        ("italic_font", Plain("font-family-italic")),
        ("bold_italic_font", Plain("font-family-bold-italic")),
        ("font_size", Plain("font-size")),
        // Window
        ("window_padding", Plain("window-padding")),
        ("remember_window_size", Plain("window-save-state")),
        ("initial_window_width", Plain("window-width")),
        ("initial_window_height", Plain("window-height")),
        ("window_resize_step_cells", Plain("window-resize-step")),
        ("window_decorations", Plain("window-decoration")),
        ("window_opacity", Plain("background-opacity")),
        ("window_alert_on_bell", Plain("desktop-notifications")),
        ("window_logo_position", Plain("resize-overlay-position")),
        ("window_padding_balance", Plain("window-padding-balance")),
        ("placement_strategy", Plain("window-theme")),
        // Mouse and scrolling
        ("scrolling_multiplier", Plain("mouse-scroll-multiplier")),
        ("mouse_hide_when_typing", Plain("mouse-hide-while-typing")),
        ("scrollback_lines", Plain("scrollback-limit")),
        ("selection_save_to_clipboard", Plain("copy-on-select")),
        // Cursor
        ("cursor_shape", Plain("cursor-style")),
        ("cursor_beam_thickness", Plain("cursor-beam-width")),
        ("cursor_blink_interval", Plain("cursor-blink-interval")),
        ("colors_cursor_cursor", Plain("cursor-color")),
        ("colors_cursor_text", Plain("cursor-text-color")),
        // macOS
        ("macos_option_as_alt", Plain("macos-option-as-alt")),
        ("macos_titlebar_color", Plain("macos-titlebar-style")),
        ("macos_window_resizable", Plain("window-resize-from-any-edge")),
        // Shell
        ("shell", Plain("command")),
        ("working_directory", Plain("working-directory")),
        // Colors
        ("colors_primary_background", Plain("background")),
        ("colors_primary_foreground", Plain("foreground")),
        ("colors_selection_background", Plain("selection-background")),
        ("colors_selection_text", Plain("selection-foreground")),
        // Tabs and rendering
        ("tab_bar_edge", Plain("gtk-tabs-location")),
        ("tab_bar_style", Plain("adw-toolbar-style")),
        ("repaint_delay", Plain("window-vsync")),
        ("input_delay", Plain("window-vsync")),
    ],
);

/// Color-only vocabulary of kitty theme files.
pub static KITTY_THEME_TABLE: TranslationTable = TranslationTable::new(
    "kitty-theme",
    &[
        ("background", Plain("background")),
        ("foreground", Plain("foreground")),
        ("cursor", Plain("cursor-color")),
        ("selection_background", Plain("selection-background")),
        ("selection_foreground", Plain("selection-foreground")),
        ("color0", Palette(0)),
        ("color1", Palette(1)),
        ("color2", Palette(2)),
        ("color3", Palette(3)),
        ("color4", Palette(4)),
        ("color5", Palette(5)),
        ("color6", Palette(6)),
        ("color7", Palette(7)),
        ("color8", Palette(8)),
        ("color9", Palette(9)),
        ("color10", Palette(10)),
        ("color11", Palette(11)),
        ("color12", Palette(12)),
        ("color13", Palette(13)),
        ("color14", Palette(14)),
        ("color15", Palette(15)),
    ],
);

/// Flattened alacritty.toml vocabulary.
pub static ALACRITTY_TABLE: TranslationTable = TranslationTable::new(
    "alacritty",
    &[
        // Fonts
        ("font_normal", Plain("font-family")),
        ("font_normal_family", Plain("font-family")),
        ("font_size", Plain("font-size")),
        ("font_italic", Plain("font-family-italic")),
        ("font_italic_family", Plain("font-family-italic")),
        ("font_bold_italic", Plain("font-family-bold-italic")),
        ("font_bold_italic_family", Plain("font-family-bold-italic")),
        ("font_bold", Plain("font-family-bold")),
        ("font_bold_family", Plain("font-family-bold")),
        // Cursor
        ("cursor-style", Plain("cursor-style")),
        ("cursor_vi_mode_style_blinking", Plain("cursor-style-blink")),
        ("cursor_text", Plain("cursor-text")),
        ("cursor_color", Plain("cursor-color")),
        ("cursor_blink", Plain("cursor-style-blink")),
        ("colors_cursor_cursor", Plain("cursor-color")),
        ("cursor_vi_mode_style_shape", Plain("cursor-style")),
        ("cursor_style_blinking", Plain("cursor-style-blink")),
        ("colors_cursor_text", Plain("cursor-text")),
        // Colors
        ("colors_primary_background", Plain("background")),
        ("colors_primary_foreground", Plain("foreground")),
        ("colors_selection_foreground", Plain("selection-foreground")),
        ("colors_selection_background", Plain("selection-background")),
        // Window layout
        ("window_padding", Plain("window-padding-x")),
        ("window_padding_x", Plain("window-padding-x")),
        ("window_padding_y", Plain("window-padding-y")),
        ("window_padding_color", Plain("window-padding-color")),
        ("window_title", Plain("title")),
        ("window_decorations", Plain("window-decoration")),
        // Window behavior
        ("window_inherit_working_directory", Plain("window-inherit-working-directory")),
        ("window_inherit_font_size", Plain("window-inherit-font-size")),
        ("window_save_state", Plain("window-save-state")),
        ("window_step_resize", Plain("window-step-resize")),
        ("window_new_tab_position", Plain("window-new-tab-position")),
        ("window_opacity", Plain("background-opacity")),
        // Scrollback, selection, clipboard
        ("scrolling_history", Plain("scrollback-limit")),
        ("keyboard_CopySelection", Plain("copy-on-select")),
        ("terminal_osc52", Plain("clipboard-read")),
        // Normal colors
        ("colors_normal_black", Palette(0)),
        ("colors_normal_red", Palette(1)),
        ("colors_normal_green", Palette(2)),
        ("colors_normal_yellow", Palette(3)),
        ("colors_normal_blue", Palette(4)),
        ("colors_normal_magenta", Palette(5)),
        ("colors_normal_cyan", Palette(6)),
        ("colors_normal_white", Palette(7)),
        // Bright colors
        ("colors_bright_black", Palette(8)),
        ("colors_bright_red", Palette(9)),
        ("colors_bright_green", Palette(10)),
        ("colors_bright_yellow", Palette(11)),
        ("colors_bright_blue", Palette(12)),
        ("colors_bright_magenta", Palette(13)),
        ("colors_bright_cyan", Palette(14)),
        ("colors_bright_white", Palette(15)),
    ],
);
