//! Key flattening and value rewriting for sectioned `key = value` sources.
//!
//! These are string heuristics, not a TOML parser: inline tables and arrays
//! are not modeled. Only the key prefix in front of a structural marker
//! survives, and structured values are reduced to the one field Ghostty needs.

/// Separator used when joining a section name with a key.
const SECTION_JOIN: char = '.';
/// Separator the flattened key uses in place of [`SECTION_JOIN`].
const FLAT_JOIN: char = '_';
/// Characters that open inline structure inside a key.
const STRUCTURE_MARKERS: [char; 2] = ['{', '['];

/// One value heuristic. Returns `Some` when it claims the value.
pub type ValueRewrite = fn(&str) -> Option<String>;

/// Value heuristics in precedence order; the first match wins.
pub const VALUE_REWRITES: &[ValueRewrite] =
    &[extract_font_family, extract_padding_x, normalize_boolean];

/// Return the section name for `[section]` / `[[section]]` header lines.
pub fn section_header(line: &str) -> Option<&str> {
    let line = line.trim();
    if !(line.starts_with('[') && line.ends_with(']')) {
        return None;
    }
    Some(line.trim_matches(|c| c == '[' || c == ']').trim())
}

/// Qualify `key` with `section` and flatten it to an underscore key.
///
/// Returns an empty string when nothing precedes a structure marker and no
/// section applies; callers skip such keys.
pub fn flatten_key(section: &str, key: &str) -> String {
    let qualified = if section.is_empty() {
        key.to_string()
    } else {
        format!("{section}{SECTION_JOIN}{key}")
    };
    let flat = qualified.replace(SECTION_JOIN, &FLAT_JOIN.to_string());
    let end = flat.find(STRUCTURE_MARKERS).unwrap_or(flat.len());
    flat[..end].trim().to_string()
}

/// Apply [`VALUE_REWRITES`] in order, passing the value through unchanged
/// when none applies.
pub fn normalize_value(value: &str) -> String {
    VALUE_REWRITES
        .iter()
        .find_map(|rewrite| rewrite(value))
        .unwrap_or_else(|| value.to_string())
}

/// `{ family = "Fira Code", style = "Regular" }` → `Fira Code`.
pub fn extract_font_family(value: &str) -> Option<String> {
    for (idx, _) in value.match_indices("family") {
        let rest = value[idx + "family".len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let inner = &rest[quote.len_utf8()..];
        let end = inner.find(quote)?;
        return Some(inner[..end].to_string());
    }
    None
}

/// `{ x = 10, y = 6 }` → `10`.
///
/// Any `x =` counts, including the tail of a longer key such as `max =`.
pub fn extract_padding_x(value: &str) -> Option<String> {
    for (idx, _) in value.match_indices("x =") {
        let rest = value[idx + "x =".len()..].trim_start();
        let end = rest.find([',', '}']).unwrap_or(rest.len());
        let x = rest[..end].trim();
        if !x.is_empty() {
            return Some(x.to_string());
        }
    }
    None
}

/// Map enum-ish words onto Ghostty booleans.
pub fn normalize_boolean(value: &str) -> Option<String> {
    match value.to_ascii_lowercase().as_str() {
        "always" | "on" | "full" | "onlycopy" => Some("true".to_string()),
        "never" | "off" => Some("false".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_headers_accept_single_and_double_brackets() {
        assert_eq!(section_header("[window]"), Some("window"));
        assert_eq!(section_header("  [colors.primary]  "), Some("colors.primary"));
        assert_eq!(section_header("[[hints.enabled]]"), Some("hints.enabled"));
        assert_eq!(section_header("window = 1"), None);
        assert_eq!(section_header("[unterminated"), None);
    }

    #[test]
    fn flattens_section_qualified_keys() {
        assert_eq!(flatten_key("colors.primary", "background"), "colors_primary_background");
        assert_eq!(flatten_key("", "cursor_blink"), "cursor_blink");
        assert_eq!(flatten_key("", "window.opacity"), "window_opacity");
    }

    #[test]
    fn truncates_keys_at_inline_structure() {
        assert_eq!(flatten_key("keyboard", "bindings[0]"), "keyboard_bindings");
        assert_eq!(flatten_key("keyboard.bindings", "{ key"), "keyboard_bindings_");
        assert_eq!(flatten_key("", "{ key"), "");
    }

    #[test]
    fn font_family_wins_over_other_rules() {
        let value = "{ family = \"JetBrains Mono\", style = \"Regular\" }";
        assert_eq!(normalize_value(value), "JetBrains Mono");
        assert_eq!(
            extract_font_family("{ family='Iosevka' }").as_deref(),
            Some("Iosevka")
        );
        assert_eq!(extract_font_family("{ family = Unquoted }"), None);
    }

    #[test]
    fn padding_keeps_first_component() {
        assert_eq!(normalize_value("{ x = 12, y = 4 }"), "12");
        assert_eq!(normalize_value("{ x = 8 }"), "8");
        assert_eq!(extract_padding_x("{ max = 3 }").as_deref(), Some("3"));
        assert_eq!(extract_padding_x("{ y = 3 }"), None);
    }

    #[test]
    fn boolean_synonyms_are_case_insensitive() {
        for word in ["Always", "ON", "full", "OnlyCopy"] {
            assert_eq!(normalize_value(word), "true", "{word}");
        }
        for word in ["Never", "off"] {
            assert_eq!(normalize_value(word), "false", "{word}");
        }
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(normalize_value("#1e1e2e"), "#1e1e2e");
        assert_eq!(normalize_value("0x1f"), "0x1f");
        assert_eq!(normalize_value("Block"), "Block");
    }
}
