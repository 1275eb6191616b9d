//! Table application: source mapping in, Ghostty mapping out.
//!
//! Keys the table does not know are never dropped. They come out as
//! commented entries under a single "unmapped settings" sentinel so the user
//! can port them by hand.

use tracing::debug;

use super::table::TranslationTable;
use super::{GhosttyConfig, RawConfig};

/// Prefix that turns a source key into a commented annotation.
pub const UNMAPPED_PREFIX: &str = "# ";
/// Sentinel entry opening the unmapped block.
pub const UNMAPPED_SENTINEL: &str = "# Unmapped settings";

/// A Ghostty setting synthesized from a source setting, independent of the
/// key table.
#[derive(Debug, Clone, Copy)]
pub struct DerivedSetting {
    pub source_key: &'static str,
    pub applies: fn(&str) -> bool,
    pub target_key: &'static str,
    pub value: &'static str,
}

/// Default radius Ghostty gets when Alacritty asks for blur.
pub const DEFAULT_BLUR_RADIUS: &str = "10";

/// Derived settings for Alacritty sources.
pub static ALACRITTY_DERIVED: &[DerivedSetting] = &[DerivedSetting {
    source_key: "window_blur",
    applies: is_truthy,
    target_key: "background-blur-radius",
    value: DEFAULT_BLUR_RADIUS,
}];

fn is_truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Translate every key through `table`, annotating the misses.
///
/// Iteration follows `source` key order, so when two source keys share a
/// target the lexically later source key wins.
pub fn translate(source: &RawConfig, table: &TranslationTable) -> GhosttyConfig {
    let mut out = GhosttyConfig::new();
    let mut unmapped = Vec::new();
    for (key, value) in source {
        match table.lookup(key) {
            Some(target) => out.insert(target.render(), value.clone()),
            None => unmapped.push((key.as_str(), value.as_str())),
        }
    }
    if !unmapped.is_empty() {
        debug!(table = table.name(), count = unmapped.len(), "unmapped source keys");
    }
    annotate_unmapped(&mut out, unmapped);
    out
}

/// Add commented passthrough entries, plus the sentinel when any were added.
pub fn annotate_unmapped<'a, I>(out: &mut GhosttyConfig, unmapped: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut any = false;
    for (key, value) in unmapped {
        out.insert(unmapped_key(key), value.to_string());
        any = true;
    }
    if any {
        out.insert(UNMAPPED_SENTINEL.to_string(), String::new());
    }
}

/// The commented form of a source key.
pub fn unmapped_key(source_key: &str) -> String {
    format!("{UNMAPPED_PREFIX}{source_key}")
}

/// Whether a Ghostty mapping key is an unmapped annotation (sentinel excluded).
pub fn is_unmapped_key(key: &str) -> bool {
    key.starts_with(UNMAPPED_PREFIX) && key != UNMAPPED_SENTINEL
}

/// Apply derived-setting rules on top of the table output.
pub fn apply_derived(source: &RawConfig, out: &mut GhosttyConfig, rules: &[DerivedSetting]) {
    for rule in rules {
        let Some(value) = source.get(rule.source_key) else {
            continue;
        };
        if (rule.applies)(value) {
            debug!(
                source = rule.source_key,
                target = rule.target_key,
                "derived setting applied"
            );
            out.insert(rule.target_key.to_string(), rule.value.to_string());
        }
    }
}
