//! Line-level parsing shared by both source formats.
//!
//! Parsing is lenient: lines that do not split into a key and a value are
//! skipped. The one hard failure is a separator with nothing in front of it,
//! which is reported with its 1-based line number.

use std::path::Path;

use crate::error::InputError;

use super::RawConfig;

/// Comment marker recognized at the start of a trimmed line.
pub(crate) const COMMENT_MARKER: char = '#';

/// Quote pairs stripped from values, one layer at most.
const QUOTE_PAIRS: [(char, char); 4] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// How a line separates its key from its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `key value`, split on the first whitespace run.
    Whitespace,
    /// `key = value`, split on the first `=`.
    Equals,
}

/// Classification of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Blank, comment, missing separator, or missing value.
    Skip,
    /// A separator with nothing before it.
    EmptyKey,
    /// Key and raw value, both trimmed. Quotes are still in place.
    Pair { key: &'a str, value: &'a str },
}

/// Classify a single line. The input does not need to be pre-trimmed.
pub(crate) fn classify_line(line: &str, separator: Separator) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Line::Skip;
    }

    let split = match separator {
        Separator::Whitespace => line.split_once(char::is_whitespace),
        Separator::Equals => line.split_once('='),
    };
    let Some((key, value)) = split else {
        return Line::Skip;
    };

    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return Line::EmptyKey;
    }
    if value.is_empty() {
        return Line::Skip;
    }
    Line::Pair { key, value }
}

/// Strip exactly one layer of matching straight or curly quotes.
pub fn strip_matching_quotes(value: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = value
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner;
        }
    }
    value
}

/// Read a config file into memory, mapping failures to [`InputError::Read`].
pub(crate) fn read_source(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse flat `key value` / `key = value` text. Duplicate keys: last wins.
pub fn parse_flat_text(
    text: &str,
    separator: Separator,
    path: &Path,
) -> Result<RawConfig, InputError> {
    let mut config = RawConfig::new();
    for (idx, line) in text.lines().enumerate() {
        match classify_line(line, separator) {
            Line::Skip => {}
            Line::EmptyKey => {
                return Err(InputError::EmptyKey {
                    path: path.to_path_buf(),
                    line: idx + 1,
                })
            }
            Line::Pair { key, value } => {
                config.insert(key.to_string(), strip_matching_quotes(value).to_string());
            }
        }
    }
    Ok(config)
}

/// Read and parse a flat config file.
pub fn parse_flat_file(path: &Path, separator: Separator) -> Result<RawConfig, InputError> {
    let text = read_source(path)?;
    parse_flat_text(&text, separator, path)
}
