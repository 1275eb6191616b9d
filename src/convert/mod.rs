//! Terminal config → Ghostty conversion engine.
//!
//! Each supported source terminal implements [`ConfigConverter`]:
//!
//! 1. `parse` reads the source file (following theme references) into a flat
//!    [`RawConfig`].
//! 2. `convert` translates it through a static key table into a
//!    [`GhosttyConfig`], annotating keys it cannot map.
//! 3. `write` serializes the result, keeping one `.bak` of the previous file.
//!
//! [`convert_file`] runs all three for a [`ConversionRequest`].

pub mod alacritty;
pub mod kitty;
pub mod lines;
pub mod mapper;
pub mod normalize;
pub mod table;
pub mod theme;
pub mod writer;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{ConvertError, InputError};

pub use alacritty::AlacrittyConverter;
pub use kitty::KittyConverter;
pub use writer::{backup_path, render_ghostty_config, write_ghostty_config};

/// Flat key/value mapping parsed from one source file. Duplicate keys: the
/// last one parsed wins.
pub type RawConfig = BTreeMap<String, String>;

/// Source terminals the engine can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    Kitty,
    Alacritty,
}

impl TerminalKind {
    pub const ALL: [TerminalKind; 2] = [TerminalKind::Kitty, TerminalKind::Alacritty];

    pub fn name(self) -> &'static str {
        match self {
            Self::Kitty => "kitty",
            Self::Alacritty => "alacritty",
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TerminalKind {
    type Err = InputError;

    /// Accepts `kitty`/`k` and `alacritty`/`a`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kitty" | "k" => Ok(Self::Kitty),
            "alacritty" | "a" => Ok(Self::Alacritty),
            _ => Err(InputError::UnsupportedTerminal(s.to_string())),
        }
    }
}

/// Converted Ghostty settings, kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhosttyConfig {
    entries: BTreeMap<String, String>,
}

impl GhosttyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` in; its entries win on conflict.
    pub fn extend(&mut self, other: GhosttyConfig) {
        self.entries.extend(other.entries);
    }

    /// Number of real Ghostty settings (annotations excluded).
    pub fn mapped_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|key| !key.starts_with(mapper::UNMAPPED_PREFIX))
            .count()
    }

    /// Number of commented passthrough entries (sentinel excluded).
    pub fn unmapped_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|key| mapper::is_unmapped_key(key))
            .count()
    }

    /// Serialized target-format text.
    pub fn render(&self) -> String {
        render_ghostty_config(self)
    }
}

/// Non-fatal problems met during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionDiagnostics {
    pub warnings: Vec<String>,
}

impl ConversionDiagnostics {
    /// Record a warning and emit it to the log.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.warnings.push(message);
    }
}

/// Parse / convert / write for one source format.
pub trait ConfigConverter {
    fn kind(&self) -> TerminalKind;

    /// Read `path` into a flat mapping, following theme references.
    fn parse(
        &self,
        path: &Path,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<RawConfig, ConvertError>;

    /// Translate a parsed mapping into Ghostty settings.
    fn convert(
        &self,
        config: &RawConfig,
        diagnostics: &mut ConversionDiagnostics,
    ) -> Result<GhosttyConfig, ConvertError>;

    /// Persist `config` at `path`; returns the backup path if one was made.
    fn write(&self, path: &Path, config: &GhosttyConfig) -> Result<Option<PathBuf>, ConvertError> {
        Ok(write_ghostty_config(path, config)?)
    }
}

/// Build the converter for `kind`, resolving `~` against the user's home.
pub fn converter_for(kind: TerminalKind, source_path: &Path) -> Box<dyn ConfigConverter> {
    converter_with_home(kind, source_path, dirs::home_dir())
}

/// Build the converter for `kind` with an explicit home directory.
pub fn converter_with_home(
    kind: TerminalKind,
    source_path: &Path,
    home: Option<PathBuf>,
) -> Box<dyn ConfigConverter> {
    match kind {
        TerminalKind::Kitty => Box::new(KittyConverter::new(source_path, home)),
        TerminalKind::Alacritty => Box::new(AlacrittyConverter::new(source_path, home)),
    }
}

/// Directory a source config lives in; `.` for bare file names.
pub(crate) fn config_dir_of(source_path: &Path) -> PathBuf {
    match source_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// One end-to-end conversion job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub kind: TerminalKind,
    pub source: PathBuf,
    pub target: PathBuf,
}

/// What a successful conversion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub target: PathBuf,
    pub backup: Option<PathBuf>,
    pub mapped: usize,
    pub unmapped: usize,
    pub diagnostics: ConversionDiagnostics,
}

/// Parse, convert, and write `request.source` into `request.target`.
pub fn convert_file(request: &ConversionRequest) -> Result<ConversionReport, ConvertError> {
    let converter = converter_for(request.kind, &request.source);
    convert_file_with(converter.as_ref(), request)
}

/// [`convert_file`] with a caller-supplied converter.
pub fn convert_file_with(
    converter: &dyn ConfigConverter,
    request: &ConversionRequest,
) -> Result<ConversionReport, ConvertError> {
    let mut diagnostics = ConversionDiagnostics::default();
    debug!(
        kind = %converter.kind(),
        source = %request.source.display(),
        "parsing source config"
    );
    let raw = converter.parse(&request.source, &mut diagnostics)?;
    let ghostty = converter.convert(&raw, &mut diagnostics)?;
    let backup = converter.write(&request.target, &ghostty)?;

    Ok(ConversionReport {
        target: request.target.clone(),
        backup,
        mapped: ghostty.mapped_count(),
        unmapped: ghostty.unmapped_count(),
        diagnostics,
    })
}
