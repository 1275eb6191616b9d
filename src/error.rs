//! Unified error types for the converter.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Errors caused by the source side of a conversion.
#[derive(Debug)]
pub enum InputError {
    /// The source (or a followed config) file could not be opened or read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A non-skippable line split into an empty key.
    EmptyKey { path: PathBuf, line: usize },
    /// The terminal selector did not name a supported source terminal.
    UnsupportedTerminal(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::EmptyKey { path, line } => {
                write!(f, "empty key found at line {line} of {}", path.display())
            }
            Self::UnsupportedTerminal(name) => write!(f, "unsupported terminal type: {name}"),
        }
    }
}

impl std::error::Error for InputError {}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Fatal theme-resolution errors. Missing theme files are warnings, not errors.
#[derive(Debug)]
pub enum ThemeError {
    /// Theme references nested deeper than the resolver allows.
    DepthExceeded { path: PathBuf, limit: usize },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthExceeded { path, limit } => write!(
                f,
                "maximum theme recursion depth ({limit}) exceeded at {}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// OutputError
// ---------------------------------------------------------------------------

/// Errors while persisting the converted config.
#[derive(Debug)]
pub enum OutputError {
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    RemoveBackup {
        path: PathBuf,
        source: std::io::Error,
    },
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "failed to create directory {}: {source}", path.display())
            }
            Self::RemoveBackup { path, source } => write!(
                f,
                "failed to remove existing backup {}: {source}",
                path.display()
            ),
            Self::Backup { path, source } => {
                write!(f, "failed to create backup {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {}

// ---------------------------------------------------------------------------
// ConvertError: top-level
// ---------------------------------------------------------------------------

/// Top-level error type for one conversion.
#[derive(Debug)]
pub enum ConvertError {
    Input(InputError),
    Theme(ThemeError),
    Output(OutputError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<InputError> for ConvertError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<ThemeError> for ConvertError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<OutputError> for ConvertError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading the tool's own settings file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
