//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;
use ghostty_ghost::build_info;
use ghostty_ghost::convert::TerminalKind;

/// Convert a kitty or Alacritty config into a Ghostty config.
///
/// Without --from, the terminals that have a config at their default path
/// are listed and one is picked interactively.
#[derive(Debug, Parser)]
#[command(
    name = "ghostty-ghost",
    version,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA,
)]
pub struct Args {
    /// Terminal to convert from: kitty (k) or alacritty (a).
    #[arg(short = 'f', long = "from", value_name = "TERMINAL", value_parser = parse_terminal)]
    pub from: Option<TerminalKind>,

    /// Source terminal config (default: the terminal's usual config path).
    #[arg(short = 's', long = "source", value_name = "PATH", requires = "from")]
    pub source: Option<PathBuf>,

    /// Ghostty config to write (default: ~/.config/ghostty/config).
    #[arg(short = 't', long = "target", value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Settings file (default: ~/.config/ghostty-ghost/ghostty-ghost.toml).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log parsing and theme resolution details to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_terminal(raw: &str) -> Result<TerminalKind, String> {
    raw.parse::<TerminalKind>().map_err(|e| e.to_string())
}
