//! ghostty-ghost: convert kitty and Alacritty configs to Ghostty.
//!
//! The [`convert`] module is the engine: it parses a source config
//! (following theme references), translates it through a static key table,
//! and writes a sorted Ghostty config with a one-generation backup.
//!
//! # Quick start
//!
//! ```no_run
//! use ghostty_ghost::convert::{convert_file, ConversionRequest, TerminalKind};
//!
//! let report = convert_file(&ConversionRequest {
//!     kind: TerminalKind::Kitty,
//!     source: "/home/me/.config/kitty/kitty.conf".into(),
//!     target: "/home/me/.config/ghostty/config".into(),
//! })
//! .unwrap();
//! println!("{} settings mapped", report.mapped);
//! ```

pub mod build_info;
pub mod config;
pub mod convert;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
