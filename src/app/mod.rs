//! Binary-side orchestration: pick a source, run the engine, report.
//!
//! `main.rs` only parses flags, installs logging, and loads settings; the
//! flow itself lives here so it can be tested without a process boundary.

pub(crate) mod discovery;
pub(crate) mod entry;
pub(crate) mod summary;

pub(crate) use entry::{run, Failure};
