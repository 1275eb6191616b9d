//! Stamps git commit and build time into the binary for `--version`.
//!
//! Either value can be pinned through the environment for reproducible
//! builds; otherwise git and date are asked, with "unknown" as the fallback.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "GHOSTTY_GHOST_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "GHOSTTY_GHOST_BUILD_TIMESTAMP";

fn main() {
    watch_git_head();
    for var in [GIT_HASH_VAR, TIMESTAMP_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let git_hash = env::var(GIT_HASH_VAR).unwrap_or_else(|_| {
        command_output("git", &["rev-parse", "--short=12", "HEAD"])
            .unwrap_or_else(|| "unknown".to_string())
    });
    let timestamp = env::var(TIMESTAMP_VAR).unwrap_or_else(|_| utc_timestamp());

    println!("cargo:rustc-env={GIT_HASH_VAR}={git_hash}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={timestamp}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let Ok(head) = fs::read_to_string(".git/HEAD") else {
        return;
    };
    if let Some(reference) = head.trim().strip_prefix("ref: ") {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }
}

fn utc_timestamp() -> String {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("unix:{secs}")
    })
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
