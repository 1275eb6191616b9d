//! Compile-time build metadata for `--version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit captured by `build.rs`.
pub const GIT_COMMIT: &str = env!("GHOSTTY_GHOST_BUILD_GIT_HASH");

pub const BUILD_TIMESTAMP: &str = env!("GHOSTTY_GHOST_BUILD_TIMESTAMP");

/// Trailer appended to `--help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("GHOSTTY_GHOST_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("GHOSTTY_GHOST_BUILD_TIMESTAMP")
);

/// Block printed by `ghostty-ghost --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GHOSTTY_GHOST_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("GHOSTTY_GHOST_BUILD_TIMESTAMP")
);
