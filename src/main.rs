//! CLI entry point for ghostty-ghost.

mod app;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use ghostty_ghost::config::load_settings;
use ghostty_ghost::ui::Renderer;
use tracing_subscriber::EnvFilter;

/// Log filter directive, e.g. `GHOSTTY_GHOST_LOG=debug`.
const LOG_ENV: &str = "GHOSTTY_GHOST_LOG";

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    let loaded = match load_settings(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            Renderer::new(!args.no_color).error(&format!("failed to load settings: {e}"));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(source = ?loaded.source, "settings loaded");

    let renderer = Renderer::new(loaded.settings.color && !args.no_color);
    match app::run(&args, &loaded.settings, &renderer) {
        Ok(report) => {
            app::summary::render_report(&renderer, &report);
            ExitCode::SUCCESS
        }
        Err(failure) => {
            failure.render(&renderer);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr. `--verbose` forces `debug`; otherwise the
/// filter comes from `GHOSTTY_GHOST_LOG`, defaulting to errors only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
