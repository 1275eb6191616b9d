//! The conversion run behind `ghostty-ghost`.

use std::path::{Path, PathBuf};

use ghostty_ghost::config::Settings;
use ghostty_ghost::convert::{convert_file, ConversionReport, ConversionRequest, TerminalKind};
use ghostty_ghost::ui::Renderer;
use tracing::debug;

use crate::cli::Args;

use super::discovery::{choose, discover};

const HELP_HINT: &str = "use ghostty-ghost --help for usage";

/// A user-facing failure: one error line plus optional context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    message: String,
    details: Vec<String>,
    hint: Option<String>,
}

impl Failure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            hint: None,
        }
    }

    pub(crate) fn with_details<I>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.details.extend(details);
        self
    }

    pub(crate) fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn render(&self, renderer: &Renderer) {
        renderer.error(self.message());
        for detail in &self.details {
            renderer.detail(detail);
        }
        if let Some(hint) = &self.hint {
            renderer.hint(hint);
        }
    }
}

/// Resolve source and target, then convert.
pub(crate) fn run(
    args: &Args,
    settings: &Settings,
    renderer: &Renderer,
) -> Result<ConversionReport, Failure> {
    let (kind, source) = match args.from {
        Some(kind) => (kind, explicit_source(kind, args.source.as_deref(), settings)),
        None => {
            let candidates = discover(settings, Path::exists);
            let picked = choose(renderer, &candidates)?;
            renderer.section("Selected terminal");
            renderer.field("terminal", picked.kind.name());
            renderer.field("path", &picked.path.display().to_string());
            (picked.kind, picked.path)
        }
    };
    let target = args
        .target
        .clone()
        .unwrap_or_else(|| settings.ghostty_path.clone());

    let request = build_request(kind, source, target, Path::exists)?;
    debug!(?request, "starting conversion");
    convert_file(&request).map_err(|e| Failure::new(format!("conversion failed: {e}")))
}

fn explicit_source(kind: TerminalKind, flag: Option<&Path>, settings: &Settings) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| settings.source_path(kind).to_path_buf())
}

/// Check the source exists before handing it to the engine.
pub(crate) fn build_request<F>(
    kind: TerminalKind,
    source: PathBuf,
    target: PathBuf,
    exists: F,
) -> Result<ConversionRequest, Failure>
where
    F: Fn(&Path) -> bool,
{
    if !exists(&source) {
        return Err(Failure::new(format!(
            "{kind} config does not exist: {}",
            source.display()
        ))
        .with_hint(HELP_HINT));
    }
    Ok(ConversionRequest {
        kind,
        source,
        target,
    })
}
