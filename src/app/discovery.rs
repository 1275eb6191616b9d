//! Finding installed terminal configs and choosing one.

use std::path::{Path, PathBuf};

use ghostty_ghost::config::Settings;
use ghostty_ghost::convert::TerminalKind;
use ghostty_ghost::ui::{pick_from_list, Renderer};

use super::Failure;

/// A terminal whose config exists at its configured default path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) kind: TerminalKind,
    pub(crate) path: PathBuf,
}

impl Candidate {
    pub(crate) fn label(&self) -> String {
        format!("{} ({})", self.kind, self.path.display())
    }
}

/// Known terminals with a config present, in declaration order.
pub(crate) fn discover<F>(settings: &Settings, exists: F) -> Vec<Candidate>
where
    F: Fn(&Path) -> bool,
{
    TerminalKind::ALL
        .into_iter()
        .map(|kind| Candidate {
            kind,
            path: settings.source_path(kind).to_path_buf(),
        })
        .filter(|candidate| exists(&candidate.path))
        .collect()
}

/// Ask the user which discovered terminal to convert.
pub(crate) fn choose(renderer: &Renderer, candidates: &[Candidate]) -> Result<Candidate, Failure> {
    if candidates.is_empty() {
        return Err(Failure::new(
            "no terminal config found at the default kitty or alacritty paths",
        )
        .with_hint("pass --from and --source, see ghostty-ghost --help"));
    }

    let labels: Vec<String> = candidates.iter().map(Candidate::label).collect();
    let picked = pick_from_list(renderer.color(), "Select terminal config to convert", &labels)
        .map_err(|e| Failure::new(format!("failed to read selection: {e}")))?;

    match picked.and_then(|idx| candidates.get(idx)) {
        Some(candidate) => Ok(candidate.clone()),
        None => Err(Failure::new("no valid selection made")
            .with_details(
                labels
                    .iter()
                    .enumerate()
                    .map(|(idx, label)| format!("{}. {label}", idx + 1)),
            )
            .with_hint("run again and pick one of the options above")),
    }
}
