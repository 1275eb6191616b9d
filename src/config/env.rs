//! Environment overrides, applied on top of the settings file.

use std::path::Path;

use crate::error::ConfigError;

use super::defaults::{NO_COLOR_ENV, TARGET_ENV};
use super::init::expand_home;
use super::Settings;

pub(super) fn apply_env_overrides<FEnv>(
    settings: &mut Settings,
    env_lookup: &FEnv,
    home: Option<&Path>,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(target) = non_empty(env_lookup, TARGET_ENV) {
        settings.ghostty_path = expand_home(&target, home)?;
    }
    if non_empty(env_lookup, NO_COLOR_ENV).is_some() {
        settings.color = false;
    }
    Ok(())
}

/// Value of `name`, treating blank values as unset.
fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name).filter(|value| !value.trim().is_empty())
}
