// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sweep configuration lookup: explicit file, then the platform config dir,
//! then built-in defaults.

use std::convert::Infallible;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;
use voxsweep_core::SweepConfig;

const CONFIG_FILE: &str = "sweep.json";

/// `<platform config dir>/sweep.json`, e.g. `~/.config/voxsweep/sweep.json`.
fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "flyingrobots", "voxsweep")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Loads and validates the sweep configuration.
///
/// An explicit path must exist. The platform file is optional.
pub(crate) fn load(explicit: Option<&Path>) -> Result<SweepConfig> {
    let config = match explicit {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse(&text, path)?
        }
        None => match default_path() {
            Some(path) => match fs::read_to_string(&path) {
                Ok(text) => parse(&text, &path)?,
                Err(err) if err.kind() == ErrorKind::NotFound => SweepConfig::default(),
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("failed to read config {}", path.display()))
                }
            },
            None => SweepConfig::default(),
        },
    };
    config
        .validate::<Infallible>()
        .context("unusable sweep config")?;
    debug!(
        epsilon = config.epsilon,
        max_contacts = config.max_contacts,
        "config loaded"
    );
    Ok(config)
}

fn parse(text: &str, path: &Path) -> Result<SweepConfig> {
    serde_json::from_str(text).with_context(|| format!("malformed config {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse(r#"{"max_contacts": 4}"#, Path::new("x.json")).unwrap();
        assert_eq!(cfg.max_contacts, 4);
        assert_eq!(cfg.epsilon, SweepConfig::default().epsilon);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse(r#"{"epsilon": 0.001, "gravity": 1}"#, Path::new("x.json")).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/voxsweep/sweep.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
