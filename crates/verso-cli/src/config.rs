//! Optional user configuration.
//!
//! Read from `config.toml` in the platform config directory. A missing
//! file is not an error; a malformed one is.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Settings persisted between sessions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource selected at startup when `--resource` is not given.
    pub default_resource: Option<String>,
    /// Resource files loaded in addition to those on the command line.
    pub resources: Vec<PathBuf>,
}

impl Config {
    /// Load the config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        let Some(dirs) = ProjectDirs::from("", "", "verso") else {
            return Ok(Self::default());
        };
        Self::load_from(dirs.config_dir().join("config.toml"))
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))
    }
}
