use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;

static DEFAULT_TASKS_PATH: &str = "~/.local/share/agendo/tasks.json";

fn default_tasks_path() -> PathBuf {
    PathBuf::from(DEFAULT_TASKS_PATH)
}

/// Global configuration at ~/.config/agendo/config.toml
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Where imported tasks are stored
    #[serde(default = "default_tasks_path")]
    pub tasks_file: PathBuf,
}

impl GlobalConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("agendo");

        Ok(config_dir.join("config.toml"))
    }

    /// Tasks file path with `~` expanded.
    pub fn tasks_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.tasks_file.to_string_lossy()).into_owned();

        PathBuf::from(expanded)
    }
}
