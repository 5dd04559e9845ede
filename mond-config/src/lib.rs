use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use mond_common::{MonitorConfigEntry, MondError, error::ConfigError, Result};

/// The user's monitor layout: a JSON array of `{ "name", "docked" }`
/// objects, ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub monitors: Vec<MonitorConfigEntry>,
}

impl Config {
    /// Load from `$HOME/.config/mond/config.json`
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MondError::Config(ConfigError::NotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| MondError::Config(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }))?;

        let config = Self::from_json(&content).map_err(|e| match e {
            MondError::Config(ConfigError::JsonParse { message, .. }) => {
                MondError::Config(ConfigError::JsonParse {
                    path: path.to_path_buf(),
                    message,
                })
            }
            other => other,
        })?;

        log::debug!("Loaded {} monitor entries from {:?}", config.monitors.len(), path);
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| MondError::Config(ConfigError::NoHomeDir))?;

        Ok(home_dir.join(".config").join("mond").join("config.json"))
    }

    pub fn entries(&self) -> &[MonitorConfigEntry] {
        &self.monitors
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, entry) in self.monitors.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(MondError::Config(ConfigError::BlankName { index }));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(MondError::Config(ConfigError::DuplicateName {
                    name: entry.name.clone(),
                }));
            }
        }

        if self.monitors.is_empty() {
            log::warn!("Configuration lists no monitors; nothing will be arranged");
        }

        Ok(())
    }
}
