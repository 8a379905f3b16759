use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::task::Priority;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("dailyflow")
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Seed the demo tasks into a fresh session.
    pub seed_sample_tasks: bool,
    /// Priority preselected in the add-task form.
    pub default_priority: Priority,
    /// Long-press deletion. Off by default; swipes only snooze or complete.
    pub enable_task_deletion: bool,
    pub debug_logging: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            seed_sample_tasks: true,
            default_priority: Priority::Medium,
            enable_task_deletion: false,
            debug_logging: false,
        }
    }
}

impl FlowConfig {
    pub fn config_path() -> PathBuf {
        default_config_dir().join("config.json")
    }

    /// Load from the default location. Missing file means defaults; a file
    /// that fails to parse logs a warning and also falls back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FlowConfig::default();
        assert!(config.seed_sample_tasks);
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(!config.enable_task_deletion);
        assert!(!config.debug_logging);
    }

    #[test]
    fn json_round_trip() {
        let config = FlowConfig {
            seed_sample_tasks: false,
            default_priority: Priority::High,
            enable_task_deletion: true,
            debug_logging: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: FlowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: FlowConfig = serde_json::from_str(r#"{"seed_sample_tasks": false}"#).unwrap();
        assert!(!config.seed_sample_tasks);
        assert_eq!(config.default_priority, Priority::Medium);
    }
}
