//! User configuration persistence
//!
//! Stores user preferences in `~/.config/dashdock/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Label given to newly created dashboards
    #[serde(default = "default_label")]
    pub default_label: String,
    /// Whether a freshly loaded workspace starts locked against layout edits
    #[serde(default)]
    pub start_locked: bool,
    /// Write workspace documents indented rather than compact
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

fn default_label() -> String {
    "Dashboard".to_string()
}

fn default_pretty_output() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_label: default_label(),
            start_locked: false,
            pretty_output: default_pretty_output(),
        }
    }
}

impl DashboardConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults when it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: DashboardConfig = serde_yaml::from_str("start_locked: true\n").unwrap();
        assert!(config.start_locked);
        assert_eq!(config.default_label, "Dashboard");
        assert!(config.pretty_output);
    }
}
