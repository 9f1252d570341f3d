//! Centralized configuration paths for dashdock
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/dashdock/`
//! - Windows: `%APPDATA%\dashdock\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "dashdock";

/// Base name of the rolling log files (`dashdock.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "dashdock.log";

/// Base config directory for dashdock
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/dashdock`
///   - Else: `~/.config/dashdock`
///
/// Windows:
///   - `%APPDATA%\dashdock`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/dashdock/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/dashdock/workspace.json`
pub fn workspace_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("workspace.json"))
}

/// `~/.config/dashdock/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("No config directory available")?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
