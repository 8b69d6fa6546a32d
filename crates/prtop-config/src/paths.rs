//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/prtop/`, `~/.cache/prtop/`
//! - macOS: `~/Library/Application Support/prtop/`, `~/Library/Caches/prtop/`
//! - Windows: `%APPDATA%\prtop\`, `%LOCALAPPDATA%\prtop\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "prtop";

/// Get the application config directory without creating it
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log file here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("prtop/config.toml"));
        }
    }

    #[test]
    fn test_cache_dir_exists() {
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
