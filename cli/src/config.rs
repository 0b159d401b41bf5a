// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent CLI settings

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Word list used to validate the tray
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
    /// Seed for reproducible boards
    #[serde(default)]
    pub seed: Option<u64>,
    /// Tracing filter, e.g. "info" or "letterpress_core=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            seed: None,
            log_level: default_log_level(),
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("io", "letterpress", "letterpress")
        .context("Failed to determine config directory")?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Load the config at `path`, writing the defaults there first if it is missing
pub fn load_config_from(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        tracing::info!("Config file not found, creating default at: {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = GameConfig::default();
        save_config_to(&default_config, path)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str::<GameConfig>(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn load_config() -> Result<GameConfig> {
    let config_path = get_config_path().context("Failed to determine config path")?;
    load_config_from(&config_path)
}

pub fn save_config_to(config: &GameConfig, path: &Path) -> Result<()> {
    let toml_content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, toml_content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::info!("Saved config to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.dictionary_path, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_is_created() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = load_config_from(&config_path)?;
        assert_eq!(config, GameConfig::default());
        assert!(config_path.exists());
        Ok(())
    }

    #[test]
    fn test_load_save_config() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = GameConfig {
            dictionary_path: Some(PathBuf::from("/usr/share/dict/words")),
            seed: Some(7),
            log_level: "debug".to_string(),
        };
        save_config_to(&config, &config_path)?;

        assert_eq!(load_config_from(&config_path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "seed = 42\n")?;

        let config = load_config_from(&config_path)?;
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.dictionary_path, None);
        Ok(())
    }

    #[test]
    fn test_malformed_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "seed = \"not a number\"\n")?;

        let err = load_config_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
