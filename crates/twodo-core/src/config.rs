use crate::{TwoDoError, TwoDoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_UNDO_LIMIT: usize = 100;

fn default_undo_limit() -> usize {
    DEFAULT_UNDO_LIMIT
}

fn default_categories() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum number of raw inputs kept for recall. Unbounded when unset.
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Maximum number of commands kept on the undo stack. `0` disables undo.
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,

    #[serde(default = "default_categories")]
    pub categories: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            undo_limit: DEFAULT_UNDO_LIMIT,
            categories: true,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/twodo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("twodo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("twodo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the default location, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load an explicitly requested file. Unlike `load`, errors are reported.
    pub fn load_from(path: &Path) -> TwoDoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> TwoDoResult<Self> {
        toml::from_str(content).map_err(|e| TwoDoError::Config(e.to_string()))
    }
}
