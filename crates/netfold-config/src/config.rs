//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const FILE_NAME: &str = "config.ron";
const APP_DIR: &str = "netfold";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Question generation settings.
    pub quiz: QuizConfig,
    /// Terminal rendering settings.
    pub display: DisplayConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Question generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    /// Fixed RNG seed for reproducible sessions. `None` draws a fresh seed.
    pub seed: Option<u64>,
    /// Shape families to draw nets from ("cross", "t", "z", "l"). Empty means all.
    pub families: Vec<String>,
    /// Random draws per wrong option before the fallback strategies run.
    pub wrong_sample_attempts: u32,
    /// Regenerations per conflicting wrong option.
    pub regenerate_attempts: u32,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the opposite-face hint under each question.
    pub show_hints: bool,
    /// Width of one net cell in characters.
    pub cell_width: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for the JSON log file. Defaults to `logs/` next to the config.
    pub log_dir: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            families: Vec::new(),
            wrong_sample_attempts: 100,
            regenerate_attempts: 100,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_hints: false,
            cell_width: 3,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// The platform config directory for netfold, if the OS exposes one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(FILE_NAME))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory for log files: `debug.log_dir`, else `logs/` under `config_dir`.
    #[must_use]
    pub fn log_dir(&self, config_dir: &Path) -> PathBuf {
        self.debug
            .log_dir
            .clone()
            .unwrap_or_else(|| config_dir.join("logs"))
    }
}
