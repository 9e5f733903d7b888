//! Configuration file support for the dataset generator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wearables-gen/config.toml`.
//! Every value can be overridden on the command line.

use crate::csv_writer::DEFAULT_PROGRESS_EVERY;
use crate::types::GenerationParams;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Dataset generation defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_rows")]
    pub rows: i64,

    #[serde(default = "default_out")]
    pub out: PathBuf,

    #[serde(default = "default_start_date")]
    pub start_date: String,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Ignore `seed` and draw from OS entropy
    #[serde(default)]
    pub random_seed: bool,

    #[serde(default = "default_cycle_days")]
    pub cycle_days: i64,

    #[serde(default = "default_progress_every")]
    pub progress_every: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            out: default_out(),
            start_date: default_start_date(),
            seed: default_seed(),
            random_seed: false,
            cycle_days: default_cycle_days(),
            progress_every: default_progress_every(),
        }
    }
}

// Default value functions
fn default_rows() -> i64 {
    10_000_000
}

fn default_out() -> PathBuf {
    PathBuf::from("data").join("wearables_dataset.csv")
}

fn default_start_date() -> String {
    "2025-11-01".into()
}

fn default_seed() -> u64 {
    42
}

fn default_cycle_days() -> i64 {
    365
}

fn default_progress_every() -> u64 {
    DEFAULT_PROGRESS_EVERY
}

impl GenerateConfig {
    /// Seed to use, `None` when `random_seed` is set
    pub fn effective_seed(&self) -> Option<u64> {
        if self.random_seed {
            None
        } else {
            Some(self.seed)
        }
    }

    /// Validate into generation parameters
    pub fn params(&self) -> Result<GenerationParams> {
        if self.progress_every == 0 {
            return Err(Error::Validation(
                "progress-every must be at least 1".into(),
            ));
        }
        GenerationParams::new(
            &self.start_date,
            self.rows,
            self.effective_seed(),
            self.cycle_days,
        )
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("wearables-gen").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
