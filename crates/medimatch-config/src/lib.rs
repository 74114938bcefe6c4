//! Configuration loading for Medimatch.
//! Reads medimatch.toml from the current directory or the path in the
//! MEDIMATCH_CONFIG env var. A missing file yields a fully-defaulted
//! config; a malformed file is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use medimatch_common::{MediMatchError, Result};

pub const CONFIG_ENV_VAR: &str = "MEDIMATCH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "medimatch.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String { "data/final_optimized_medical_dataset.csv".to_string() }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_min_symptom_match")]
    pub min_symptom_match: usize,
    #[serde(default = "default_high_severity_threshold")]
    pub high_severity_threshold: u8,
    #[serde(default = "default_adult_age_threshold")]
    pub adult_age_threshold: u32,
}

fn default_min_symptom_match() -> usize { 1 }
fn default_high_severity_threshold() -> u8 { 7 }
fn default_adult_age_threshold() -> u32 { 18 }

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_symptom_match: default_min_symptom_match(),
            high_severity_threshold: default_high_severity_threshold(),
            adult_age_threshold: default_adult_age_threshold(),
        }
    }
}

impl Config {
    /// Load from the env-var path when set, otherwise ./medimatch.toml,
    /// otherwise defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(&path),
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(DEFAULT_CONFIG_FILE)
                } else {
                    info!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MediMatchError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Config = toml::from_str(&raw).map_err(|e| {
            MediMatchError::Config(format!("cannot parse {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
