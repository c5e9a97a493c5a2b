//! Runtime settings for Shelfrank binaries.
//! Reads shelfrank.toml from the current directory or the path in SHELFRANK_CONFIG,
//! then applies SHELFRANK_API_HOST / SHELFRANK_API_PORT overrides. A `.env` file is
//! honoured if present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, ShelfrankError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub weights: WeightsFileConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_raw_file")]
    pub raw_file: String,
    #[serde(default = "default_processed_file")]
    pub processed_file: String,
}

fn default_data_dir()       -> PathBuf { PathBuf::from("data") }
fn default_raw_file()       -> String  { "raw_products.csv".to_string() }
fn default_processed_file() -> String  { "ranked_products.csv".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            raw_file: default_raw_file(),
            processed_file: default_processed_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsFileConfig {
    #[serde(default = "default_weights_path")]
    pub path: PathBuf,
}

fn default_weights_path() -> PathBuf { PathBuf::from("config/weights.yaml") }

impl Default for WeightsFileConfig {
    fn default() -> Self {
        Self { path: default_weights_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

fn default_api_host() -> String { "0.0.0.0".to_string() }
fn default_api_port() -> u16    { 8000 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

impl Settings {
    /// Load settings from shelfrank.toml.
    /// Checks SHELFRANK_CONFIG env var first, then current directory. A missing
    /// file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let path = std::env::var("SHELFRANK_CONFIG")
            .unwrap_or_else(|_| "shelfrank.toml".to_string());

        let mut settings = Self::from_file_or_default(Path::new(&path))?;
        settings.apply_env_overrides(
            std::env::var("SHELFRANK_API_HOST").ok(),
            std::env::var("SHELFRANK_API_PORT").ok(),
        )?;
        Ok(settings)
    }

    fn from_file_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ShelfrankError::Config(e.to_string()))
    }

    fn apply_env_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.api.host = host;
        }
        if let Some(port) = port {
            self.api.port = port
                .trim()
                .parse()
                .map_err(|_| ShelfrankError::Config(format!("SHELFRANK_API_PORT is not a port: {port}")))?;
        }
        Ok(())
    }

    pub fn raw_data_path(&self) -> PathBuf {
        self.data.dir.join("raw").join(&self.data.raw_file)
    }

    pub fn processed_data_path(&self) -> PathBuf {
        self.data.dir.join("processed").join(&self.data.processed_file)
    }

    pub fn weights_path(&self) -> &Path {
        &self.weights.path
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
