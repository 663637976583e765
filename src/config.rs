use std::{env, net::SocketAddr, num::ParseIntError, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_DIR: &str = "mock-data";
pub const DEFAULT_DATASET_ID: &str = "QjX6hB1ST2IDKaxB";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub dataset_id: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid MOCK_PORT {0:?}: {1}")]
    InvalidPort(String, #[source] ParseIntError),
    #[error("invalid bind address {0:?}")]
    InvalidAddress(String),
    #[error("MOCK_DATASET_ID must not be empty")]
    EmptyDatasetId,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset variables
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("MOCK_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(value.clone(), e))?,
            None => defaults.port,
        };

        let dataset_id = lookup("MOCK_DATASET_ID").unwrap_or(defaults.dataset_id);
        if dataset_id.is_empty() {
            return Err(ConfigError::EmptyDatasetId);
        }

        Ok(Config {
            host: lookup("MOCK_HOST").unwrap_or(defaults.host),
            port,
            data_dir: lookup("MOCK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            dataset_id,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr.clone()))
    }
}
