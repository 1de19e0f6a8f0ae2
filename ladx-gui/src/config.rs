use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

pub const DEFAULT_API_URL: &str = "http://localhost:10000/api/v1";
pub const API_URL_ENV: &str = "LADX_API_URL";

/// Backend holding the access token and the current user between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStore {
    #[default]
    File,
    Keyring,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Base url of the LADX REST API, without trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// log level, can be "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
    #[serde(default)]
    pub token_store: TokenStore,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: None,
            token_store: TokenStore::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Loads the configuration file, falling back to the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::info!("No configuration file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        Ok(())
    }

    /// Overrides the api url with the `LADX_API_URL` environment variable if set.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        self
    }

    /// Api url without any trailing slash, so that endpoints can be appended.
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "error" => Ok(filter::LevelFilter::ERROR),
                "warn" => Ok(filter::LevelFilter::WARN),
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found")]
    NotFound,
    #[error("Config file has an invalid field {0}: {1}")]
    InvalidField(&'static str, String),
    #[error("{0}")]
    ReadingFile(String),
    #[error("{0}")]
    WritingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.token_store, TokenStore::File);
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let config = Config {
            api_url: "https://api.ladx.africa/api/v1/".to_string(),
            log_level: Some("debug".to_string()),
            token_store: TokenStore::Keyring,
        };
        config.to_file(&path).unwrap();

        let read = Config::from_file(&path).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.api_url(), "https://api.ladx.africa/api/v1");
        assert_eq!(read.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "token_store = \"keyring\"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token_store, TokenStore::Keyring);
    }

    #[test]
    fn invalid_log_level() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }
}
