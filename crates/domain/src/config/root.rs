use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::remote::RemoteCatalogConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG: &str = "fertibase.toml";
const SYSTEM_CONFIG: &str = "/etc/fertibase/config.toml";

/// Main configuration structure for FertiBase
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Catalog service listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote catalog the resolver reads from
    #[serde(default)]
    pub remote: RemoteCatalogConfig,

    /// Document store backing the catalog service
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. fertibase.toml in current directory
    /// 3. /etc/fertibase/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = Some(db);
        }
        if let Some(url) = overrides.remote_url {
            self.remote.base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.remote.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Remote catalog timeout must be greater than 0".to_string(),
            ));
        }

        let url = self.remote.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "Remote catalog URL must be http(s): {}",
                url
            )));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub remote_url: Option<String>,
    pub log_level: Option<String>,
}
