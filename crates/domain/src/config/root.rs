use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::{QueryConfig, Transport};
use crate::dns_query::MIN_RESPONSE_SIZE;

const LOCAL_CONFIG_PATH: &str = "dnscodec.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query construction defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnscodec.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
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
        if let Some(transport) = overrides.transport {
            self.query.transport = transport;
        }
        if let Some(size) = overrides.max_response_size {
            self.query.max_response_size = Some(size);
        }
        if overrides.dnssec {
            self.query.dnssec = Some(true);
        }
        if overrides.padding {
            self.query.padding = Some(true);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.query.max_response_size {
            if size < MIN_RESPONSE_SIZE {
                return Err(ConfigError::Validation(format!(
                    "max_response_size {} is below the EDNS(0) minimum of {}",
                    size, MIN_RESPONSE_SIZE
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub transport: Option<Transport>,
    pub max_response_size: Option<u16>,
    pub dnssec: bool,
    pub padding: bool,
    pub log_level: Option<String>,
}
