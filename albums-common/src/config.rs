//! Bootstrap configuration loading and bind address resolution
//!
//! The catalog keeps no runtime settings. The only bootstrap concerns are the
//! listen address and the log level, resolved in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Listen address used when nothing else is configured
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Environment variable overriding the listen address
pub const BIND_ADDR_ENV: &str = "ALBUMS_BIND_ADDR";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "ALBUMS_CONFIG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Listen address, e.g. "0.0.0.0:8080"
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    ///
    /// A missing file is not an error. A file that exists but does not parse is.
    /// The returned [`ConfigFile`] tells the caller which case applied.
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, ConfigFile)> {
        match path {
            Some(path) if path.exists() => {
                let config = Self::load(path)?;
                Ok((config, ConfigFile::Loaded(path.to_path_buf())))
            }
            Some(path) => Ok((Self::default(), ConfigFile::Missing(path.to_path_buf()))),
            None => Ok((Self::default(), ConfigFile::NotConfigured)),
        }
    }
}

/// Outcome of looking for the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    /// File found and parsed
    Loaded(PathBuf),
    /// A path was known but nothing exists there; defaults were used
    Missing(PathBuf),
    /// No path could be determined for this platform
    NotConfigured,
}

/// Which tier supplied the bind address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindSource {
    CommandLine,
    Environment,
    ConfigFile,
    Default,
}

impl fmt::Display for BindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindSource::CommandLine => write!(f, "command line"),
            BindSource::Environment => write!(f, "{}", BIND_ADDR_ENV),
            BindSource::ConfigFile => write!(f, "config file"),
            BindSource::Default => write!(f, "default"),
        }
    }
}

/// Platform config file location (`~/.config/albums/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("albums").join("config.toml"))
}

/// Fully resolved server configuration
///
/// Resolution runs before logging is set up, so the provenance fields are
/// carried here for the caller to log once a subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub bind_source: BindSource,
    pub log_level: String,
    pub config_file: ConfigFile,
}

/// Resolves [`ServerConfig`] from CLI overrides, environment, and TOML
#[derive(Debug, Clone, Default)]
pub struct ServerConfigResolver {
    cli_bind: Option<String>,
    cli_config: Option<PathBuf>,
    cli_log_level: Option<String>,
}

impl ServerConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen address given on the command line
    pub fn with_bind(mut self, bind: Option<String>) -> Self {
        self.cli_bind = bind;
        self
    }

    /// Config file path given on the command line
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.cli_config = path;
        self
    }

    /// Log level given on the command line
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.cli_log_level = level;
        self
    }

    /// Config file to read: CLI path, then env var, then platform default
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.cli_config {
            return Some(path.clone());
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        default_config_path()
    }

    /// Resolve the final configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the config file exists but cannot be parsed,
    /// or if the resolved bind address is not a valid socket address.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let config_path = self.config_path();
        let (toml_config, config_file) = TomlConfig::load_or_default(config_path.as_deref())?;

        let (bind, bind_source) = if let Some(bind) = &self.cli_bind {
            (bind.clone(), BindSource::CommandLine)
        } else if let Ok(bind) = std::env::var(BIND_ADDR_ENV) {
            (bind, BindSource::Environment)
        } else if let Some(bind) = toml_config.bind_addr {
            (bind, BindSource::ConfigFile)
        } else {
            (DEFAULT_BIND_ADDR.to_string(), BindSource::Default)
        };

        let bind_addr = parse_bind_addr(&bind)?;

        let log_level = self
            .cli_log_level
            .clone()
            .unwrap_or(toml_config.logging.level);

        Ok(ServerConfig {
            bind_addr,
            bind_source,
            log_level,
            config_file,
        })
    }
}

/// Parse a `host:port` listen address
pub fn parse_bind_addr(bind: &str) -> Result<SocketAddr> {
    bind.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid bind address '{}': {}", bind, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(LoggingConfig::default().level, "info");
    }

    #[test]
    fn test_parse_bind_addr() {
        let addr = parse_bind_addr("127.0.0.1:8080").unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_parse_bind_addr_rejects_hostname() {
        let err = parse_bind_addr("localhost:8080").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_partial_config() {
        let config: TomlConfig = toml::from_str("bind_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.bind_addr.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_logging_section() {
        let config: TomlConfig = toml::from_str("[logging]\nlevel = \"debug\"").unwrap();
        assert!(config.bind_addr.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_or_default_without_path() {
        let (config, file) = TomlConfig::load_or_default(None).unwrap();
        assert!(config.bind_addr.is_none());
        assert_eq!(file, ConfigFile::NotConfigured);
    }

    #[test]
    fn test_bind_source_display() {
        assert_eq!(BindSource::CommandLine.to_string(), "command line");
        assert_eq!(BindSource::Environment.to_string(), BIND_ADDR_ENV);
        assert_eq!(BindSource::Default.to_string(), "default");
    }
}
