use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default backend target for local development.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking.
///
/// The backend target is fixed for the lifetime of the process; switching
/// between a local and a deployed backend is a config-file or environment
/// change, not a runtime toggle.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base URL of the catalog backend
    pub server_url: ConfigValue<String>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing the config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    server_url: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut server_url =
            ConfigValue::new(DEFAULT_SERVER_URL.to_string(), ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            if let Some(url) = file.server_url {
                server_url = ConfigValue::new(url, ConfigSource::File);
            }
            config_file = Some(path);
        }

        if let Ok(url) = std::env::var("PRODCAT_SERVER_URL") {
            server_url = ConfigValue::new(url, ConfigSource::Environment);
        }

        Ok(Self {
            server_url,
            config_file,
        })
    }

    /// Default config file path: ~/.config/prodcat/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prodcat")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url.value, DEFAULT_SERVER_URL);
        assert_eq!(config.server_url.source, ConfigSource::Default);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "server_url: https://catalog.example.com").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(config.server_url.value, "https://catalog.example.com");
        assert_eq!(config.server_url.source, ConfigSource::File);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::File::create(&config_path).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url.value, DEFAULT_SERVER_URL);
        assert_eq!(config.server_url.source, ConfigSource::Default);
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "server_url: https://file.example.com").unwrap();

        std::env::set_var("PRODCAT_SERVER_URL", "https://env.example.com");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url.value, "https://env.example.com");
        assert_eq!(config.server_url.source, ConfigSource::Environment);

        std::env::remove_var("PRODCAT_SERVER_URL");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
