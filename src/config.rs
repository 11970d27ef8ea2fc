use serde::Deserialize;
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted meal and goal records
    pub data_dir: PathBuf,
    /// Base URL of the Open Food Facts instance
    pub api_base_url: String,
    /// Number of products requested per search
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            data_dir: PathBuf::from(&home).join(".nutritrack"),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(data_dir) = std::env::var("NUTRITRACK_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(base_url) = std::env::var("NUTRITRACK_API_BASE_URL") {
            config.api_base_url = base_url;
        }
        if let Some(page_size) = std::env::var("NUTRITRACK_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.page_size = page_size;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/nutritrack/config.yaml
    pub fn default_config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("nutritrack")
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
        let config = Config::default();
        assert!(config.data_dir.to_string_lossy().contains(".nutritrack"));
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_dir: /custom/path/data").unwrap();
        writeln!(file, "page_size: 5").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/path/data"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "api_base_url: https://fromfile.example").unwrap();

        // Set env var
        std::env::set_var("NUTRITRACK_API_BASE_URL", "https://fromenv.example");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.api_base_url, "https://fromenv.example");

        // Clean up
        std::env::remove_var("NUTRITRACK_API_BASE_URL");
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
