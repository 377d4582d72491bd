//! Configuration file handling
//!
//! The config file is optional; every setting can also arrive as a CLI flag
//! or environment variable. Precedence is flag > env > file > default.

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Default API host when nothing else is configured
pub const DEFAULT_HOST: &str = "https://direwolf-brainard.herokuapp.com";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// API key used as the basic-auth username
    pub api_key: Option<String>,

    /// Base URL of the direwolf API host
    pub host: Option<String>,

    /// Seconds to sleep between run status polls
    pub poll_interval_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Resolve the API key: flag, then environment, then config file
    pub fn resolve_api_key(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| std::env::var("DIREWOLF_API_KEY").ok())
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)
    }

    /// Resolve the API host: flag, then environment, then config file, then default
    pub fn resolve_host(&self, flag: Option<String>) -> String {
        let host = flag
            .or_else(|| std::env::var("DIREWOLF_HOST").ok())
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        host.trim_end_matches('/').to_string()
    }

    /// Resolve the poll interval: flag, then config file, then 1 second
    pub fn resolve_poll_interval(&self, flag: Option<u64>) -> u64 {
        flag.or(self.poll_interval_secs).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        // Only meaningful when the env var is absent in the test environment
        if std::env::var("DIREWOLF_HOST").is_err() {
            assert_eq!(config.resolve_host(None), DEFAULT_HOST);
        }
        assert_eq!(config.resolve_poll_interval(None), 1);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            "api_key = \"k-123\"\nhost = \"https://direwolf.example/\"\npoll_interval_secs = 5\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        // Trailing slash is stripped so path joins stay clean
        assert_eq!(config.resolve_host(None), "https://direwolf.example");
        assert_eq!(config.resolve_poll_interval(None), 5);
    }

    #[test]
    fn test_flag_beats_file() {
        let file = write_config("api_key = \"from-file\"\nhost = \"https://file.example\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.resolve_api_key(Some("from-flag".to_string())).unwrap(),
            "from-flag"
        );
        assert_eq!(
            config.resolve_host(Some("https://flag.example".to_string())),
            "https://flag.example"
        );
        assert_eq!(config.resolve_poll_interval(Some(3)), 3);
    }

    #[test]
    fn test_env_beats_file_and_flag_beats_env() {
        let file = write_config("api_key = \"from-file\"\nhost = \"https://file.example\"\n");
        let config = Config::load_from(file.path()).unwrap();

        // Process-wide env; keep the mutation scoped to this test
        std::env::set_var("DIREWOLF_API_KEY", "from-env");
        std::env::set_var("DIREWOLF_HOST", "https://env.example");

        assert_eq!(config.resolve_api_key(None).unwrap(), "from-env");
        assert_eq!(config.resolve_host(None), "https://env.example");
        assert_eq!(
            config.resolve_api_key(Some("from-flag".to_string())).unwrap(),
            "from-flag"
        );
        assert_eq!(
            config.resolve_host(Some("https://flag.example".to_string())),
            "https://flag.example"
        );

        std::env::remove_var("DIREWOLF_API_KEY");
        std::env::remove_var("DIREWOLF_HOST");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let config = Config::default();
        // Only meaningful when the env var is absent in the test environment
        if std::env::var("DIREWOLF_API_KEY").is_err() {
            assert!(matches!(
                config.resolve_api_key(None),
                Err(Error::MissingApiKey)
            ));
        }
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = write_config("api_key = [not toml");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(Error::ConfigParse(_))
        ));
    }
}
