use crate::constants::{
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, PSN_DEFAULT_HOST, STEAM_DEFAULT_HOST,
    XBL_DEFAULT_HOST,
};
use crate::error::{ImportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "GAMEDEX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub hosts: HostsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostsConfig {
    pub steam: String,
    pub psn: String,
    pub xbl: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            hosts: HostsConfig::default(),
        }
    }
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            steam: STEAM_DEFAULT_HOST.to_string(),
            psn: PSN_DEFAULT_HOST.to_string(),
            xbl: XBL_DEFAULT_HOST.to_string(),
        }
    }
}

impl Config {
    /// Load from `$GAMEDEX_CONFIG`, falling back to `config.toml`.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::load_with(std::env::var(CONFIG_PATH_ENV).ok())
    }

    /// An explicitly named file must exist; only the implicit
    /// `config.toml` may be absent, in which case defaults apply.
    pub fn load_with(explicit_path: Option<String>) -> Result<Self> {
        match explicit_path {
            Some(path) => {
                if !Path::new(&path).exists() {
                    return Err(ImportError::Config(format!(
                        "{CONFIG_PATH_ENV} points to '{path}', which does not exist"
                    )));
                }
                Self::load_from(&path)
            }
            None => Self::load_from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(ImportError::Config("timeout_seconds must be greater than zero".into()));
        }
        for (name, host) in [("steam", &self.hosts.steam), ("psn", &self.hosts.psn), ("xbl", &self.hosts.xbl)] {
            if host.trim().is_empty() || host.contains('/') {
                return Err(ImportError::Config(format!("invalid host for {name}: '{host}'")));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load_from("/nonexistent/gamedex/config.toml").unwrap();
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.hosts.steam, "steamcommunity.com");
        assert_eq!(config.user_agent, "Mozilla");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_seconds = 5\n\n[hosts]\nxbl = \"localhost:8080\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.hosts.xbl, "localhost:8080");
        assert_eq!(config.hosts.psn, "us.playstation.com");
    }

    #[test]
    fn example_config_matches_defaults() {
        let config = Config::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.timeout_seconds, defaults.timeout_seconds);
        assert_eq!(config.hosts.xbl, defaults.hosts.xbl);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::load_with(Some("/nonexistent/gamedex/custom.toml".to_string())).unwrap_err();
        match err {
            ImportError::Config(message) => assert!(message.contains("custom.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_existing_path_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "user_agent = \"Opera\"").unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let config = Config::load_with(Some(path)).unwrap();
        assert_eq!(config.user_agent, "Opera");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_seconds = 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_seconds = \"thirty").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::Toml(_)));
    }
}
