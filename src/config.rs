use crate::client::ClientConfig;
use crate::prelude::*;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path, path::PathBuf};

pub const CONFIG_FILE_NAME: &str = "ascale.config.json";
pub const CACHE_FILE_NAME: &str = "cache";
pub const DEFAULT_CONFIG: &str = include_str!("../ascale.config.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Profile in `~/.aws/credentials` or `~/.aws/config`.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Wins over `AWS_REGION` and the profile's region.
    #[serde(default)]
    pub region: Option<String>,
    /// Replaces `https://autoscaling.{region}.amazonaws.com/`.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `MaxRecords` sent by the CLI's describe commands.
    #[serde(default)]
    pub page_size: Option<i32>,
}

fn default_profile() -> String {
    "default".into()
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profile: default_profile(),
            region: None,
            endpoint: None,
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            page_size: None,
        }
    }
}

impl Config {
    pub fn user_dirs() -> Result<UserDirs> {
        UserDirs::new().ok_or_else(|| eyre!("can't get user dirs"))
    }

    pub fn home_dir() -> Result<PathBuf> {
        Ok(Self::user_dirs()?.home_dir().to_owned())
    }

    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".config").join("ascale"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Assumed-role credentials, kept until they expire.
    pub fn cache_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CACHE_FILE_NAME))
    }

    pub fn aws_dir() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".aws"))
    }

    /// Loads the user config, writing the default one first if it's missing.
    pub fn load() -> Result<Config> {
        let config_path = Self::config_path()?;
        std::fs::create_dir_all(Self::config_dir()?)?;
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
        let config_path = config_path.as_ref();
        let config = File::open(config_path).context(f!("can't find config: {config_path:?}"))?;
        let config: Config =
            serde_json::from_reader(config).context("Error deserializing config")?;
        ensure!(config.timeout_secs > 0, "timeout_secs must be positive");
        Ok(config)
    }

    pub fn reset() -> Result<()> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            std::fs::remove_file(&config_path).context("can't reset config")?;
        }
        Self::clear_cache()
    }

    pub fn clear_cache() -> Result<()> {
        let cache_path = Self::cache_path()?;
        if cache_path.exists() {
            std::fs::remove_file(cache_path).context("can't clear cache")?;
        }
        Ok(())
    }

    /// Transport settings once the region is known.
    pub fn client_config(&self, region: impl Into<String>) -> ClientConfig {
        ClientConfig {
            region: region.into(),
            endpoint: self.endpoint.clone().not_empty(),
            max_retries: self.max_retries,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config: Config = serde_json::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.profile, "default");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.page_size, Some(50));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"region": "eu-west-1"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config { region: Some("eu-west-1".into()), ..Config::default() });
    }

    #[test]
    fn rejects_zero_timeout_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"timeout_secs": 0}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
        std::fs::write(&path, "{").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn client_config_ignores_empty_endpoint() {
        let config = Config { endpoint: Some(String::new()), ..Config::default() };
        let client = config.client_config("us-east-1");
        assert_eq!(client.region, "us-east-1");
        assert_eq!(client.endpoint, None);
        assert_eq!(client.timeout_secs, 30);
    }
}
