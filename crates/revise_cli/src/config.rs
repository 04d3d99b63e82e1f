//! CLI configuration.
//!
//! # Responsibility
//! - Resolve and parse the TOML config file.
//! - Provide defaults for every field so a missing file is not an error.
//!
//! # Invariants
//! - `log_dir` is absolute after defaults are applied.

use anyhow::{Context, Result};
use revise_core::{UserDirectory, DEFAULT_USER_IDS};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "revise";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "revise.sqlite3";
pub const CONFIG_ENV_VAR: &str = "REVISE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_users")]
    pub users: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            users: default_users(),
        }
    }
}

impl Config {
    /// Loads config from `explicit` (the `--config` flag or `$REVISE_CONFIG`,
    /// resolved by clap) or else the platform config dir.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            if explicit.is_some() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("failed to parse TOML from {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        if !config.log_dir.is_absolute() {
            anyhow::bail!(
                "log_dir must be an absolute path, got `{}`",
                config.log_dir.display()
            );
        }
        Ok(config)
    }

    pub fn user_directory(&self) -> Result<UserDirectory> {
        UserDirectory::from_ids(&self.users).context("invalid `users` entry in config")
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
}

fn default_db_path() -> PathBuf {
    data_dir().join(DB_FILE_NAME)
}

fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn default_log_level() -> String {
    revise_core::default_log_level().to_string()
}

fn default_users() -> Vec<String> {
    DEFAULT_USER_IDS.iter().map(|id| id.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{default_config_path, Config};
    use std::path::PathBuf;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.users.len(), 5);
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::from_toml(
            r#"
            db_path = "/var/lib/revise/data.sqlite3"
            log_dir = "/var/log/revise"
            log_level = "warn"
            users = ["ana", "ben"]
            "#,
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/var/lib/revise/data.sqlite3"));
        assert_eq!(config.log_level, "warn");
        let users = config.user_directory().unwrap();
        assert_eq!(users.ids()[1].as_str(), "ben");
    }

    #[test]
    fn relative_log_dir_and_unknown_keys_are_rejected() {
        assert!(Config::from_toml(r#"log_dir = "logs""#).is_err());
        assert!(Config::from_toml(r#"colour = "blue""#).is_err());
    }

    #[test]
    fn default_path_ends_in_app_config_file() {
        assert!(default_config_path().ends_with("revise/config.toml"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "users = [\"x\"]\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.users, vec!["x".to_string()]);
    }
}
