//! Configuration module for the pgdt CLI.
//!
//! Settings come from a `pgdt.toml` file; command-line flags override them.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{PgdtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pgdt.toml";

/// Default address of the server's RPC listener.
pub const DEFAULT_RPC_ADDRESS: &str = "127.0.0.1:8677";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token listing options.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Server connection options.
    #[serde(default)]
    pub rpc: RpcConfig,
}

/// Options for the `tokens` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Leave comments out of the listing.
    #[serde(default)]
    pub skip_comments: bool,
}

/// Options for the server queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcConfig {
    /// `host:port` of the server's RPC listener.
    #[serde(default = "default_rpc_address")]
    pub address: String,

    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_rpc_address() -> String {
    DEFAULT_RPC_ADDRESS.to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            address: default_rpc_address(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/pgdt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PgdtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PgdtError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("pgdt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("pgdt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
