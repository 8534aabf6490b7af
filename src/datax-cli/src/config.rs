//! Shell configuration.
//!
//! Loaded from `config.toml` in the datax home directory:
//!
//! ```toml
//! prompt = "datax> "
//! history_limit = 500
//! log_level = "info"
//!
//! [[services]]
//! name = "Node"
//! ```
//!
//! The home directory is `$DATAX_HOME` when set, otherwise `~/.datax`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use datax_shell::{DEFAULT_HISTORY_LIMIT, DEFAULT_PROMPT, ManagementService, ServiceCatalog};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "DATAX_HOME";

/// Home directory name under the user's home.
pub const HOME_DIR_NAME: &str = ".datax";

/// Config file name inside the home directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Prompt shown before each input line.
    pub prompt: String,

    /// Number of history lines kept per session.
    pub history_limit: usize,

    /// Log level used when no flag or environment variable sets one.
    pub log_level: Option<String>,

    /// Management services listed by `help`, in display order.
    pub services: Vec<ServiceEntry>,
}

/// One `[[services]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    /// Service display name.
    pub name: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_level: None,
            services: Vec::new(),
        }
    }
}

impl ShellConfig {
    /// Load the config.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Management services in config order.
    pub fn service_catalog(&self) -> ServiceCatalog {
        self.services
            .iter()
            .map(|entry| ManagementService::new(entry.name.as_str()))
            .collect()
    }
}

/// The datax home directory.
///
/// A relative `DATAX_HOME` is resolved against the current directory.
pub fn find_datax_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        let home = PathBuf::from(home);
        if home.is_absolute() {
            return Some(home);
        }
        return std::env::current_dir().ok().map(|cwd| cwd.join(home));
    }
    dirs::home_dir().map(|home| home.join(HOME_DIR_NAME))
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    find_datax_home().map(|home| home.join(CONFIG_FILE_NAME))
}
