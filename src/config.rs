//! Configuration loading
//!
//! Settings are layered: compiled-in defaults, then an optional
//! `servicedesk.toml` in the working directory, then environment variables
//! prefixed with `SERVICEDESK_`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = "servicedesk.toml";

/// Default name of the store directory
pub const DEFAULT_STORE_DIR: &str = ".servicedesk";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name of the store directory searched for in the working directory
    /// and its ancestors
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

fn default_store_dir() -> String {
    DEFAULT_STORE_DIR.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the given directory, falling back to defaults
    ///
    /// A missing `servicedesk.toml` is not an error; a malformed one is.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let file = dir.join(CONFIG_FILE);
        let settings = config::Config::builder()
            .set_default("store.dir", DEFAULT_STORE_DIR)?
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix("SERVICEDESK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from the current working directory
    pub fn load_or_default() -> Result<Self> {
        match std::env::current_dir() {
            Ok(cwd) => Self::load_from(&cwd),
            Err(_) => Ok(Self::default()),
        }
    }
}
