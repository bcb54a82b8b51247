// ⚙️ Config - Display preferences as data
// Loaded from JSON (optional), environment overrides on top

use crate::currency::Direction;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Path of an optional JSON config file
pub const CONFIG_ENV: &str = "LIRA_CONFIG";

/// Overrides `server_addr`
pub const SERVER_ADDR_ENV: &str = "LIRA_SERVER_ADDR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Show amounts with Arabic-Indic digits
    #[serde(default = "default_use_arabic_numerals")]
    pub use_arabic_numerals: bool,

    /// Direction the converter starts in
    #[serde(default)]
    pub default_direction: Direction,

    /// Bind address for the API server
    #[serde(default = "default_server_addr")]
    pub server_addr: String,
}

fn default_use_arabic_numerals() -> bool {
    true
}

fn default_server_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_arabic_numerals: default_use_arabic_numerals(),
            default_direction: Direction::default(),
            server_addr: default_server_addr(),
        }
    }
}

impl Config {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// File named by LIRA_CONFIG (or defaults), then env overrides
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Config::from_file(path)?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = env::var(SERVER_ADDR_ENV) {
            config.server_addr = addr;
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

// ============================================================================
// TESTS
// ============================================================================
