//! Portal client configuration
//!
//! Config file: `$XDG_CONFIG_HOME/flowmind/config.toml` or
//! `~/.config/flowmind/config.toml`. A missing file means defaults; a
//! malformed file is a hard error with context.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_max_suggestions() -> usize {
    3
}

/// User configuration for the portal client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Absolute portal origin, e.g. `https://app.flowmind.ai`.
    /// When unset, routes render relative.
    #[serde(default)]
    pub base_url: Option<String>,

    /// How many top-ranked suggestions the client displays per message.
    /// Presentation only - the resolver always returns the full list.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Launch dispatched routes in the system browser instead of only
    /// printing them.
    #[serde(default)]
    pub open_links: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_suggestions: default_max_suggestions(),
            open_links: false,
        }
    }
}

impl PortalConfig {
    /// Default config file path following XDG conventions
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("flowmind").join("config.toml"));
        }
        dirs::config_dir().map(|dir| dir.join("flowmind").join("config.toml"))
    }

    /// Load from the default location; missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Render as TOML, for `flowmindctl config` output.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}
