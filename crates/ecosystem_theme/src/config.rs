//! Engine configuration (ecosystem.toml)

use crate::error::{Result, ThemeError};
use crate::themes::ThemeAssets;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file looked up by [`EngineConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "ecosystem.toml";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Length of the transition window after a theme change
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Re-read and check required tokens after every apply
    #[serde(default = "default_validate")]
    pub validate: bool,
    /// Directory persisted store records live in (relative to the config)
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// TOML overlay merged onto the built-in token tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_assets: Option<PathBuf>,
}

fn default_transition_ms() -> u64 {
    400
}

fn default_validate() -> bool {
    cfg!(debug_assertions)
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".ecosystem")
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            validate: default_validate(),
            state_dir: default_state_dir(),
            token_assets: None,
        }
    }
}

impl EngineConfig {
    /// Load `ecosystem.toml` from a directory, or a config file directly
    ///
    /// A directory without a config file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, path.display());
            return Ok(Self::default());
        }

        let content = read(&config_path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Resolve a configured path against the directory holding the config
    pub fn resolve(&self, base_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    pub fn state_dir_in(&self, base_dir: &Path) -> PathBuf {
        self.resolve(base_dir, &self.state_dir)
    }

    /// Built-in token tables, with the configured overlay applied
    pub fn load_assets(&self, base_dir: &Path) -> Result<ThemeAssets> {
        let Some(overlay) = &self.token_assets else {
            return Ok(ThemeAssets::builtin());
        };
        let overlay_path = self.resolve(base_dir, overlay);
        tracing::debug!("loading token overlay {}", overlay_path.display());
        ThemeAssets::from_toml_str(&read(&overlay_path)?)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
