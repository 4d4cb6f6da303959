//! Configuration for stubforge
//!
//! Loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `STUBFORGE_` prefix)
//! 2. `./stubforge.toml` (project)
//! 3. `~/.config/stubforge/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # stubforge.toml
//! stubs_dir = "./resources/stubs"
//! theme = "plain"
//! log_level = "info"
//! ```

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "stubforge.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "STUBFORGE_";

/// Prompt look and feel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptTheme {
    /// Coloured prompts with check marks
    #[default]
    Colorful,
    /// Plain text prompts
    Plain,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory with custom stubs, see [`crate::templates::StubLoader`]
    pub stubs_dir: Option<PathBuf>,

    /// Prompt theme
    pub theme: PromptTheme,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stubs_dir: None,
            theme: PromptTheme::Colorful,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from every source
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file or variable has an invalid value.
    pub fn load() -> anyhow::Result<Self> {
        let user_file = Self::user_config_dir().map(|dir| dir.join("config.toml"));

        Self::figment_with(user_file.as_deref())
            .extract()
            .context("Failed to load stubforge configuration")
    }

    /// Layered provider stack, with an optional user configuration file
    #[must_use]
    pub fn figment_with(user_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = user_file {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// `$XDG_CONFIG_HOME/stubforge` or the platform equivalent
    #[must_use]
    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stubforge"))
    }

    /// Directory searched for custom stubs
    ///
    /// Falls back to `stubs/` under the user config directory.
    #[must_use]
    pub fn stubs_dir(&self) -> Option<PathBuf> {
        self.stubs_dir
            .clone()
            .or_else(|| Self::user_config_dir().map(|dir| dir.join("stubs")))
    }
}
