//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use slh_core::DEFAULT_MIN_YEAR;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Export directory or file used when `--path` is not given.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Earliest year a query may ask for.
    pub min_year: i32,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("path", &self.path)
            .field("min_year", &self.min_year)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SLH_PATH, SLH_MIN_YEAR
        figment = figment.merge(Env::prefixed("SLH_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for slh.
///
/// On Linux: `~/.config/slh`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("slh"))
}
