//! TOML configuration file loading.
//!
//! The config file is optional; every field has a default.  Lookup order:
//! `--config <PATH>`, then `$XDG_CONFIG_HOME/iconkit/config.toml`, then
//! `~/.config/iconkit/config.toml`.
//!
//! ```toml
//! [fonts]
//! css_endpoint = "https://fonts.googleapis.com/css2"
//! timeout_secs = 30
//! extra_dirs = ["~/brand/fonts"]
//!
//! [output]
//! dir = "~/icons"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::fonts::GoogleFontsSettings;
use crate::fonts::google::{CSS_ENDPOINT, LEGACY_USER_AGENT};
use crate::paths::resolve_path;

/// All user configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Font loading options.
    pub fonts: FontsConfig,
    /// Output options.
    pub output: OutputConfig,
}

/// The `[fonts]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Google Fonts CSS API endpoint.
    pub css_endpoint: String,
    /// User agent sent with stylesheet and font requests.
    pub user_agent: String,
    /// Per-request timeout in seconds; `0` disables the timeout.
    pub timeout_secs: u64,
    /// Extra directories searched for installed fonts.
    pub extra_dirs: Vec<String>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            css_endpoint: CSS_ENDPOINT.to_string(),
            user_agent: LEGACY_USER_AGENT.to_string(),
            timeout_secs: 30,
            extra_dirs: Vec::new(),
        }
    }
}

/// The `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory generated files are written to.
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if a config directory can be found.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(base.join("iconkit").join("config.toml"))
    }

    /// Load the config from `explicit` (resolved with [`resolve_path`]) or
    /// from [`Config::default_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_args(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let path = explicit.map(resolve_path).or_else(Self::default_path);
        path.map_or_else(|| Ok(Self::default()), |p| Self::load(&p))
    }

    /// Load the config file at `path`.  A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    /// Google Fonts settings derived from `[fonts]`.
    #[must_use]
    pub fn google_settings(&self) -> GoogleFontsSettings {
        GoogleFontsSettings {
            css_endpoint: self.fonts.css_endpoint.clone(),
            user_agent: self.fonts.user_agent.clone(),
        }
    }

    /// HTTP timeout, or `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.fonts.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Extra font directories as absolute paths.
    #[must_use]
    pub fn extra_font_dirs(&self) -> Vec<PathBuf> {
        self.fonts.extra_dirs.iter().map(|d| resolve_path(d)).collect()
    }

    /// Output directory as an absolute path.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        resolve_path(&self.output.dir)
    }
}
