//! Top-level subcommand implementations.
pub mod fonts;
pub mod resolve;
pub mod version;

use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::fonts::{FontCache, FontProvider, SystemFonts, UreqClient};
use crate::logging::Logger;
use crate::platform::Platform;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates platform detection and configuration loading so that each
/// command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Detected host platform.
    pub platform: Platform,
    /// Loaded configuration, or defaults.
    pub config: Config,
}

impl CommandSetup {
    /// Detect the platform and load the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let platform = Platform::detect();
        log.debug(&format!("platform: {}", platform.os));
        log.debug(&format!("home: {}", platform.home.display()));

        let config =
            Config::load_from_args(global.config.as_deref()).context("loading configuration")?;
        log.debug(&format!("css endpoint: {}", config.fonts.css_endpoint));
        log.debug(&format!(
            "{} extra font directories",
            config.fonts.extra_dirs.len()
        ));

        Ok(Self { platform, config })
    }

    /// Build a font provider over a fresh cache and a real HTTP client.
    #[must_use]
    pub fn font_provider(&self) -> FontProvider {
        let system =
            SystemFonts::new(self.platform.clone()).with_extra_dirs(self.config.extra_font_dirs());
        FontProvider::new(
            Arc::new(FontCache::new()),
            Arc::new(UreqClient::new(self.config.timeout())),
            self.config.google_settings(),
            system,
        )
    }
}
