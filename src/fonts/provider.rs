//! Font resolution front end: cache, Google Fonts, system fonts.
use std::sync::Arc;

use super::cache::FontCache;
use super::google::{self, GoogleFontsSettings};
use super::http::HttpClient;
use super::system::SystemFonts;
use super::FontBytes;
use crate::paths::resolve_path;

/// Where [`FontProvider::load`] looks for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FontSource {
    /// Google Fonts first, then installed fonts.
    #[default]
    Auto,
    /// Google Fonts only.
    Google,
    /// Installed fonts only.
    System,
}

/// Resolves font family names to raw font bytes.
///
/// Every failure is logged and reported as `None`; callers fall back to a
/// default font or skip text rendering.
pub struct FontProvider {
    cache: Arc<FontCache>,
    http: Arc<dyn HttpClient>,
    google: GoogleFontsSettings,
    system: SystemFonts,
}

impl std::fmt::Debug for FontProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontProvider")
            .field("cached", &self.cache.len())
            .field("http", &"<dyn HttpClient>")
            .field("google", &self.google)
            .field("system", &self.system)
            .finish()
    }
}

impl FontProvider {
    /// Create a provider sharing `cache` with any other provider built from
    /// the same `Arc`.
    #[must_use]
    pub fn new(
        cache: Arc<FontCache>,
        http: Arc<dyn HttpClient>,
        google: GoogleFontsSettings,
        system: SystemFonts,
    ) -> Self {
        Self {
            cache,
            http,
            google,
            system,
        }
    }

    /// The cache backing [`FontProvider::load_google_font`].
    #[must_use]
    pub fn cache(&self) -> &FontCache {
        &self.cache
    }

    /// The system font locator.
    #[must_use]
    pub const fn system(&self) -> &SystemFonts {
        &self.system
    }

    /// Download `family` from Google Fonts, serving repeats from the cache.
    ///
    /// The cache lookup ignores case, so `"roboto"` after `"Roboto"` makes no
    /// network request.
    pub fn load_google_font(&self, family: &str) -> Option<FontBytes> {
        if let Some(bytes) = self.cache.get(family) {
            tracing::debug!("font cache hit: {family}");
            return Some(bytes);
        }

        match google::download(self.http.as_ref(), &self.google, family) {
            Ok(bytes) => {
                let bytes: FontBytes = Arc::from(bytes);
                self.cache.insert(family, Arc::clone(&bytes));
                tracing::debug!("downloaded {family} ({} bytes)", bytes.len());
                Some(bytes)
            }
            Err(e) => {
                tracing::warn!("failed to load Google font {family}: {e}");
                None
            }
        }
    }

    /// Read `family` from the first matching installed font file.
    pub fn load_system_font(&self, family: &str) -> Option<FontBytes> {
        match self.system.find(family) {
            Ok((path, bytes)) => {
                tracing::debug!("found {family} at {}", path.display());
                Some(Arc::from(bytes))
            }
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        }
    }

    /// Read a user-supplied font file.  `path` goes through
    /// [`resolve_path`], so `~/fonts/x.ttf` works.
    pub fn load_custom_font(&self, path: &str) -> Option<FontBytes> {
        let resolved = resolve_path(path);
        match std::fs::read(&resolved) {
            Ok(bytes) => Some(Arc::from(bytes)),
            Err(e) => {
                tracing::warn!("failed to read font file {}: {e}", resolved.display());
                None
            }
        }
    }

    /// Resolve `family` from `source`.
    pub fn load(&self, family: &str, source: FontSource) -> Option<FontBytes> {
        match source {
            FontSource::Google => self.load_google_font(family),
            FontSource::System => self.load_system_font(family),
            FontSource::Auto => self
                .load_google_font(family)
                .or_else(|| self.load_system_font(family)),
        }
    }
}
