// Shared helpers for integration tests.
//
// Provides a counting fake HTTP client and a temporary home directory that
// can be populated with installed font files, so each integration test runs
// offline and without touching the real font directories.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use iconkit_cli::error::FontError;
use iconkit_cli::fonts::{FontCache, FontProvider, GoogleFontsSettings, HttpClient, SystemFonts};
use iconkit_cli::platform::{Os, Platform};

/// Font file URL served inside every fake stylesheet.
pub const FONT_URL: &str = "https://fonts.gstatic.com/s/fake/v1/fake.ttf";

/// A stand-in for Google Fonts that counts requests.
///
/// Families listed in `known` get a stylesheet pointing at [`FONT_URL`];
/// anything else gets HTTP 400, as the real CSS API does.
#[derive(Debug, Default)]
pub struct FakeGoogleFonts {
    known: Vec<String>,
    font: Vec<u8>,
    offline: bool,
    /// Stylesheet requests seen so far.
    pub stylesheet_requests: AtomicUsize,
    /// Font file requests seen so far.
    pub font_requests: AtomicUsize,
}

impl FakeGoogleFonts {
    /// Serve `font` for each family in `known`.
    pub fn serving(known: &[&str], font: &[u8]) -> Self {
        Self {
            known: known.iter().map(|f| f.replace(' ', "+")).collect(),
            font: font.to_vec(),
            ..Self::default()
        }
    }

    /// Fail every request with a network error.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Total requests of either kind.
    pub fn requests(&self) -> usize {
        self.stylesheet_requests.load(Ordering::SeqCst) + self.font_requests.load(Ordering::SeqCst)
    }
}

impl HttpClient for FakeGoogleFonts {
    fn get_text(&self, url: &str, _user_agent: &str) -> Result<String, FontError> {
        self.stylesheet_requests.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(FontError::Network {
                url: url.to_string(),
                reason: "offline".to_string(),
            });
        }
        let family = url
            .split("family=")
            .nth(1)
            .and_then(|rest| rest.split(':').next())
            .unwrap_or_default();
        if self.known.iter().any(|k| k == family) {
            Ok(format!(
                "@font-face {{\n  font-family: 'x';\n  src: url({FONT_URL}) format('truetype');\n}}\n"
            ))
        } else {
            Err(FontError::Status {
                url: url.to_string(),
                status: 400,
            })
        }
    }

    fn get_bytes(&self, url: &str, _user_agent: &str) -> Result<Vec<u8>, FontError> {
        self.font_requests.fetch_add(1, Ordering::SeqCst);
        if self.offline || url != FONT_URL {
            return Err(FontError::Status {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok(self.font.clone())
    }
}

/// A temporary home directory acting as the user's font location.
pub struct FontHome {
    /// Temporary directory used as `$HOME`.
    pub root: tempfile::TempDir,
}

impl FontHome {
    /// Create an empty home directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the home directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Install `file_name` with `contents` under `relative_dir` (e.g. `.fonts`).
    pub fn install(&self, relative_dir: &str, file_name: &str, contents: &[u8]) -> PathBuf {
        let dir = self.root.path().join(relative_dir);
        std::fs::create_dir_all(&dir).expect("create font dir");
        let path = dir.join(file_name);
        std::fs::write(&path, contents).expect("write font file");
        path
    }

    /// Linux platform whose home is this directory.
    pub fn platform(&self) -> Platform {
        Platform::new(Os::Linux, self.root.path())
    }

    /// A provider over `http`, a fresh cache, and this home's font directories.
    pub fn provider(&self, http: Arc<FakeGoogleFonts>) -> FontProvider {
        self.provider_with_cache(http, Arc::new(FontCache::new()))
    }

    /// Like [`FontHome::provider`] but sharing `cache`.
    pub fn provider_with_cache(
        &self,
        http: Arc<FakeGoogleFonts>,
        cache: Arc<FontCache>,
    ) -> FontProvider {
        FontProvider::new(
            cache,
            http,
            GoogleFontsSettings::default(),
            SystemFonts::new(self.platform()),
        )
    }
}
