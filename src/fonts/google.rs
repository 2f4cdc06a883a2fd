//! Google Fonts download pipeline: stylesheet request, URL extraction, and
//! font file download.
//!
//! The stylesheet is requested with a legacy Safari user agent.  Google
//! serves modern browsers compressed WOFF2 files; for this agent it answers
//! with a stylesheet whose `src` points at a plain TrueType file, which is
//! what the renderer needs.

use std::sync::LazyLock;

use regex::Regex;

use super::http::HttpClient;
use crate::error::FontError;

/// Google Fonts CSS API v2 endpoint.
pub const CSS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

/// User agent that makes the CSS API reference `.ttf` files.
pub const LEGACY_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/534.59.8";

/// Matches the first `url(...)` inside a `src:` declaration, after any
/// `local(...)` entries.
static SRC_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"src:[^;}]*?url\(\s*([^)]+?)\s*\)").ok());

/// Where and how to reach the Google Fonts CSS API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleFontsSettings {
    /// CSS API endpoint, without query string.
    pub css_endpoint: String,
    /// User agent sent with the stylesheet request.
    pub user_agent: String,
}

impl Default for GoogleFontsSettings {
    fn default() -> Self {
        Self {
            css_endpoint: CSS_ENDPOINT.to_string(),
            user_agent: LEGACY_USER_AGENT.to_string(),
        }
    }
}

/// Build the stylesheet URL for `family` at weight 400.
#[must_use]
pub fn css_url(endpoint: &str, family: &str) -> String {
    format!(
        "{endpoint}?family={}:wght@400&display=swap",
        family.replace(' ', "+")
    )
}

/// Extract the font file URL from a stylesheet.
///
/// Surrounding quotes inside `url(...)` are removed.
#[must_use]
pub fn extract_font_url(css: &str) -> Option<&str> {
    let captures = SRC_URL.as_ref()?.captures(css)?;
    let url = captures.get(1)?.as_str();
    let url = url.trim_matches(|c| c == '"' || c == '\'');
    (!url.is_empty()).then_some(url)
}

/// Download `family` from Google Fonts.
///
/// Performs the two requests without consulting any cache.
///
/// # Errors
///
/// Returns [`FontError::Status`] or [`FontError::Network`] when either
/// request fails and [`FontError::Parse`] when the stylesheet has no font
/// URL.
pub fn download(
    http: &dyn HttpClient,
    settings: &GoogleFontsSettings,
    family: &str,
) -> Result<Vec<u8>, FontError> {
    let url = css_url(&settings.css_endpoint, family);
    tracing::debug!("requesting stylesheet {url}");
    let css = http.get_text(&url, &settings.user_agent)?;

    let font_url = extract_font_url(&css).ok_or_else(|| FontError::Parse {
        family: family.to_string(),
    })?;
    tracing::debug!("downloading font file {font_url}");
    http.get_bytes(font_url, &settings.user_agent)
}
