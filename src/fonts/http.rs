//! HTTP transport used by the Google Fonts loader.
//!
//! Provides the [`HttpClient`] trait so the download pipeline can be unit
//! tested without network access.  Production code uses [`UreqClient`].

use std::time::Duration;

use crate::error::FontError;

/// Upper bound on a downloaded font file.
const MAX_FONT_BYTES: u64 = 32 * 1024 * 1024;

/// Minimal blocking HTTP GET abstraction.
///
/// Non-success statuses and transport failures are both reported as
/// [`FontError`] values; implementations never panic.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Status`] for non-success responses and
    /// [`FontError::Network`] for transport or decoding failures.
    fn get_text(&self, url: &str, user_agent: &str) -> Result<String, FontError>;

    /// Fetch `url` and return the raw body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get_text`].
    fn get_bytes(&self, url: &str, user_agent: &str) -> Result<Vec<u8>, FontError>;
}

/// Production [`HttpClient`] backed by a [`ureq::Agent`].
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqClient").finish_non_exhaustive()
    }
}

impl UreqClient {
    /// Create a client.  `timeout` bounds each whole request; `None` means
    /// no limit.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();
        Self {
            agent: config.into(),
        }
    }

    fn call(
        &self,
        url: &str,
        user_agent: &str,
    ) -> Result<ureq::http::Response<ureq::Body>, FontError> {
        self.agent
            .get(url)
            .header("User-Agent", user_agent)
            .call()
            .map_err(|e| map_error(url, e))
    }
}

impl HttpClient for UreqClient {
    fn get_text(&self, url: &str, user_agent: &str) -> Result<String, FontError> {
        let mut response = self.call(url, user_agent)?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| map_error(url, e))
    }

    fn get_bytes(&self, url: &str, user_agent: &str) -> Result<Vec<u8>, FontError> {
        let mut response = self.call(url, user_agent)?;
        response
            .body_mut()
            .with_config()
            .limit(MAX_FONT_BYTES)
            .read_to_vec()
            .map_err(|e| map_error(url, e))
    }
}

/// Convert a [`ureq::Error`] into the matching [`FontError`].
fn map_error(url: &str, err: ureq::Error) -> FontError {
    match err {
        ureq::Error::StatusCode(status) => FontError::Status {
            url: url.to_string(),
            status,
        },
        other => FontError::Network {
            url: url.to_string(),
            reason: other.to_string(),
        },
    }
}
