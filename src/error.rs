//! Domain-specific error types for iconkit.
//!
//! Internal modules return typed errors built with [`thiserror`]; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via `?`.
//!
//! - [`FontError`]: Google Fonts download, CSS parsing, system probing
//! - [`ConfigError`]: config file I/O and TOML parsing
//!
//! [`FontError`] never escapes [`FontProvider`](crate::fonts::FontProvider):
//! the provider logs it and reports the font as unavailable.

use thiserror::Error;

/// Errors raised while resolving a font family to bytes.
#[derive(Error, Debug)]
pub enum FontError {
    /// Transport-level failure (DNS, TLS, connection reset, body read).
    #[error("Request to {url} failed: {reason}")]
    Network {
        /// URL that was requested.
        url: String,
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The stylesheet did not contain a `src: url(...)` declaration.
    #[error("No font URL found in stylesheet for '{family}'")]
    Parse {
        /// Font family that was requested.
        family: String,
    },

    /// No candidate font file could be read.
    #[error("Font '{family}' not found")]
    NotFound {
        /// Font family that was requested.
        family: String,
    },
}

/// Errors that arise from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unexpected fields.
    #[error("Invalid config file {path}: {message}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Parser message.
        message: String,
    },
}
