//! Font loading for text-based icons.
//!
//! - **[`cache`]**: in-memory downloads keyed by family name
//! - **[`http`]**: blocking HTTP seam ([`HttpClient`], [`UreqClient`])
//! - **[`google`]**: Google Fonts stylesheet and font file download
//! - **[`system`]**: installed-font probing driven by a directory table
//! - **[`choices`]**: curated lists offered to the user
//! - **[`provider`]**: [`FontProvider`], the entry point tying them together

pub mod cache;
pub mod choices;
pub mod google;
pub mod http;
pub mod provider;
pub mod system;

/// Raw font file contents, shared between the cache and callers.
pub type FontBytes = std::sync::Arc<[u8]>;

pub use cache::FontCache;
pub use choices::{FontChoice, google_font_choices, xiroi_font_choices};
pub use google::GoogleFontsSettings;
pub use http::{HttpClient, UreqClient};
pub use provider::{FontProvider, FontSource};
pub use system::SystemFonts;
