//! Icon generation toolkit support library.
//!
//! Resolves user-supplied paths and loads fonts for text-based icons, either
//! downloaded from Google Fonts or read from the fonts installed on the host.
//!
//! - **[`paths`]**: `~` expansion and absolute path resolution
//! - **[`fonts`]**: Google Fonts download, in-memory cache, system font probing
//! - **[`config`]**: optional TOML configuration file
//! - **[`commands`]**: top-level subcommand orchestration (`resolve`, `fonts`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fonts;
pub mod logging;
pub mod paths;
pub mod platform;
