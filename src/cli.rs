//! Command-line interface definition.
use clap::{Parser, Subcommand};

use crate::fonts::FontSource;

/// Top-level CLI entry point for iconkit.
#[derive(Parser, Debug)]
#[command(
    name = "iconkit",
    about = "Icon generation toolkit: font loading and path resolution",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Config file (default: $XDG_CONFIG_HOME/iconkit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the absolute form of each path
    Resolve(ResolveOpts),
    /// List, fetch, and locate fonts
    #[command(subcommand)]
    Fonts(FontsCommand),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the per-command log file.
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Resolve(_) => "resolve",
            Self::Fonts(_) => "fonts",
            Self::Version => "version",
        }
    }
}

/// Options for the `resolve` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ResolveOpts {
    /// Paths to resolve (`~` expands to the home directory)
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// `fonts` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum FontsCommand {
    /// List the curated font choices
    List(ListOpts),
    /// Download or locate fonts and write them to the output directory
    Fetch(FetchOpts),
    /// Show the installed-font files probed for a family
    Dirs(DirsOpts),
}

/// Options for `fonts list`.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// List the Xiroi brand weights instead of Google Fonts
    #[arg(long)]
    pub xiroi: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Options for `fonts fetch`.
#[derive(Parser, Debug, Clone)]
pub struct FetchOpts {
    /// Font families to fetch (e.g. "Roboto" "Open Sans")
    #[arg(required = true)]
    pub families: Vec<String>,

    /// Where to look for each family
    #[arg(short, long, value_enum, default_value_t = FontSource::Auto)]
    pub source: FontSource,

    /// Output directory (default: [output] dir from the config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Fetch families one at a time (parallel is enabled by default)
    #[arg(long = "no-parallel", action = clap::ArgAction::SetFalse)]
    pub parallel: bool,
}

/// Options for `fonts dirs`.
#[derive(Parser, Debug, Clone)]
pub struct DirsOpts {
    /// Font family to show candidates for
    pub family: String,
}
