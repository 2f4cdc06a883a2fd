//! Command: `fonts list | fetch | dirs`.
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};

use super::CommandSetup;
use crate::cli::{DirsOpts, FetchOpts, FontsCommand, GlobalOpts, ListOpts};
use crate::fonts::system::{file_stem, font_extension};
use crate::fonts::{FontChoice, FontProvider, FontSource, google_font_choices, xiroi_font_choices};
use crate::logging::Logger;
use crate::paths::resolve_path;

/// Run a `fonts` subcommand.
///
/// # Errors
///
/// Returns an error if configuration loading fails, the output directory
/// cannot be created, or any requested family could not be fetched.
pub fn run(global: &GlobalOpts, command: &FontsCommand, log: &Logger) -> Result<()> {
    match command {
        FontsCommand::List(opts) => list(opts),
        FontsCommand::Fetch(opts) => {
            let setup = CommandSetup::init(global, log)?;
            fetch(&setup, opts, log)
        }
        FontsCommand::Dirs(opts) => {
            let setup = CommandSetup::init(global, log)?;
            dirs(&setup, opts);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[allow(clippy::print_stdout)]
fn list(opts: &ListOpts) -> Result<()> {
    let choices = if opts.xiroi {
        xiroi_font_choices()
    } else {
        google_font_choices()
    };
    println!("{}", render_choices(&choices, opts.json)?);
    Ok(())
}

/// Render `choices` as JSON or as an aligned two-column table.
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
pub fn render_choices(choices: &[FontChoice], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(choices).context("serialising font choices");
    }
    let width = choices.iter().map(|c| c.value.len()).max().unwrap_or(0);
    Ok(choices
        .iter()
        .map(|c| match c.hint {
            Some(hint) => format!("{:<width$}  {hint}", c.value),
            None => c.value.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

/// Result of fetching one family.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Requested family name.
    pub family: String,
    /// Written file, or why nothing was written.
    pub result: Result<PathBuf>,
}

fn fetch(setup: &CommandSetup, opts: &FetchOpts, log: &Logger) -> Result<()> {
    let out_dir = opts
        .output
        .as_deref()
        .map_or_else(|| setup.config.output_dir(), resolve_path);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    log.stage("Fetching fonts");
    log.debug(&format!("output: {}", out_dir.display()));

    let provider = setup.font_provider();
    let outcomes = fetch_all(&provider, &opts.families, opts.source, &out_dir, opts.parallel);

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => log.info(&format!("{}: {}", outcome.family, path.display())),
            Err(e) => {
                failed += 1;
                log.warn(&format!("{}: {e:#}", outcome.family));
            }
        }
    }

    if failed > 0 {
        if let Some(path) = log.log_path() {
            log.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
        bail!("{failed} of {} font(s) could not be fetched", outcomes.len());
    }
    Ok(())
}

/// Fetch every family from `source` into `out_dir`.
///
/// With `parallel`, families are fetched concurrently on the rayon pool and
/// share `provider`'s cache.  Outcomes are returned in input order.
pub fn fetch_all(
    provider: &FontProvider,
    families: &[String],
    source: FontSource,
    out_dir: &Path,
    parallel: bool,
) -> Vec<FetchOutcome> {
    let run = |family: &String| FetchOutcome {
        family: family.clone(),
        result: fetch_one(provider, family, source, out_dir),
    };
    if parallel {
        use rayon::prelude::*;
        families.par_iter().map(run).collect()
    } else {
        families.iter().map(run).collect()
    }
}

fn fetch_one(
    provider: &FontProvider,
    family: &str,
    source: FontSource,
    out_dir: &Path,
) -> Result<PathBuf> {
    let Some(bytes) = provider.load(family, source) else {
        bail!("font unavailable");
    };
    write_font(out_dir, family, &bytes)
}

/// Write `bytes` to `<out_dir>/<family without spaces>.<ttf|ttc>`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_font(out_dir: &Path, family: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.{}", file_stem(family), font_extension(bytes)));
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// dirs
// ---------------------------------------------------------------------------

#[allow(clippy::print_stdout)]
fn dirs(setup: &CommandSetup, opts: &DirsOpts) {
    let provider = setup.font_provider();
    for candidate in provider.system().candidate_paths(&opts.family) {
        let marker = if candidate.is_file() { "*" } else { " " };
        println!("{marker} {}", candidate.display());
    }
}
