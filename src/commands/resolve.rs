//! Command: print resolved absolute paths.
use std::path::PathBuf;

use crate::cli::ResolveOpts;
use crate::logging::Logger;
use crate::paths::resolve_path;

/// Resolve every input path, in order.
#[must_use]
pub fn resolve_all(paths: &[String]) -> Vec<PathBuf> {
    paths.iter().map(|p| resolve_path(p)).collect()
}

/// Run the resolve command: one absolute path per line on stdout.
#[allow(clippy::print_stdout)]
pub fn run(opts: &ResolveOpts, log: &Logger) {
    for (input, resolved) in opts.paths.iter().zip(resolve_all(&opts.paths)) {
        log.debug(&format!("{input} -> {}", resolved.display()));
        println!("{}", resolved.display());
    }
}
