//! Command: print version information.

/// Print the iconkit version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("iconkit {}", crate::logging::version());
}
