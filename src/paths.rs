//! Path resolution: tilde expansion and lexical normalisation.
//!
//! [`resolve_path`] turns any user-supplied string into an absolute path.
//! It never fails and never touches the filesystem beyond reading the
//! working directory; symlinks are not followed.

use std::path::{Component, Path, PathBuf};

/// Resolve `input` to an absolute, normalised path.
///
/// A leading `~` followed by a separator (or nothing) expands to the user's
/// home directory.  Everything else is resolved against the current working
/// directory.  When the working directory is unavailable the home directory
/// stands in for it.
#[must_use]
pub fn resolve_path(input: &str) -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR));
    let cwd = std::env::current_dir().unwrap_or_else(|_| home.clone());
    resolve_path_with(input, &home, &cwd)
}

/// Resolve `input` against explicit `home` and `cwd` directories.
///
/// Pure counterpart of [`resolve_path`]; both directories are expected to
/// be absolute.
#[must_use]
pub fn resolve_path_with(input: &str, home: &Path, cwd: &Path) -> PathBuf {
    if let Some(rest) = strip_tilde(input) {
        let rest = rest.trim_start_matches(is_separator);
        return normalize(&home.join(rest));
    }
    normalize(&cwd.join(input))
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` at the root stays at the root.  Whitespace inside components is
/// preserved.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Return the remainder after a leading `~` when it names the home directory.
///
/// `~user` and tildes past the first character are left alone.
fn strip_tilde(input: &str) -> Option<&str> {
    let rest = input.strip_prefix('~')?;
    (rest.is_empty() || rest.starts_with(is_separator)).then_some(rest)
}

fn is_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}
