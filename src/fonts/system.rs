//! Installed-font probing across platform font directories.
//!
//! Candidate locations come from [`FONT_DIRECTORIES`], a table keyed by
//! [`Os`].  Probing order is data-driven: the macOS and Linux rows are tried
//! on every host, the Windows rows only on Windows.

use std::path::PathBuf;

use crate::error::FontError;
use crate::platform::{Os, Platform};

/// Where a font directory is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirBase {
    /// Absolute system-wide directory.
    Root,
    /// Directory relative to the user's home.
    Home,
    /// Directory relative to the Windows installation (`%WINDIR%`).
    WindowsDir,
}

/// One row of the font directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDirectory {
    /// Platform the directory belongs to.
    pub os: Os,
    /// Anchor for [`FontDirectory::path`].
    pub base: DirBase,
    /// Directory path, absolute for [`DirBase::Root`] and relative otherwise.
    pub path: &'static str,
    /// File extensions tried, in order.
    pub extensions: &'static [&'static str],
}

const TTF: &[&str] = &["ttf"];
const TTF_TTC: &[&str] = &["ttf", "ttc"];

/// Known font directories, in probing order within each platform.
pub const FONT_DIRECTORIES: &[FontDirectory] = &[
    FontDirectory {
        os: Os::MacOs,
        base: DirBase::Root,
        path: "/System/Library/Fonts",
        extensions: TTF_TTC,
    },
    FontDirectory {
        os: Os::MacOs,
        base: DirBase::Root,
        path: "/System/Library/Fonts/Supplemental",
        extensions: TTF_TTC,
    },
    FontDirectory {
        os: Os::MacOs,
        base: DirBase::Root,
        path: "/Library/Fonts",
        extensions: TTF_TTC,
    },
    FontDirectory {
        os: Os::MacOs,
        base: DirBase::Home,
        path: "Library/Fonts",
        extensions: TTF_TTC,
    },
    FontDirectory {
        os: Os::Linux,
        base: DirBase::Root,
        path: "/usr/share/fonts/truetype",
        extensions: TTF,
    },
    FontDirectory {
        os: Os::Linux,
        base: DirBase::Root,
        path: "/usr/share/fonts/TTF",
        extensions: TTF,
    },
    FontDirectory {
        os: Os::Linux,
        base: DirBase::Root,
        path: "/usr/local/share/fonts",
        extensions: TTF,
    },
    FontDirectory {
        os: Os::Linux,
        base: DirBase::Home,
        path: ".fonts",
        extensions: TTF,
    },
    FontDirectory {
        os: Os::Linux,
        base: DirBase::Home,
        path: ".local/share/fonts",
        extensions: TTF,
    },
    FontDirectory {
        os: Os::Windows,
        base: DirBase::WindowsDir,
        path: "Fonts",
        extensions: TTF_TTC,
    },
];

/// Platforms whose directory rows are probed on a host running `os`.
#[must_use]
pub const fn probed_platforms(os: Os) -> &'static [Os] {
    match os {
        Os::Windows => &[Os::MacOs, Os::Linux, Os::Windows],
        Os::Linux | Os::MacOs => &[Os::MacOs, Os::Linux],
    }
}

/// File stem used for lookups: the family name with spaces removed.
#[must_use]
pub fn file_stem(family: &str) -> String {
    family.replace(' ', "")
}

/// Extension matching the container format of `bytes`.
///
/// TrueType collections start with the `ttcf` tag; everything else is
/// written as `.ttf`.
#[must_use]
pub fn font_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"ttcf") {
        "ttc"
    } else {
        "ttf"
    }
}

/// Return the Windows installation directory (`%WINDIR%`, default `C:\Windows`).
fn windows_dir() -> PathBuf {
    std::env::var_os("WINDIR").map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from)
}

/// Locates installed fonts by probing candidate files in order.
#[derive(Debug, Clone)]
pub struct SystemFonts {
    platform: Platform,
    windows_dir: PathBuf,
    extra_dirs: Vec<PathBuf>,
}

impl SystemFonts {
    /// Probe the built-in directories for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            windows_dir: windows_dir(),
            extra_dirs: Vec::new(),
        }
    }

    /// Also probe `dirs` (after the built-in table) for `.ttf`/`.ttc` files.
    #[must_use]
    pub fn with_extra_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.extra_dirs = dirs;
        self
    }

    /// Directories probed, in order, with the extensions tried in each.
    #[must_use]
    pub fn directories(&self) -> Vec<(PathBuf, &'static [&'static str])> {
        let mut dirs = Vec::new();
        for os in probed_platforms(self.platform.os) {
            for entry in FONT_DIRECTORIES.iter().filter(|d| d.os == *os) {
                let dir = match entry.base {
                    DirBase::Root => PathBuf::from(entry.path),
                    DirBase::Home => self.platform.home.join(entry.path),
                    DirBase::WindowsDir => self.windows_dir.join(entry.path),
                };
                dirs.push((dir, entry.extensions));
            }
        }
        dirs.extend(self.extra_dirs.iter().map(|d| (d.clone(), TTF_TTC)));
        dirs
    }

    /// Candidate font files for `family`, in probing order.
    #[must_use]
    pub fn candidate_paths(&self, family: &str) -> Vec<PathBuf> {
        let stem = file_stem(family);
        let stem = stem.as_str();
        self.directories()
            .into_iter()
            .flat_map(|(dir, extensions)| {
                extensions
                    .iter()
                    .map(move |ext| dir.join(format!("{stem}.{ext}")))
            })
            .collect()
    }

    /// Read the first readable candidate for `family`.
    ///
    /// Per-candidate failures (missing file, permission denied, directory in
    /// the way) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::NotFound`] when no candidate could be read.
    pub fn find(&self, family: &str) -> Result<(PathBuf, Vec<u8>), FontError> {
        for candidate in self.candidate_paths(family) {
            match std::fs::read(&candidate) {
                Ok(bytes) => return Ok((candidate, bytes)),
                Err(e) => tracing::trace!("skip {}: {e}", candidate.display()),
            }
        }
        Err(FontError::NotFound {
            family: family.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::Path;

    fn linux(home: &Path) -> SystemFonts {
        SystemFonts::new(Platform::new(Os::Linux, home))
    }

    #[test]
    fn file_stem_removes_all_spaces() {
        assert_eq!(file_stem("TT Satoshi Medium"), "TTSatoshiMedium");
        assert_eq!(file_stem(" Arial "), "Arial");
        assert_eq!(file_stem("Roboto"), "Roboto");
    }

    #[test]
    fn font_extension_detects_collections() {
        assert_eq!(font_extension(b"ttcf\x00\x01"), "ttc");
        assert_eq!(font_extension(b"\x00\x01\x00\x00"), "ttf");
        assert_eq!(font_extension(b""), "ttf");
    }

    #[test]
    fn probed_platforms_windows_only_on_windows() {
        assert!(!probed_platforms(Os::Linux).contains(&Os::Windows));
        assert!(!probed_platforms(Os::MacOs).contains(&Os::Windows));
        assert!(probed_platforms(Os::Windows).contains(&Os::Windows));
    }

    #[test]
    fn macos_and_linux_rows_probed_everywhere() {
        for os in [Os::Linux, Os::MacOs, Os::Windows] {
            let probed = probed_platforms(os);
            assert!(probed.contains(&Os::MacOs), "{os}");
            assert!(probed.contains(&Os::Linux), "{os}");
        }
    }

    #[test]
    fn candidates_start_with_macos_system_fonts() {
        let fonts = linux(Path::new("/home/u"));
        let candidates = fonts.candidate_paths("TT Satoshi");
        assert_eq!(
            candidates[0],
            PathBuf::from("/System/Library/Fonts/TTSatoshi.ttf")
        );
        assert_eq!(
            candidates[1],
            PathBuf::from("/System/Library/Fonts/TTSatoshi.ttc")
        );
    }

    #[test]
    fn candidates_include_user_directories() {
        let fonts = linux(Path::new("/home/u"));
        let candidates = fonts.candidate_paths("Arial");
        assert!(candidates.contains(&PathBuf::from("/home/u/Library/Fonts/Arial.ttc")));
        assert!(candidates.contains(&PathBuf::from("/home/u/.fonts/Arial.ttf")));
        assert!(candidates.contains(&PathBuf::from("/home/u/.local/share/fonts/Arial.ttf")));
    }

    #[test]
    fn linux_directories_only_try_ttf() {
        let fonts = linux(Path::new("/home/u"));
        let candidates = fonts.candidate_paths("Arial");
        assert!(!candidates.contains(&PathBuf::from("/usr/share/fonts/truetype/Arial.ttc")));
        assert!(candidates.contains(&PathBuf::from("/usr/share/fonts/truetype/Arial.ttf")));
    }

    #[test]
    fn macos_rows_precede_linux_rows() {
        let fonts = linux(Path::new("/home/u"));
        let candidates = fonts.candidate_paths("Arial");
        let mac = candidates
            .iter()
            .position(|p| p.starts_with("/Library/Fonts"))
            .unwrap();
        let lin = candidates
            .iter()
            .position(|p| p.starts_with("/usr/share/fonts"))
            .unwrap();
        assert!(mac < lin);
    }

    #[test]
    fn windows_directory_only_on_windows_hosts() {
        let mut fonts = linux(Path::new("/home/u"));
        fonts.windows_dir = PathBuf::from("/win");
        assert!(
            !fonts
                .candidate_paths("Arial")
                .iter()
                .any(|p| p.starts_with("/win"))
        );

        let mut fonts = SystemFonts::new(Platform::new(Os::Windows, "/home/u"));
        fonts.windows_dir = PathBuf::from("/win");
        let candidates = fonts.candidate_paths("Arial");
        let n = candidates.len();
        assert_eq!(candidates[n - 2], PathBuf::from("/win/Fonts/Arial.ttf"));
        assert_eq!(candidates[n - 1], PathBuf::from("/win/Fonts/Arial.ttc"));
    }

    #[test]
    fn extra_dirs_are_probed_last() {
        let fonts = linux(Path::new("/home/u")).with_extra_dirs(vec![PathBuf::from("/opt/brand")]);
        let candidates = fonts.candidate_paths("Brand Sans");
        let n = candidates.len();
        assert_eq!(candidates[n - 2], PathBuf::from("/opt/brand/BrandSans.ttf"));
        assert_eq!(candidates[n - 1], PathBuf::from("/opt/brand/BrandSans.ttc"));
    }

    #[test]
    fn find_reads_first_existing_candidate() {
        let home = tempfile::tempdir().unwrap();
        let fonts_dir = home.path().join(".fonts");
        std::fs::create_dir_all(&fonts_dir).unwrap();
        std::fs::write(fonts_dir.join("IconkitProbeSans.ttf"), b"first").unwrap();

        let local = home.path().join(".local/share/fonts");
        std::fs::create_dir_all(&local).unwrap();
        std::fs::write(local.join("IconkitProbeSans.ttf"), b"second").unwrap();

        let (path, bytes) = linux(home.path()).find("Iconkit Probe Sans").unwrap();
        assert_eq!(path, fonts_dir.join("IconkitProbeSans.ttf"));
        assert_eq!(bytes, b"first");
    }

    #[test]
    fn find_skips_unreadable_candidates() {
        let home = tempfile::tempdir().unwrap();
        // A directory where a file is expected cannot be read as a font.
        std::fs::create_dir_all(home.path().join(".fonts/IconkitProbeMono.ttf")).unwrap();
        let local = home.path().join(".local/share/fonts");
        std::fs::create_dir_all(&local).unwrap();
        std::fs::write(local.join("IconkitProbeMono.ttf"), b"ok").unwrap();

        let (_, bytes) = linux(home.path()).find("Iconkit Probe Mono").unwrap();
        assert_eq!(bytes, b"ok");
    }

    #[test]
    fn find_not_found_when_nothing_matches() {
        let home = tempfile::tempdir().unwrap();
        let err = linux(home.path())
            .find("Iconkit Font That Does Not Exist")
            .unwrap_err();
        assert!(matches!(err, FontError::NotFound { .. }));
    }

    #[test]
    fn find_uses_extra_dirs() {
        let home = tempfile::tempdir().unwrap();
        let brand = tempfile::tempdir().unwrap();
        std::fs::write(brand.path().join("IconkitBrand.ttc"), b"ttcf").unwrap();
        let fonts = linux(home.path()).with_extra_dirs(vec![brand.path().to_path_buf()]);
        let (path, _) = fonts.find("Iconkit Brand").unwrap();
        assert_eq!(path, brand.path().join("IconkitBrand.ttc"));
    }
}
