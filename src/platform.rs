//! Host platform detection.
use std::fmt;
use std::path::PathBuf;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux and other Unix-like systems.
    Linux,
    /// Apple macOS.
    MacOs,
    /// Microsoft Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Host operating system.
    pub os: Os,
    /// Invoking user's home directory.
    pub home: PathBuf,
}

impl Platform {
    /// Detect the current platform.
    ///
    /// Falls back to the filesystem root when no home directory can be
    /// determined, so path resolution stays total.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            home: Self::detect_home(),
        }
    }

    /// Create a platform with explicit values (for testing).
    #[must_use]
    pub fn new(os: Os, home: impl Into<PathBuf>) -> Self {
        Self {
            os,
            home: home.into(),
        }
    }

    const fn detect_os() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            // Default to Linux for other Unix-like systems
            Os::Linux
        }
    }

    fn detect_home() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
    }
}
