//! Operating system detection.
//!
//! Detection runs once at startup; the result is stored in the shell
//! context and passed to whatever needs it.

use std::fmt;

/// Desktop operating system families with distinct window behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Linux and other Unix-like systems.
    Linux,
    /// Anything else.
    Other,
}

impl Os {
    /// Detect the OS this binary runs on.
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Classify an OS name.
    ///
    /// Matching is case-insensitive and substring based so that values such
    /// as `"Windows 11"` or `"Mac OS X"` classify the same way as Rust's
    /// `std::env::consts::OS` values.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.contains("win") {
            Self::Windows
        } else if name.contains("mac") || name.contains("darwin") {
            Self::MacOs
        } else if name.contains("nix") || name.contains("nux") || name.contains("aix") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether this is macOS.
    pub fn is_macos(self) -> bool {
        self == Self::MacOs
    }

    /// Whether this is Windows.
    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}
