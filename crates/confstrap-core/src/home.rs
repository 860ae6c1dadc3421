//! Home-directory lookup as an injectable capability.
//!
//! The default config path hangs off the user's home directory.  Reading it
//! from process-wide state inside the manager would force tests to mutate
//! `HOME`, so the manager asks a [`HomeDirProvider`] instead.
//!
//! | Provider          | Source                                   |
//! |-------------------|------------------------------------------|
//! | [`SystemHomeDir`] | `dirs::home_dir()` (`$HOME`, user profile) |
//! | [`FixedHomeDir`]  | A path chosen by the caller              |

use std::path::PathBuf;

/// Supplies the directory that `.config/<app>/default.conf` is resolved under.
#[cfg_attr(test, mockall::automock)]
pub trait HomeDirProvider: Send + Sync {
    /// Returns the home directory, or `None` when it cannot be determined
    /// (e.g. no identifiable user profile).
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Resolves the real home directory of the current user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomeDir;

impl HomeDirProvider for SystemHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Always returns the same root directory.
///
/// Useful for tests, sandboxes, and portable installs that keep their
/// configuration next to the executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHomeDir(pub PathBuf);

impl FixedHomeDir {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
}

impl HomeDirProvider for FixedHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}
