//! Error types for configuration bootstrap, load and save.
//!
//! There are two shapes:
//!
//! - [`Error`] variants without a path, for preconditions checked before the
//!   file system is touched (empty application name, empty load path, saving
//!   before anything was loaded).
//! - [`ConfigError`], for every failure during or after a file-system
//!   interaction.  It always carries the failing [`Operation`], the path it
//!   was working on, and the underlying cause, reachable through
//!   [`std::error::Error::source`].

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::serializer::BoxError;

/// Label of the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Validating [`crate::Defaults`] at construction.
    Initialization,
    /// Building `<home>/.config/<app>/default.conf`.
    ResolveDefaultPath,
    /// Creating the parent directories of a missing config file.
    CreateConfigDirectory,
    /// Encoding the default values for a new file.
    MarshalDefaultConfig,
    /// Writing a freshly seeded config file.
    CreateDefaultConfig,
    /// Reading an existing config file.
    ReadConfig,
    /// Decoding file content into the caller's target.
    UnmarshalConfig,
    /// Encoding the caller's value for saving.
    MarshalConfig,
    /// Overwriting the config file on save.
    SaveConfig,
}

impl Operation {
    /// Returns the short human-readable label used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Initialization => "initialization",
            Operation::ResolveDefaultPath => "resolve default path",
            Operation::CreateConfigDirectory => "create config directory",
            Operation::MarshalDefaultConfig => "marshal default config",
            Operation::CreateDefaultConfig => "create default config",
            Operation::ReadConfig => "read config",
            Operation::UnmarshalConfig => "unmarshal config",
            Operation::MarshalConfig => "marshal config",
            Operation::SaveConfig => "save config",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure tied to a file-system step.
///
/// Renders as `config error: <operation> "<path>": <cause>`, or
/// `config error: <operation>: <cause>` when no path is associated.
#[derive(Debug)]
pub struct ConfigError {
    operation: Operation,
    path: PathBuf,
    source: BoxError,
}

impl ConfigError {
    /// Creates a new error for `operation` on `path` caused by `source`.
    ///
    /// Pass an empty path when the step has no file associated with it.
    pub fn new(
        operation: Operation,
        path: impl Into<PathBuf>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            operation,
            path: path.into(),
            source: source.into(),
        }
    }

    /// The step that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The path the step was working on; empty when none applies.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The wrapped cause.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Consumes the error and returns the wrapped cause.
    pub fn into_cause(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.as_os_str().is_empty() {
            write!(f, "config error: {}: {}", self.operation, self.source)
        } else {
            write!(
                f,
                "config error: {} {:?}: {}",
                self.operation, self.path, self.source
            )
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Every error the manager can return.
#[derive(Debug, Error)]
pub enum Error {
    /// [`crate::Defaults`] failed validation; the message names the field.
    #[error("{0}")]
    Initialization(&'static str),

    /// `load` was called with an empty path.
    #[error("no path provided")]
    NoPathProvided,

    /// `save` was called before any successful `load`.
    #[error("no config has been loaded; nothing to save to")]
    NotLoaded,

    /// A file-system step failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the failing step, if the error has one.
    ///
    /// Validation failures report [`Operation::Initialization`].
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Initialization(_) => Some(Operation::Initialization),
            Error::Config(e) => Some(e.operation()),
            Error::NoPathProvided | Error::NotLoaded => None,
        }
    }

    /// Returns the structured error when this is a file-system failure.
    pub fn as_config_error(&self) -> Option<&ConfigError> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_config_error_with_path_quotes_the_path() {
        // Arrange
        let err = ConfigError::new(
            Operation::UnmarshalConfig,
            "/home/user/.config/app/default.conf",
            "parse error",
        );

        // Act
        let rendered = err.to_string();

        // Assert
        assert_eq!(
            rendered,
            r#"config error: unmarshal config "/home/user/.config/app/default.conf": parse error"#
        );
    }

    #[test]
    fn test_config_error_without_path_omits_the_quotes() {
        let err = ConfigError::new(Operation::MarshalConfig, "", "bad value");
        assert_eq!(err.to_string(), "config error: marshal config: bad value");
    }

    #[test]
    fn test_config_error_source_is_the_wrapped_cause() {
        // Arrange
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::new(Operation::SaveConfig, "/tmp/x.conf", io_err);

        // Act
        let source = err.source().expect("source must be present");

        // Assert
        let io_source = source
            .downcast_ref::<io::Error>()
            .expect("cause must downcast back to io::Error");
        assert_eq!(io_source.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_initialization_error_renders_reason_only() {
        let err = Error::Initialization("AppName must be specified");
        assert_eq!(err.to_string(), "AppName must be specified");
        assert_eq!(err.operation(), Some(Operation::Initialization));
        assert_eq!(Operation::Initialization.to_string(), "initialization");
    }

    #[test]
    fn test_transparent_config_variant_renders_inner_message() {
        let inner = ConfigError::new(Operation::ReadConfig, "/a/b.conf", "boom");
        let expected = inner.to_string();
        let err = Error::from(inner);

        assert_eq!(err.to_string(), expected);
        assert_eq!(err.operation(), Some(Operation::ReadConfig));
        assert!(err.as_config_error().is_some());
    }

    #[test]
    fn test_precondition_errors_have_no_operation() {
        assert_eq!(Error::NoPathProvided.operation(), None);
        assert_eq!(Error::NotLoaded.operation(), None);
        assert_eq!(Error::NoPathProvided.to_string(), "no path provided");
    }
}
