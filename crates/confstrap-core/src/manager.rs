//! Resolves, seeds, loads and saves a single per-user configuration file.
//!
//! Default location:
//!
//! ```text
//! <home>/.config/<app_name>/default.conf
//! ```
//!
//! On first load the file does not exist yet, so the manager creates the
//! directory tree and writes whatever the default-values serializer encodes.
//! Later loads trust the existing content.  `save` writes back to the path
//! of the last successful load.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► Unloaded ──load()──► Loaded ──load()/save()──► Loaded
//! ```
//!
//! Nothing here locks the file.  Two managers pointed at the same path can
//! race on check-then-create and on overwrite; callers that share a path
//! across threads or processes must coordinate themselves.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Error, Operation, Result};
use crate::home::{HomeDirProvider, SystemHomeDir};
use crate::serializer::Serializer;

/// Directory under the home directory that holds per-application folders.
pub const CONFIG_DIR_NAME: &str = ".config";

/// File name of the default configuration file.
pub const DEFAULT_FILE_NAME: &str = "default.conf";

/// Mode for directories created on first run (rwxr-xr-x).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Mode for files created by the manager (rw-r--r--).
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Construction input for [`ConfigManager`].
pub struct Defaults {
    /// Names the `~/.config/<app_name>` subdirectory.  Must not be empty.
    pub app_name: String,
    /// Encoded into a new file when none exists yet.  Must be present.
    pub default_values: Option<Box<dyn Serializer + Send + Sync>>,
}

impl Defaults {
    /// Builds defaults with both required fields set.
    pub fn new(
        app_name: impl Into<String>,
        default_values: impl Serializer + Send + Sync + 'static,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            default_values: Some(Box::new(default_values)),
        }
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("app_name", &self.app_name)
            .field("default_values", &self.default_values.is_some())
            .finish()
    }
}

/// Loads and saves one configuration file through a [`Serializer`].
pub struct ConfigManager {
    app_name: String,
    default_values: Box<dyn Serializer + Send + Sync>,
    home: Box<dyn HomeDirProvider>,
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager that resolves the default path under the real home
    /// directory.
    ///
    /// Touches nothing on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] when `app_name` is empty or
    /// `default_values` is missing.
    pub fn new(defaults: Defaults) -> Result<Self> {
        Self::with_home_provider(defaults, SystemHomeDir)
    }

    /// Like [`ConfigManager::new`], with an explicit home-directory provider.
    ///
    /// # Errors
    ///
    /// Same validation as [`ConfigManager::new`].
    pub fn with_home_provider(
        defaults: Defaults,
        home: impl HomeDirProvider + 'static,
    ) -> Result<Self> {
        if defaults.app_name.is_empty() {
            return Err(Error::Initialization("AppName must be specified"));
        }
        let default_values = defaults
            .default_values
            .ok_or(Error::Initialization("DefaultConfigValues must be specified"))?;

        Ok(Self {
            app_name: defaults.app_name,
            default_values,
            home: Box::new(home),
            path: None,
        })
    }

    /// The application name this manager was built with.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Path of the last successful load, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns `<home>/.config/<app_name>/default.conf`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] with [`Operation::ResolveDefaultPath`] when
    /// the provider cannot determine a home directory.
    pub fn default_path(&self) -> Result<PathBuf> {
        let home = self.home.home_dir().ok_or_else(|| {
            ConfigError::new(
                Operation::ResolveDefaultPath,
                PathBuf::new(),
                "could not determine home directory",
            )
        })?;
        let path = home
            .join(CONFIG_DIR_NAME)
            .join(&self.app_name)
            .join(DEFAULT_FILE_NAME);
        debug!("resolved default config path {}", path.display());
        Ok(path)
    }

    /// Creates `path` with the encoded default values unless something
    /// already exists there.
    ///
    /// Existing content is not validated.  If the directory is created but
    /// the write fails, the directory stays and the next call retries the
    /// file.
    ///
    /// # Errors
    ///
    /// [`Operation::CreateConfigDirectory`], [`Operation::MarshalDefaultConfig`]
    /// or [`Operation::CreateDefaultConfig`], depending on which step failed.
    pub fn ensure_config_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(());
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_dir_all(dir)
                .map_err(|e| ConfigError::new(Operation::CreateConfigDirectory, dir, e))?;
        }

        let data = self.default_values.encode().map_err(|e| {
            warn!("failed to encode default config for {}: {e}", path.display());
            ConfigError::new(Operation::MarshalDefaultConfig, path, e)
        })?;

        write_file(path, &data)
            .map_err(|e| ConfigError::new(Operation::CreateDefaultConfig, path, e))?;

        info!(
            "created default config for {} at {} ({} bytes)",
            self.app_name,
            path.display(),
            data.len()
        );
        Ok(())
    }

    /// Loads `path` into `target`, seeding the file with defaults first if it
    /// is missing.  On success `path` becomes the save target.
    ///
    /// An empty path is rejected; use [`ConfigManager::load_default`] for the
    /// standard location.
    ///
    /// # Errors
    ///
    /// - [`Error::NoPathProvided`] for an empty path.
    /// - Any error from [`ConfigManager::ensure_config_file`].
    /// - [`Operation::ReadConfig`] or [`Operation::UnmarshalConfig`].
    pub fn load<S>(&mut self, path: impl AsRef<Path>, target: &mut S) -> Result<()>
    where
        S: Serializer + ?Sized,
    {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::NoPathProvided);
        }

        self.ensure_config_file(path)?;

        let bytes =
            fs::read(path).map_err(|e| ConfigError::new(Operation::ReadConfig, path, e))?;

        target.decode(&bytes).map_err(|e| {
            warn!("failed to decode config {}: {e}", path.display());
            ConfigError::new(Operation::UnmarshalConfig, path, e)
        })?;

        debug!("loaded config from {} ({} bytes)", path.display(), bytes.len());
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Resolves [`ConfigManager::default_path`] and loads it.
    ///
    /// # Errors
    ///
    /// Path resolution errors, then anything [`ConfigManager::load`] returns.
    pub fn load_default<S>(&mut self, target: &mut S) -> Result<()>
    where
        S: Serializer + ?Sized,
    {
        let path = self.default_path()?;
        self.load(path, target)
    }

    /// Encodes `source` and overwrites the file from the last successful load.
    ///
    /// The write is a plain truncate-and-write, not an atomic replace.
    ///
    /// # Errors
    ///
    /// - [`Error::NotLoaded`] when nothing has been loaded yet.
    /// - [`Operation::MarshalConfig`] or [`Operation::SaveConfig`].
    pub fn save<S>(&self, source: &S) -> Result<()>
    where
        S: Serializer + ?Sized,
    {
        let path = self.path.as_deref().ok_or(Error::NotLoaded)?;

        let data = source
            .encode()
            .map_err(|e| ConfigError::new(Operation::MarshalConfig, PathBuf::new(), e))?;

        write_file(path, &data).map_err(|e| ConfigError::new(Operation::SaveConfig, path, e))?;

        debug!("saved config to {} ({} bytes)", path.display(), data.len());
        Ok(())
    }
}

impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigManager")
            .field("app_name", &self.app_name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ── File-system helpers ───────────────────────────────────────────────────────

fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
