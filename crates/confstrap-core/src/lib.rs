//! # confstrap-core
//!
//! Bootstraps a per-user configuration file and loads/saves it through a
//! caller-supplied [`Serializer`].
//!
//! The whole flow is:
//!
//! 1. Build a [`ConfigManager`] from [`Defaults`] (application name plus a
//!    serializer holding the default values).
//! 2. Load from an explicit path, or from `<home>/.config/<app>/default.conf`
//!    via [`ConfigManager::load_default`].  A missing file is created and
//!    seeded with the encoded defaults first.
//! 3. Save back to the path of the last successful load.
//!
//! This crate never looks inside the file.  Format adapters for serde types
//! (TOML, JSON, bincode) live in `confstrap-formats`.

pub mod error;
pub mod home;
pub mod manager;
pub mod mock;
pub mod serializer;

pub use error::{ConfigError, Error, Operation, Result};
pub use home::{FixedHomeDir, HomeDirProvider, SystemHomeDir};
pub use manager::{ConfigManager, Defaults, CONFIG_DIR_NAME, DEFAULT_FILE_NAME};
pub use serializer::{BoxError, Serializer};
