//! # confstrap-formats
//!
//! [`Serializer`](confstrap_core::Serializer) adapters for any type that
//! implements serde's `Serialize` and `DeserializeOwned`.
//!
//! | Adapter       | Encoding                         | Typical use              |
//! |---------------|----------------------------------|--------------------------|
//! | [`Toml`]      | Pretty TOML, UTF-8               | Hand-edited settings     |
//! | [`Json`]      | Pretty JSON                      | Tool-generated settings  |
//! | [`Bincode`]   | Compact binary (bincode 1.x)     | Caches, machine state    |
//!
//! Every adapter is a newtype around the value.  It derefs to the value, so
//! callers read and mutate fields directly, then pass the adapter to
//! `ConfigManager::load` / `save`.  A failed decode leaves the current value
//! untouched.
//!
//! ```rust
//! use confstrap_core::Serializer;
//! use confstrap_formats::Toml;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     volume: u8,
//! }
//!
//! let mut settings = Toml::new(Settings::default());
//! settings.decode(b"volume = 7").unwrap();
//! assert_eq!(settings.volume, 7);
//! ```

/// Implements construction and deref plumbing shared by every adapter.
macro_rules! value_wrapper {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Wraps `value`.
            pub fn new(value: T) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> std::ops::Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }

        impl<T> std::ops::DerefMut for $name<T> {
            fn deref_mut(&mut self) -> &mut T {
                &mut self.0
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use value_wrapper;

mod bincode_format;
mod json_format;
mod toml_format;

pub use bincode_format::Bincode;
pub use json_format::Json;
pub use toml_format::Toml;
