//! Recording serializer for tests.
//!
//! [`MockSerializer`] does no real encoding.  `encode` returns a fixed byte
//! string, `decode` records what it was given, and either can be told to
//! fail.  This is always compiled (not `#[cfg(test)]`) so downstream crates
//! can use it in their own tests.
//!
//! Call records live behind an `Arc`, so a clone observes the same counters.
//! Hand one clone to the manager and keep the other for assertions:
//!
//! ```rust
//! use confstrap_core::mock::MockSerializer;
//! use confstrap_core::{ConfigManager, Defaults, FixedHomeDir};
//!
//! let home = std::env::temp_dir().join("confstrap-doc-mock");
//! let defaults = MockSerializer::with_data(b"seed".to_vec());
//! let probe = defaults.clone();
//!
//! let manager = ConfigManager::with_home_provider(
//!     Defaults::new("doc-app", defaults),
//!     FixedHomeDir::new(&home),
//! )
//! .unwrap();
//!
//! assert_eq!(probe.encode_calls(), 0);
//! # let _ = manager;
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::serializer::{BoxError, Serializer};

#[derive(Debug, Default)]
struct Calls {
    encode: AtomicUsize,
    decode: AtomicUsize,
    decoded: Mutex<Vec<Vec<u8>>>,
}

/// A serializer that records calls instead of parsing anything.
#[derive(Debug, Clone, Default)]
pub struct MockSerializer {
    /// Bytes returned by every successful `encode`.
    pub data: Vec<u8>,
    /// When set, `encode` fails with this message.
    pub encode_error: Option<String>,
    /// When set, `decode` fails with this message (after recording the call).
    pub decode_error: Option<String>,
    calls: Arc<Calls>,
}

impl MockSerializer {
    /// Creates a mock with empty data and no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `encode` returns `data`.
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Makes `encode` fail with `message`.
    pub fn failing_encode(mut self, message: impl Into<String>) -> Self {
        self.encode_error = Some(message.into());
        self
    }

    /// Makes `decode` fail with `message`.
    pub fn failing_decode(mut self, message: impl Into<String>) -> Self {
        self.decode_error = Some(message.into());
        self
    }

    /// Number of `encode` calls across all clones.
    pub fn encode_calls(&self) -> usize {
        self.calls.encode.load(Ordering::SeqCst)
    }

    /// Number of `decode` calls across all clones.
    pub fn decode_calls(&self) -> usize {
        self.calls.decode.load(Ordering::SeqCst)
    }

    /// Every byte slice passed to `decode`, oldest first.
    pub fn decoded(&self) -> Vec<Vec<u8>> {
        match self.calls.decoded.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Serializer for MockSerializer {
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        self.calls.encode.fetch_add(1, Ordering::SeqCst);
        match &self.encode_error {
            Some(message) => Err(message.clone().into()),
            None => Ok(self.data.clone()),
        }
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        self.calls.decode.fetch_add(1, Ordering::SeqCst);
        match self.calls.decoded.lock() {
            Ok(mut guard) => guard.push(bytes.to_vec()),
            Err(poisoned) => poisoned.into_inner().push(bytes.to_vec()),
        }
        match &self.decode_error {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}
