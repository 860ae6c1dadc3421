//! The pluggable serialization strategy.
//!
//! The manager never looks inside configuration content.  It only asks a
//! [`Serializer`] for bytes (when seeding or saving a file) and hands bytes
//! back to a [`Serializer`] (when loading).  Any format works: TOML, JSON,
//! a binary encoding, or a hand-written key/value layout.
//!
//! Ready-made serde adapters live in the `confstrap-formats` crate.

/// Boxed error returned by serializer implementations.
///
/// The manager wraps it as the cause of a [`crate::ConfigError`], so any
/// error type the format library produces can flow through unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Converts a configuration value to and from its on-disk byte form.
pub trait Serializer {
    /// Encodes the current value.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying format reports when the value cannot be
    /// represented.
    fn encode(&self) -> Result<Vec<u8>, BoxError>;

    /// Replaces the current value with the one decoded from `bytes`.
    ///
    /// On failure the receiver is left in whatever state the implementation
    /// chose; callers must not assume it is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the format's parse error.
    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError>;
}

impl<S: Serializer + ?Sized> Serializer for Box<S> {
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        (**self).encode()
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        (**self).decode(bytes)
    }
}

impl<S: Serializer + ?Sized> Serializer for &mut S {
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        (**self).encode()
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        (**self).decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stores raw bytes; the simplest possible format.
    #[derive(Default)]
    struct Raw(Vec<u8>);

    impl Serializer for Raw {
        fn encode(&self) -> Result<Vec<u8>, BoxError> {
            Ok(self.0.clone())
        }

        fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
            self.0 = bytes.to_vec();
            Ok(())
        }
    }

    #[test]
    fn test_boxed_serializer_forwards_encode_and_decode() {
        // Arrange
        let mut boxed: Box<dyn Serializer> = Box::new(Raw::default());

        // Act
        boxed.decode(b"key = 1").unwrap();

        // Assert
        assert_eq!(boxed.encode().unwrap(), b"key = 1");
    }

    #[test]
    fn test_mut_reference_serializer_mutates_the_referent() {
        fn fill<S: Serializer>(mut target: S) {
            target.decode(b"abc").unwrap();
        }

        let mut raw = Raw::default();
        fill(&mut raw);
        assert_eq!(raw.0, b"abc");
    }
}
