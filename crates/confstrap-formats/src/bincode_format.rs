//! Binary adapter backed by bincode 1.x.
//!
//! Not meant for hand editing.  Bincode has no field names, so adding or
//! reordering struct fields breaks files written by an older build.

use confstrap_core::{BoxError, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes the wrapped value with bincode's default options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bincode<T>(pub T);

crate::value_wrapper!(Bincode);

impl<T> Serializer for Bincode<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        Ok(bincode::serialize(&self.0)?)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        self.0 = bincode::deserialize(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct WindowState {
        width: u32,
        height: u32,
        maximized: bool,
    }

    #[test]
    fn test_encoding_is_compact() {
        let state = Bincode::new(WindowState {
            width: 1920,
            height: 1080,
            maximized: true,
        });

        let bytes = state.encode().unwrap();

        // Two little-endian u32 values plus one bool byte.
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        let mut state = Bincode::new(WindowState::default());

        let result = state.decode(&[0x80, 0x07]);

        assert!(result.is_err());
        assert_eq!(*state, WindowState::default());
    }
}
