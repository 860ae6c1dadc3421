//! JSON adapter backed by `serde_json`.

use confstrap_core::{BoxError, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes the wrapped value as pretty-printed JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json<T>(pub T);

crate::value_wrapper!(Json);

impl<T> Serializer for Json<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        Ok(serde_json::to_vec_pretty(&self.0)?)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        self.0 = serde_json::from_slice(bytes)?;
        Ok(())
    }
}
