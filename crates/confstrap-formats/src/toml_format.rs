//! TOML adapter.
//!
//! TOML is the format meant for files people open in an editor, so encoding
//! uses `toml::to_string_pretty`.  Fields annotated with
//! `#[serde(default = "...")]` fill themselves in when a hand-edited file
//! leaves them out.

use confstrap_core::{BoxError, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes the wrapped value as pretty-printed TOML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toml<T>(pub T);

crate::value_wrapper!(Toml);

impl<T> Serializer for Toml<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        Ok(toml::to_string_pretty(&self.0)?.into_bytes())
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), BoxError> {
        let text = std::str::from_utf8(bytes)?;
        self.0 = toml::from_str(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Network {
        #[serde(default = "default_port")]
        port: u16,
        #[serde(default = "default_bind_address")]
        bind_address: String,
    }

    fn default_port() -> u16 {
        24800
    }
    fn default_bind_address() -> String {
        "0.0.0.0".to_string()
    }

    impl Default for Network {
        fn default() -> Self {
            Self {
                port: default_port(),
                bind_address: default_bind_address(),
            }
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct Settings {
        #[serde(default)]
        tags: Vec<String>,
        network: Network,
    }

    #[test]
    fn test_encode_produces_readable_sections() {
        // Arrange
        let settings = Toml::new(Settings::default());

        // Act
        let text = String::from_utf8(settings.encode().unwrap()).unwrap();

        // Assert
        assert!(text.contains("[network]"), "got:\n{text}");
        assert!(text.contains("port = 24800"), "got:\n{text}");
    }

    #[test]
    fn test_decode_partial_section_keeps_field_defaults() {
        // Arrange
        let mut settings = Toml::new(Settings::default());

        // Act
        settings.decode(b"[network]\nport = 9999\n").unwrap();

        // Assert
        assert_eq!(settings.network.port, 9999);
        assert_eq!(settings.network.bind_address, "0.0.0.0");
        assert!(settings.tags.is_empty());
    }

    #[test]
    fn test_decode_malformed_toml_leaves_value_untouched() {
        let mut settings = Toml::new(Settings::default());
        settings.network.port = 1234;

        let result = settings.decode(b"[[[ not valid toml");

        assert!(result.is_err());
        assert_eq!(settings.network.port, 1234);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let mut settings = Toml::new(Settings::default());
        assert!(settings.decode(&[0xFF, 0xFE, 0x00]).is_err());
    }

    #[test]
    fn test_encoded_defaults_decode_to_equal_value() {
        let mut original = Settings::default();
        original.tags.push("studio".to_string());
        let bytes = Toml::new(original.clone()).encode().unwrap();

        let mut restored = Toml::new(Settings::default());
        restored.decode(&bytes).unwrap();

        assert_eq!(restored.into_inner(), original);
    }
}
