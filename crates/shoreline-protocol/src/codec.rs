//! Codec trait and implementations.
//!
//! The outer transport layer is not part of this core; the [`Codec`] trait
//! is its interface. Anything that can turn requests and responses into
//! bytes and back can carry Shoreline traffic.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes Rust types to bytes and decodes bytes back.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or do not match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

/// A [`Codec`] that uses JSON via `serde_json`. Human-readable, which is
/// what we want while the client SDKs are still young.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
