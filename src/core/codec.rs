// src/core/codec.rs

//! Converts domain key and member types to and from their wire byte form.

use crate::core::RedSetError;
use bytes::Bytes;

/// A deterministic, round-trip-safe conversion between a domain type and its
/// byte representation. Key equality on the server follows the encoded bytes,
/// so two values that encode identically name the same key.
pub trait Codec<T>: Send + Sync {
    fn encode(&self, value: &T) -> Result<Bytes, RedSetError>;
    fn decode(&self, raw: Bytes) -> Result<T, RedSetError>;
}

/// UTF-8 string codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec<String> for StringCodec {
    fn encode(&self, value: &String) -> Result<Bytes, RedSetError> {
        Ok(Bytes::copy_from_slice(value.as_bytes()))
    }

    fn decode(&self, raw: Bytes) -> Result<String, RedSetError> {
        String::from_utf8(raw.to_vec())
            .map_err(|e| RedSetError::Codec(format!("invalid UTF-8 member: {e}")))
    }
}

/// Identity codec for callers that already work in raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesCodec;

impl Codec<Bytes> for BytesCodec {
    fn encode(&self, value: &Bytes) -> Result<Bytes, RedSetError> {
        Ok(value.clone())
    }

    fn decode(&self, raw: Bytes) -> Result<Bytes, RedSetError> {
        Ok(raw)
    }
}
