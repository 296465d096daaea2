//! The boundary between the text pipeline and binary output.

use crate::error::Result;
use crate::types::{Document, SlideDeck};

/// Serializes a finished model into a container byte blob.
///
/// Implementations must not mutate the model and must leave no side effects
/// behind when they fail, so a failed encode can simply be retried.
pub trait Encoder<T: ?Sized> {
    fn encode(&self, value: &T) -> Result<Vec<u8>>;
}

/// Encodes the in-memory model itself as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder<SlideDeck> for JsonEncoder {
    fn encode(&self, value: &SlideDeck) -> Result<Vec<u8>> {
        to_json(value)
    }
}

impl Encoder<Document> for JsonEncoder {
    fn encode(&self, value: &Document) -> Result<Vec<u8>> {
        to_json(value)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value)
        .map_err(|e| crate::Error::EncodingError(format!("JSON serialization failed: {}", e)))
}
