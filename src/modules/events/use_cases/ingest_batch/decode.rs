use crate::modules::events::core::batch::Batch;
use crate::shared::infrastructure::codec::ContentCodec;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decompress {encoding} body: {source}")]
    Decompress {
        encoding: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("body is not a JSON array of events: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode_batch(codec: &dyn ContentCodec, body: &[u8]) -> Result<Batch, DecodeError> {
    let raw = codec
        .decode(body)
        .map_err(|source| DecodeError::Decompress {
            encoding: codec.name(),
            source,
        })?;
    Ok(serde_json::from_slice(&raw)?)
}
