use crate::modules::events::core::batch::EventAck;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::ingest_batch::decode::{DecodeError, decode_batch};
use crate::shared::infrastructure::codec::CodecRegistry;
use crate::shared::infrastructure::dataset_store::{DatasetStore, DatasetStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] DatasetStoreError),
}

pub struct IngestBatchHandler<TStore>
where
    TStore: DatasetStore<Event> + Send + Sync + 'static,
{
    store: Arc<TStore>,
    codecs: Arc<CodecRegistry>,
}

impl<TStore> IngestBatchHandler<TStore>
where
    TStore: DatasetStore<Event> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, codecs: Arc<CodecRegistry>) -> Self {
        Self { store, codecs }
    }

    /// Decodes `body` and appends every event to `dataset`. A body that does
    /// not decode leaves the store untouched.
    pub async fn handle(
        &self,
        dataset: &str,
        content_encoding: Option<&str>,
        body: &[u8],
    ) -> Result<Vec<EventAck>, ApplicationError> {
        let codec = self.codecs.resolve(content_encoding);
        let batch = decode_batch(codec, body)?;
        let acks = batch.acks();

        self.store.append(dataset, batch.into_events()).await?;
        tracing::debug!(
            dataset,
            encoding = codec.name(),
            events = acks.len(),
            "batch accepted"
        );
        Ok(acks)
    }
}
