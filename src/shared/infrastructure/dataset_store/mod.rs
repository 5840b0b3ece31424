// Dataset store port.
//
// A dataset is a named, append-only sequence of events. Names are created
// lazily on first append and live for as long as the store does.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

/// Every dataset seen so far, keyed by name, events in arrival order.
pub type DatasetSnapshot<Event> = BTreeMap<String, Vec<Event>>;

#[derive(Debug, Error)]
pub enum DatasetStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DatasetStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    /// Appends the whole batch to `dataset` in order, or nothing at all.
    async fn append(&self, dataset: &str, events: Vec<Event>) -> Result<(), DatasetStoreError>;
    async fn snapshot(&self) -> Result<DatasetSnapshot<Event>, DatasetStoreError>;
}

pub mod in_memory;
