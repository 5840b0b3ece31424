use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::ingest_batch::handler::IngestBatchHandler;
use crate::modules::events::use_cases::inspect_all::queries_port::DatasetQueries;
use crate::shared::infrastructure::codec::CodecRegistry;
use crate::shared::infrastructure::dataset_store::in_memory::InMemoryDatasetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn DatasetQueries + Send + Sync>,
    pub ingest_handler: Arc<IngestBatchHandler<InMemoryDatasetStore<Event>>>,
}

impl AppState {
    /// Wires both routes to the same store.
    pub fn new(store: Arc<InMemoryDatasetStore<Event>>, codecs: Arc<CodecRegistry>) -> Self {
        Self {
            queries: store.clone(),
            ingest_handler: Arc::new(IngestBatchHandler::new(store, codecs)),
        }
    }
}
