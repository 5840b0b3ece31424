use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::inspect_all::queries_port::DatasetQueries;
use crate::shared::infrastructure::dataset_store::in_memory::InMemoryDatasetStore;
use crate::shared::infrastructure::dataset_store::{DatasetSnapshot, DatasetStore};
use async_trait::async_trait;

#[async_trait]
impl DatasetQueries for InMemoryDatasetStore<Event> {
    async fn list_all(&self) -> anyhow::Result<DatasetSnapshot<Event>> {
        Ok(self.snapshot().await?)
    }
}
