use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::dataset_store::DatasetSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetQueries {
    /// Every dataset written so far with its full event history.
    async fn list_all(&self) -> anyhow::Result<DatasetSnapshot<Event>>;
}
