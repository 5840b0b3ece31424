use crate::shared::infrastructure::dataset_store::{
    DatasetSnapshot, DatasetStore, DatasetStoreError,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct InMemoryDatasetStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<BTreeMap<String, Vec<Event>>>,
    is_offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> InMemoryDatasetStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), DatasetStoreError> {
        if self.is_offline {
            return Err(DatasetStoreError::Backend("Dataset store offline".into()));
        }
        Ok(())
    }
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryDatasetStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<Event> DatasetStore<Event> for InMemoryDatasetStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn append(&self, dataset: &str, events: Vec<Event>) -> Result<(), DatasetStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.entry(dataset.to_string()).or_default().extend(events);
        Ok(())
    }

    async fn snapshot(&self) -> Result<DatasetSnapshot<Event>, DatasetStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }
}
