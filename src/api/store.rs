//! In-memory store of uploaded pay history data sets.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::source::PayHistory;

/// Uploaded pay histories keyed by data set id.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct DataSetStore {
    data_sets: Arc<RwLock<HashMap<Uuid, PayHistory>>>,
}

impl DataSetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a pay history and returns its new id.
    pub async fn create(&self, history: PayHistory) -> Uuid {
        let id = Uuid::new_v4();
        self.data_sets.write().await.insert(id, history);
        id
    }

    /// Returns a copy of the pay history stored under `id`.
    pub async fn get(&self, id: Uuid) -> EngineResult<PayHistory> {
        self.data_sets
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| EngineError::DataSetNotFound { id: id.to_string() })
    }

    /// Removes the pay history stored under `id`.
    pub async fn clear(&self, id: Uuid) -> EngineResult<()> {
        self.data_sets
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| EngineError::DataSetNotFound { id: id.to_string() })
    }

    /// Returns the number of stored data sets.
    pub async fn len(&self) -> usize {
        self.data_sets.read().await.len()
    }

    /// Returns true if no data sets are stored.
    pub async fn is_empty(&self) -> bool {
        self.data_sets.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_clear() {
        let store = DataSetStore::new();
        let id = store.create(PayHistory::default()).await;

        assert_eq!(store.len().await, 1);
        assert!(store.get(id).await.unwrap().is_empty());

        store.clear(id).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = DataSetStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            store.get(id).await,
            Err(EngineError::DataSetNotFound { .. })
        ));
        assert!(matches!(
            store.clear(id).await,
            Err(EngineError::DataSetNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_clones_share_data_sets() {
        let store = DataSetStore::new();
        let shared = store.clone();
        let id = store.create(PayHistory::default()).await;

        assert!(shared.get(id).await.is_ok());
    }
}
