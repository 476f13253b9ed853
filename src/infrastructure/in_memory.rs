use crate::domain::ports::SnapshotStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory snapshot backend.
///
/// `Clone` shares the underlying map, so a cloned handle observes writes made
/// through the original. Used by tests and for ephemeral runs where
/// durability is not required.
#[derive(Default, Clone)]
pub struct InMemorySnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, collection: &str) -> Result<Option<Vec<u8>>> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(collection).cloned())
    }

    async fn save(&self, collection: &str, bytes: Vec<u8>) -> Result<()> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(collection.to_string(), bytes);
        Ok(())
    }
}
