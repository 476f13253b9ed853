use crate::error::Result;
use async_trait::async_trait;

/// Snapshot key for the beneficiary collection.
pub const BENEFICIARIES: &str = "beneficiaries";
/// Snapshot key for the payment collection.
pub const PAYMENTS: &str = "payments";

/// Durable key-value surface for collection snapshots.
///
/// Each collection is persisted as a whole under its collection name. The
/// store writes a snapshot after every mutation and reads both snapshots back
/// on startup.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, collection: &str) -> Result<Option<Vec<u8>>>;
    async fn save(&self, collection: &str, bytes: Vec<u8>) -> Result<()>;
}

pub type SnapshotStoreBox = Box<dyn SnapshotStore>;
