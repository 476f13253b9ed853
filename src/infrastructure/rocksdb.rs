use crate::domain::ports::SnapshotStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column family holding one snapshot per collection name.
pub const CF_SNAPSHOTS: &str = "snapshots";

/// A persistent snapshot backend using RocksDB.
///
/// Collection snapshots are stored as values keyed by collection name inside
/// a dedicated column family. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbSnapshotStore {
    db: Arc<DB>,
}

impl RocksDbSnapshotStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the snapshots column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_snapshots = ColumnFamilyDescriptor::new(CF_SNAPSHOTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_snapshots])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_handle(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_SNAPSHOTS).ok_or_else(|| {
            PaymentError::Persistence("snapshots column family not found".to_string())
        })
    }
}

#[async_trait]
impl SnapshotStore for RocksDbSnapshotStore {
    async fn load(&self, collection: &str) -> Result<Option<Vec<u8>>> {
        let cf = self.cf_handle()?;
        Ok(self.db.get_cf(cf, collection.as_bytes())?)
    }

    async fn save(&self, collection: &str, bytes: Vec<u8>) -> Result<()> {
        let cf = self.cf_handle()?;
        self.db.put_cf(cf, collection.as_bytes(), bytes)?;
        Ok(())
    }
}
