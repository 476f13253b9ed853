use crate::domain::ports::SnapshotStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Snapshot backend storing each collection as `<dir>/<collection>.json`.
///
/// This is the default durable surface for the CLI. Writes go to a temporary
/// file first and are renamed into place, so a snapshot on disk is always
/// either the previous one or the new one in full.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    dir: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self, collection: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(collection)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PaymentError::Persistence(format!(
                "reading {collection}: {e}"
            ))),
        }
    }

    async fn save(&self, collection: &str, bytes: Vec<u8>) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| PaymentError::Persistence(format!("creating state dir: {e}")))?;
        let path = self.path_for(collection);
        let tmp = self.dir.join(format!("{collection}.json.tmp"));
        std::fs::write(&tmp, &bytes)
            .map_err(|e| PaymentError::Persistence(format!("writing {collection}: {e}")))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| PaymentError::Persistence(format!("committing {collection}: {e}")))?;
        Ok(())
    }
}
