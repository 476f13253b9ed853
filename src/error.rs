use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("import format error: {0}")]
    ImportFormat(String),
    #[error("nothing to import: {0}")]
    ImportEmpty(String),
    #[error("beneficiary not found for payment: {0}")]
    OrphanReference(String),
    #[error("no payment entries to generate file")]
    NothingToGenerate,
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
