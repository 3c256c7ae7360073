use async_trait::async_trait;
use thiserror::Error;

use crate::runtime::contract::Record;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("table `{0}` not found")]
    TableNotFound(String),
    #[error("write throttled: {0}")]
    Throttled(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Full-item writes keyed on `Record::id`. An existing item with the same key
/// is replaced.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put_record(&self, record: &Record) -> Result<(), StoreError>;
}
