use async_trait::async_trait;
use fertibase_domain::{CatalogRecord, DomainError, RecordId};

/// Read-only client for the remote catalog service. Calls are independent
/// and hold no session state.
#[async_trait]
pub trait RemoteCatalogPort<T: CatalogRecord>: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<T>, DomainError>;

    /// `DomainError::NotFound` when the service affirmatively has no such record.
    async fn fetch_by_id(&self, id: &RecordId) -> Result<T, DomainError>;
}
