use async_trait::async_trait;
use fertibase_domain::{CatalogRecord, DomainError, RecordId};

/// Document storage behind the catalog service.
#[async_trait]
pub trait CatalogRepository<T: CatalogRecord>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>, DomainError>;

    /// Stores `record` under a newly assigned id; any id on the input is ignored.
    async fn create(&self, record: T) -> Result<T, DomainError>;

    /// Full replacement. `DomainError::NotFound` when `id` does not exist.
    async fn update(&self, id: &RecordId, record: T) -> Result<T, DomainError>;

    async fn delete(&self, id: &RecordId) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
