use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CatalogRepository;

pub struct DeleteRecordUseCase<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogRecord> DeleteRecordUseCase<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    pub async fn execute(&self, id: &str) -> Result<(), DomainError> {
        let id = RecordId::parse(id).map_err(|_| DomainError::NotFound(id.to_string()))?;

        self.repo.delete(&id).await?;

        info!(id = %id, "Catalog record deleted");

        Ok(())
    }
}
