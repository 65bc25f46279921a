use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CatalogRepository;

pub struct UpdateRecordUseCase<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogRecord> UpdateRecordUseCase<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }

    /// Replaces the stored document. The path id wins over any id in the body.
    #[instrument(skip(self, record), fields(domain = T::DOMAIN.to_str()))]
    pub async fn execute(&self, id: &str, mut record: T) -> Result<T, DomainError> {
        let id = RecordId::parse(id).map_err(|_| DomainError::NotFound(id.to_string()))?;

        record.validate()?;
        record.set_id(id.clone());

        let updated = self.repo.update(&id, record).await?;

        info!(id = %id, "Catalog record updated");

        Ok(updated)
    }
}
