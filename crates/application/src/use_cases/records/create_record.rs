use fertibase_domain::{CatalogRecord, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CatalogRepository;

pub struct CreateRecordUseCase<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogRecord> CreateRecordUseCase<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, record), fields(domain = T::DOMAIN.to_str()))]
    pub async fn execute(&self, record: T) -> Result<T, DomainError> {
        record.validate()?;

        let created = self.repo.create(record).await?;

        info!(id = %created.id(), name = created.display_name(), "Catalog record created");

        Ok(created)
    }
}
