use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{CatalogRepository, StaticCatalogPort};

/// Copies the bundled records into an empty store.
pub struct SeedCatalogUseCase<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
    source: Arc<dyn StaticCatalogPort<T>>,
}

impl<T: CatalogRecord> SeedCatalogUseCase<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>, source: Arc<dyn StaticCatalogPort<T>>) -> Self {
        Self { repo, source }
    }

    /// Returns how many records were inserted; zero when the store already has data.
    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let existing = self.repo.count().await?;
        if existing > 0 {
            info!(existing, "Store already populated, skipping seed");
            return Ok(0);
        }

        let mut inserted = 0;
        for mut record in self.source.all() {
            // Static ids are not part of the store's id space.
            record.set_id(RecordId::default());
            self.repo.create(record).await?;
            inserted += 1;
        }

        info!(inserted, "Seeded store from static catalog");
        Ok(inserted)
    }
}
